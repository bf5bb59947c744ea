#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contourbrot renderer
//!
//! The Mandelbrot takes a point on the complex plane and repeatedly
//! multiplies it by itself, measuring how quickly that number goes to
//! infinity.  This "velocity" (how many steps it takes to get past a
//! magnitude of 2) is a number for every point, and a grid of them is
//! a landscape: flat and low far from the set, rising in terraces
//! toward its edge, and a plateau at the iteration limit over the
//! black heart.
//!
//! Contourbrot samples that landscape once, traces its level curves,
//! and then shows them as a 3D contour surface while the camera swings
//! around it, one step per frame.  Nothing is recomputed per frame;
//! only the point of view changes.

extern crate crossbeam;
extern crate failure;
extern crate font8x8;
extern crate image;
extern crate itertools;
extern crate log;
extern crate num;
extern crate pixels;
extern crate winit;

pub mod camera;
pub mod canvas;
pub mod clock;
pub mod colormap;
pub mod config;
pub mod contour;
pub mod display;
pub mod error;
pub mod escape;
pub mod planes;
pub mod scene;

pub use colormap::Colormap;
pub use config::Config;
pub use contour::ContourSet;
pub use error::Error;
pub use escape::{escape_time, EscapeField, EscapeRenderer};
pub use planes::{Axis, SampleGrid};
pub use scene::Scene;

/// Validates the configuration, computes the escape field and its level
/// curves, and shows the rotating view until the window is closed.
pub fn run(config: Config) -> Result<(), Error> {
    config.validate()?;
    let scene = Scene::build(&config)?;
    display::show(scene, &config)
}
