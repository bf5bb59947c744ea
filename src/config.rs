// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Every knob the program recognizes, gathered into one value that is
//! handed to the grid, the evaluator and the animation driver.  The
//! defaults are the fixed values the animation was designed around; a
//! bare `Config::default()` reproduces it exactly.

use num::Complex;
use std::time::Duration;

use crate::colormap::Colormap;
use crate::error::Error;

/// Samples along the real axis.
pub const WIDTH: usize = 400;
/// Samples along the imaginary axis.
pub const HEIGHT: usize = 400;
/// Frames in one full turn of the camera.
pub const FRAMES: usize = 60;
/// Escape-time iteration bound, and the top of the vertical axis.
pub const MAX_ITERATIONS: usize = 50;
/// Lower and upper bound of both axes of the sampled domain.
pub const DOMAIN: (f64, f64) = (-2.0, 2.0);
/// Milliseconds between frames.
pub const INTERVAL_MS: u64 = 50;
/// Camera elevation, in degrees.
pub const ELEVATION: f64 = 30.0;
/// Number of iso-levels drawn.
pub const LEVELS: usize = 50;

/// The complete configuration of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Number of samples along the real axis (grid columns).
    pub width: usize,
    /// Number of samples along the imaginary axis (grid rows).
    pub height: usize,
    /// Left-lower corner of the sampled region of the complex plane.
    pub leftlower: Complex<f64>,
    /// Right-upper corner of the sampled region of the complex plane.
    pub rightupper: Complex<f64>,
    /// Iteration bound of the escape-time evaluator.
    pub max_iterations: usize,
    /// Frames in one camera sweep.
    pub frames: usize,
    /// Time between two frames.
    pub interval: Duration,
    /// Camera elevation in degrees, constant across frames.
    pub elevation: f64,
    /// Number of contour levels.
    pub levels: usize,
    /// Color mapping for the levels.
    pub colormap: Colormap,
    /// Worker threads used to compute the escape field.
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: WIDTH,
            height: HEIGHT,
            leftlower: Complex::new(DOMAIN.0, DOMAIN.0),
            rightupper: Complex::new(DOMAIN.1, DOMAIN.1),
            max_iterations: MAX_ITERATIONS,
            frames: FRAMES,
            interval: Duration::from_millis(INTERVAL_MS),
            elevation: ELEVATION,
            levels: LEVELS,
            colormap: Colormap::Viridis,
            threads: 1,
        }
    }
}

impl Config {
    /// The real-axis interval as `(lo, hi)`.
    pub fn re_range(&self) -> (f64, f64) {
        (self.leftlower.re, self.rightupper.re)
    }

    /// The imaginary-axis interval as `(lo, hi)`.
    pub fn im_range(&self) -> (f64, f64) {
        (self.leftlower.im, self.rightupper.im)
    }

    /// Rejects values the pipeline can't do anything sensible with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "grid must have at least one sample per axis, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.leftlower.re < self.rightupper.re) {
            return Err(Error::Config(
                "The left lower corner is not to the left of the right upper corner.".to_string(),
            ));
        }
        if !(self.leftlower.im < self.rightupper.im) {
            return Err(Error::Config(
                "The left lower corner is not lower than the right upper corner".to_string(),
            ));
        }
        if self.frames == 0 {
            return Err(Error::Config("frame count must be positive".to_string()));
        }
        if self.levels == 0 {
            return Err(Error::Config("contour level count must be positive".to_string()));
        }
        if self.threads == 0 {
            return Err(Error::Config("thread count must be positive".to_string()));
        }
        Ok(())
    }
}
