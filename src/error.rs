// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The failures that can actually happen.  The numeric kernel is total;
//! everything here comes from the edges: a bad configuration going in,
//! or a window that refuses to open.

use failure::Fail;

/// Errors raised while configuring or displaying the animation.
#[derive(Debug, Fail, PartialEq)]
pub enum Error {
    /// A configuration value is out of range.
    #[fail(display = "invalid configuration: {}", _0)]
    Config(String),

    /// A field and the axes or buffer paired with it disagree in size.
    #[fail(display = "shape mismatch: {}", _0)]
    Shape(String),

    /// The window or its pixel surface could not be created or drawn.
    #[fail(display = "display failure: {}", _0)]
    Display(String),
}
