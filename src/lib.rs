#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the collection of complex numbers c for
//! which the sequence z = z * z + c, started at zero, stays bounded
//! forever.  For every pixel of the output image we map the pixel to
//! a point c on the complex plane and count the iterations it takes
//! for the orbit of c to escape past a threshold.  Points that never
//! escape within the iteration budget are presumed members of the
//! set; every other point gets a color derived from how quickly it
//! fled.  The finished raster is written out as a binary PPM file.

extern crate image;
extern crate itertools;
extern crate num;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub mod color;
pub mod errors;
pub mod escape;
pub mod planes;
pub mod ppm;
pub mod render;

pub use color::{normalizer, Color, Palette};
pub use errors::RenderError;
pub use escape::escape_time;
pub use planes::Viewport;
pub use ppm::PpmImage;
pub use render::{parse_threshold, RenderConfig, Renderer};
