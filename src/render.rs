// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The render pass: one strict two-level loop over the pixel grid,
//! pixel to point to escape count to color to raster.  Every pixel is
//! independent of every other, and the raster is owned exclusively by
//! the loop until the single dump call.

use itertools::iproduct;
use num::Complex;

use color::{normalizer, Palette};
use errors::RenderError;
use escape::escape_time;
use planes::Viewport;
use ppm::PpmImage;

/// Everything a render pass needs, in one immutable bundle.  The
/// defaults frame the whole set at 1500x1500 with the classic
/// threshold of 2.0; everything is plain data, so tests can render at
/// any resolution.
#[derive(Copy, Clone, Debug)]
pub struct RenderConfig {
    /// Width of the output image in pixels.
    pub width: usize,
    /// Height of the output image in pixels.
    pub height: usize,
    /// Left-lower corner of the complex rectangle to frame.
    pub leftlower: Complex<f64>,
    /// Right-upper corner of the complex rectangle to frame.
    pub rightupper: Complex<f64>,
    /// Modulus past which an orbit counts as escaped.
    pub threshold: f64,
    /// Iteration budget per point.
    pub max_iterations: u64,
    /// Palette applied uniformly across the render.
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig {
            width: 1500,
            height: 1500,
            leftlower: Complex::new(-2.0, -1.0),
            rightupper: Complex::new(1.0, 1.0),
            threshold: 2.0,
            max_iterations: 1024,
            palette: Palette::Rainbow,
        }
    }
}

/// Parse an escape-threshold argument.  Non-numeric input is an
/// error, never a silent default: a permissive conversion that fell
/// back to 0.0 would make nearly every pixel escape at step zero and
/// quietly produce a very different picture.
pub fn parse_threshold(s: &str) -> Result<f64, RenderError> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| RenderError::Threshold(s.to_string()))
}

/// A validated configuration and its viewport, ready to render.
#[derive(Debug)]
pub struct Renderer {
    viewport: Viewport,
    config: RenderConfig,
}

impl Renderer {
    /// Validate the configuration's viewport and build a renderer
    /// from it.
    pub fn new(config: RenderConfig) -> Result<Renderer, RenderError> {
        let viewport = Viewport::new(
            config.width,
            config.height,
            config.leftlower,
            config.rightupper,
        )?;
        Ok(Renderer { viewport, config })
    }

    /// Run the full pass and return the finished raster.  The
    /// normalizer is computed once here, not per pixel.
    pub fn render(&self) -> Result<PpmImage, RenderError> {
        let mut image = PpmImage::new(self.config.width, self.config.height)?;
        let norm = normalizer(self.config.max_iterations);
        debug!(
            "rendering {}x{} at {} iterations, threshold {}",
            self.config.width, self.config.height, self.config.max_iterations, self.config.threshold
        );
        for (y, x) in iproduct!(0..self.config.height, 0..self.config.width) {
            let c = self.viewport.point_at(x, y);
            let iter = escape_time(c, self.config.threshold, self.config.max_iterations);
            image.set_pixel(x, y, self.config.palette.color_of(iter, norm));
        }
        Ok(image)
    }
}
