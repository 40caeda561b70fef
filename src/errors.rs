//! The error taxonomy for a render run.  Every error here is terminal:
//! this is a single-pass batch computation with nothing transient to
//! retry against, so the caller's only sensible move is to report the
//! failure and stop.

use image::ImageError;
use std::io;

/// Everything that can go wrong between parsing the configuration and
/// writing the finished image.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The escape threshold argument was not a decimal number.
    /// Coercing such input to a default would silently change the
    /// picture, so it is rejected outright.
    #[fail(display = "invalid threshold '{}': not a decimal number", _0)]
    Threshold(String),

    /// The viewport corners are misordered or the pixel grid is empty.
    #[fail(display = "invalid viewport: {}", _0)]
    Viewport(String),

    /// The pixel buffer for the requested dimensions cannot be sized.
    #[fail(display = "cannot allocate a {}x{} pixel buffer", _0, _1)]
    Allocation(usize, usize),

    /// The output file could not be opened or written, or the input
    /// file could not be read.
    #[fail(display = "i/o error: {}", _0)]
    Io(#[fail(cause)] io::Error),

    /// The image codec rejected the data while encoding or decoding.
    #[fail(display = "image error: {}", _0)]
    Image(#[fail(cause)] ImageError),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> RenderError {
        RenderError::Io(err)
    }
}

impl From<ImageError> for RenderError {
    fn from(err: ImageError) -> RenderError {
        RenderError::Image(err)
    }
}
