//! Contains the Viewport struct, which describes the relationship
//! between the integral pixel plane with an origin at 0,0 and a
//! rectangle on the complex plane defined by its leftlower and
//! rightupper corners.  Pixels map to points affinely, so the same
//! pixel on the same viewport always yields the same coordinate.
use errors::RenderError;
use num::Complex;

/// A rectangle of the complex plane stretched over a pixel grid.
/// Row 0 of the grid corresponds to the imaginary minimum, so images
/// built from it have their origin at the top-left.
#[derive(Debug)]
pub struct Viewport {
    /// Width of the pixel grid.
    pub width: usize,
    /// Height of the pixel grid.
    pub height: usize,
    /// The left-lower corner of the complex rectangle.
    pub leftlower: Complex<f64>,
    /// The right-upper corner of the complex rectangle.
    pub rightupper: Complex<f64>,
    // The width and height of one pixel step on the complex plane.
    steps: (f64, f64),
}

impl Viewport {
    /// Constructor.  Takes the dimensions of the pixel grid and the
    /// two corners of the complex rectangle.  An empty grid or a pair
    /// of misordered corners is a configuration error.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<Viewport, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::Viewport(format!(
                "the pixel grid {}x{} is empty",
                width, height
            )));
        }

        if rightupper.re <= leftlower.re {
            return Err(RenderError::Viewport(
                "the left lower corner is not to the left of the right upper corner".to_string(),
            ));
        }

        if rightupper.im <= leftlower.im {
            return Err(RenderError::Viewport(
                "the left lower corner is not lower than the right upper corner".to_string(),
            ));
        }

        let steps = (
            (rightupper.re - leftlower.re) / (width as f64),
            (rightupper.im - leftlower.im) / (height as f64),
        );

        Ok(Viewport {
            width,
            height,
            leftlower,
            rightupper,
            steps,
        })
    }

    /// The standard viewport: real part in [-2, 1], imaginary part in
    /// [-1, 1], which frames the whole set.
    pub fn standard(width: usize, height: usize) -> Result<Viewport, RenderError> {
        Viewport::new(
            width,
            height,
            Complex::new(-2.0, -1.0),
            Complex::new(1.0, 1.0),
        )
    }

    /// The real coordinate of pixel column x.
    pub fn real(&self, x: usize) -> f64 {
        self.leftlower.re + (x as f64) * self.steps.0
    }

    /// The imaginary coordinate of pixel row y.
    pub fn imag(&self, y: usize) -> f64 {
        self.leftlower.im + (y as f64) * self.steps.1
    }

    /// Given the column and row of a pixel, return the complex number
    /// at the equivalent location on the complex plane.
    pub fn point_at(&self, x: usize, y: usize) -> Complex<f64> {
        Complex::new(self.real(x), self.imag(y))
    }
}
