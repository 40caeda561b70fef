//! The raster image container and its PPM serializer.  The buffer is
//! an owned, contiguous, row-major block of RGB pixels with the
//! origin at the top-left, written once at the end of the render
//! pass.  Access is bounds-checked, and every I/O failure on the way
//! to disk is surfaced to the caller.

use errors::RenderError;
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::{self, ColorType, Pixel};
use std::fs::File;
use std::path::Path;

use color::Color;

/// A width x height raster of RGB pixels.
#[derive(Debug, PartialEq, Eq)]
pub struct PpmImage {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PpmImage {
    /// Allocate a zeroed (black) raster.  Dimensions whose pixel
    /// count does not fit in memory arithmetic are an allocation
    /// error rather than a panic.
    pub fn new(width: usize, height: usize) -> Result<PpmImage, RenderError> {
        let len = width
            .checked_mul(height)
            .and_then(|px| px.checked_mul(3).map(|_| px))
            .ok_or(RenderError::Allocation(width, height))?;
        Ok(PpmImage {
            width,
            height,
            pixels: vec![Color::black(); len],
        })
    }

    /// Width of the raster in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the raster in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside a {}x{} raster",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Write one pixel.  Panics if (x, y) is outside the raster.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    /// Read one pixel back.  Panics if (x, y) is outside the raster.
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[self.offset(x, y)]
    }

    /// Serialize the raster to `path` as a binary PPM: the "P6"
    /// magic, the dimensions, the maximum channel value 255, then the
    /// raw RGB triples row-major with the top row first.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let bytes = self.to_bytes();
        let output = File::create(path)?;
        let mut encoder =
            PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
        encoder.encode(
            &bytes[..],
            self.width as u32,
            self.height as u32,
            ColorType::RGB(8),
        )?;
        Ok(())
    }

    /// Read a PPM file back into a raster.  The inverse of `dump`,
    /// used to verify that what we wrote is what anyone else will
    /// read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<PpmImage, RenderError> {
        let rgb = image::open(path)?.to_rgb();
        let (width, height) = rgb.dimensions();
        let mut img = PpmImage::new(width as usize, height as usize)?;
        for (i, px) in rgb.pixels().enumerate() {
            let ch = px.channels();
            img.pixels[i] = Color {
                r: ch[0],
                g: ch[1],
                b: ch[2],
            };
        }
        Ok(img)
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            bytes.push(px.r);
            bytes.push(px.g);
            bytes.push(px.b);
        }
        bytes
    }
}
