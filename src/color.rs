//! The color mapper.  Turns an escape-time count into an RGB triple.
//! Two palettes are provided; both are pure functions of the count
//! and a precomputed normalizer, so a render pass picks one palette
//! and applies it uniformly.

use num::clamp;
use std::f64::consts::PI;
use std::str::FromStr;

/// One pixel's worth of color, 8 bits per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// All channels zero.
    pub fn black() -> Color {
        Color { r: 0, g: 0, b: 0 }
    }
}

/// The normalizer compresses the highly skewed distribution of escape
/// counts into a palette-friendly range: it is the natural log of the
/// iteration ceiling, computed once per render rather than per pixel.
pub fn normalizer(limit: u64) -> f64 {
    (limit as f64).ln()
}

/// The palette policies the renderer knows how to apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    /// A four-band piecewise-linear ramp over the log of the escape
    /// count.  In each band one channel sweeps between 0 and 255
    /// while the others are pinned, giving a cyan-to-red gradient
    /// without any trigonometry.
    Rainbow,
    /// Three phase-shifted sinusoids over the raw escape count.
    /// Continuous, so it shows none of the banding of the ramp.
    Wave,
}

impl Palette {
    /// Map an escape count to a color.  Total over [0, limit]: a
    /// count of zero is special-cased before the log (ln(0) would
    /// poison the channels with NaN), and every channel is clamped to
    /// [0, 255] before narrowing.
    pub fn color_of(&self, iterations: u64, normalizer: f64) -> Color {
        match *self {
            Palette::Rainbow => {
                let scaled = if iterations > 0 {
                    (iterations as f64).ln()
                } else {
                    0.0
                };
                rainbow(scaled / normalizer)
            }
            Palette::Wave => wave((iterations as f64) / normalizer),
        }
    }
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Palette, String> {
        match s {
            "rainbow" => Ok(Palette::Rainbow),
            "wave" => Ok(Palette::Wave),
            other => Err(format!("unknown palette '{}'", other)),
        }
    }
}

fn channel(value: f64) -> u8 {
    clamp(value, 0.0, 255.0) as u8
}

/// The legacy ramp, band for band.  Within each quarter of [0, 1] two
/// channels are pinned and one sweeps linearly across the band.
fn rainbow(q: f64) -> Color {
    if q < 0.25 {
        Color {
            r: channel(q * 4.0 * 255.0),
            g: 0,
            b: 255,
        }
    } else if q < 0.5 {
        Color {
            r: channel((q - 0.25) * 4.0 * 255.0),
            g: 255,
            b: 255,
        }
    } else if q < 0.75 {
        Color {
            r: 255,
            g: channel(255.0 - (q - 0.5) * 4.0 * 255.0),
            b: 255,
        }
    } else {
        Color {
            r: 255,
            g: 0,
            b: channel(255.0 - (q - 0.75) * 4.0 * 255.0),
        }
    }
}

fn wave(q: f64) -> Color {
    Color {
        r: channel((f64::sin(q * PI * 2.0) + 1.0) / 2.0 * 255.0),
        g: channel((f64::sin(q * PI * 2.0 + 2.0 / 3.0 * PI) + 1.0) / 2.0 * 255.0),
        b: channel((f64::sin(q * PI * 2.0 + 4.0 / 3.0 * PI) + 1.0) / 2.0 * 255.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 1024;

    #[test]
    fn every_count_in_range_produces_a_color() {
        let norm = normalizer(LIMIT);
        for palette in &[Palette::Rainbow, Palette::Wave] {
            for iterations in 0..=LIMIT {
                // Channels are u8, so reaching here at all proves the
                // clamp held; spot-check the struct is well-formed.
                let _ = palette.color_of(iterations, norm);
            }
        }
    }

    #[test]
    fn zero_iterations_is_defined() {
        let norm = normalizer(LIMIT);
        assert_eq!(
            Palette::Rainbow.color_of(0, norm),
            Color { r: 0, g: 0, b: 255 }
        );
    }

    #[test]
    fn rainbow_band_endpoints() {
        let norm = normalizer(LIMIT);
        // ln(1) = 0: the very first band, deep blue.
        assert_eq!(
            Palette::Rainbow.color_of(1, norm),
            Color { r: 0, g: 0, b: 255 }
        );
        // Counts at the ceiling land on q = 1.0: pure red, the color
        // of presumed set members.
        assert_eq!(
            Palette::Rainbow.color_of(LIMIT, norm),
            Color { r: 255, g: 0, b: 0 }
        );
    }

    #[test]
    fn wave_at_zero_is_the_phase_offsets() {
        let norm = normalizer(LIMIT);
        assert_eq!(
            Palette::Wave.color_of(0, norm),
            Color {
                r: 127,
                g: 237,
                b: 17
            }
        );
    }

    #[test]
    fn palettes_parse_by_name() {
        assert_eq!("rainbow".parse::<Palette>(), Ok(Palette::Rainbow));
        assert_eq!("wave".parse::<Palette>(), Ok(Palette::Wave));
        assert!("sepia".parse::<Palette>().is_err());
    }
}
