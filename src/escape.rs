// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  This is the mathematical heart of the
//! renderer: it measures the "velocity" with which a point flees the
//! Mandelbrot set, and that velocity is the number the color mapper
//! turns into a pixel.

use num::Complex;

/// Iterate z = z * z + c from zero and return the step at which the
/// modulus of z first exceeded `threshold`, or `limit` if it never
/// did within the budget.  A return value of `limit` means c is
/// presumed to be a member of the set.
///
/// The modulus is checked before each step, so the count reports how
/// many squarings the orbit survived.  The function is total over
/// finite inputs; the threshold is a caller choice, and 2.0 is the
/// smallest bound past which divergence is guaranteed.  The norm is
/// compared directly rather than through the squared-magnitude trick,
/// since the threshold here is configurable and may not be 2.0.
pub fn escape_time(c: Complex<f64>, threshold: f64, limit: u64) -> u64 {
    let mut z: Complex<f64> = Complex::new(0.0, 0.0);
    let mut iter = 0;
    while iter < limit {
        if z.norm() > threshold {
            break;
        }
        z = z * z + c;
        iter += 1;
    }
    iter
}
