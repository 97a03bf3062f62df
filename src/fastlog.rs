/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::bits::{float_from_bits, float_to_bits};

/// Curvature of the production approximation `log2(1 + f) ~ f * (1 + K * (1 - f))`.
///
/// Tuned for minimum mean squared error, the two polynomial constants are
/// `c0 = 1 + K` and `c1 = -K`.
pub const K: f64 = 0.3462012;

const C0: f32 = (1. + K) as f32;
const KF: f32 = K as f32;

/// Coefficients of the correction polynomial `f * (c0 + c1 * f)`.
///
/// Evaluation is carried out in `f32`, both constants are rounded to `f32`
/// before use.
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct ApproxConstants {
    pub c0: f64,
    pub c1: f64,
}

impl ApproxConstants {
    /// Constants shipped with [fast_log2] and [fast_log].
    pub const PRODUCTION: ApproxConstants = ApproxConstants::from_k(K);

    #[inline]
    pub const fn new(c0: f64, c1: f64) -> ApproxConstants {
        ApproxConstants { c0, c1 }
    }

    /// One parameter family `c0 = 1 + k`, `c1 = -k`, exact at `f = 0` and `f = 1`.
    #[inline]
    pub const fn from_k(k: f64) -> ApproxConstants {
        ApproxConstants { c0: 1. + k, c1: -k }
    }

    /// Approximate log2 with these constants.
    #[inline]
    pub const fn log2(self, x: f32) -> f32 {
        fast_log2_with(x, self.c0, self.c1)
    }

    /// Approximate natural logarithm with these constants.
    #[inline]
    pub const fn ln(self, x: f32) -> f32 {
        std::f32::consts::LN_2 * self.log2(x)
    }
}

impl Default for ApproxConstants {
    fn default() -> Self {
        ApproxConstants::PRODUCTION
    }
}

/// Splits `x` into its biased exponent and the fraction `f` in `[0, 1)`.
#[inline(always)]
const fn split_exponent(x: f32) -> (f32, f32) {
    let bits = float_to_bits(x);
    // Sign bit is assumed clear, so this is the biased exponent.
    let exp_biased = bits >> 23;
    // Forcing the exponent to the bias leaves 1.mantissa in [1, 2).
    let m = float_from_bits((bits & 0x7f_ffff) | (0x7f << 23));
    (exp_biased as f32, m - 1.)
}

/// Fast approximate log2 with arbitrary polynomial constants.
///
/// Computes `f * (c0 + c1 * f) - 127 + e` where `e` is the biased exponent
/// and `f` the fraction of `x`.
/// Does no range checking: `x` must be positive, finite and normal.
#[inline]
pub const fn fast_log2_with(x: f32, c0: f64, c1: f64) -> f32 {
    let c0 = c0 as f32;
    let c1 = c1 as f32;
    let (e, f) = split_exponent(x);
    f * (c0 + c1 * f) - 127. + e
}

/// Fast approximate log2.
///
/// Does no range checking: `x` must be positive, finite and normal,
/// anything else yields an unspecified value.
#[inline]
pub const fn fast_log2(x: f32) -> f32 {
    let (e, f) = split_exponent(x);
    f * (C0 - KF * f) - 127. + e
}

/// Fast approximate natural logarithm, `ln(2) * fast_log2(x)`.
///
/// Does no range checking.
#[inline]
pub const fn fast_log(x: f32) -> f32 {
    std::f32::consts::LN_2 * fast_log2(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_fast_log2_unit_interval_formula() {
        let mut mantissa = 0u32;
        while mantissa < 0x80_0000 {
            let x = f32::from_bits(0x3f80_0000 | mantissa);
            let f = x - 1.;
            let expected = f * (C0 - KF * f) - 127. + 127.;
            assert_eq!(fast_log2(x).to_bits(), expected.to_bits(), "x = {x}");
            mantissa += 97;
        }
    }

    #[test]
    fn test_fast_log2_powers_of_two() {
        assert_eq!(fast_log2(8.), 3.);
        assert_eq!(fast_log2(1.), 0.);
        assert_eq!(fast_log2(0.25), -2.);
        for e in -126..=127 {
            let x = f32::from_bits(((e + 127) as u32) << 23);
            assert_eq!(fast_log2(x), e as f32, "2^{e}");
        }
    }

    #[test]
    fn test_fast_log2_twelve() {
        let exact = 12f64.log2();
        let approx = fast_log2(12.);
        println!("fast_log2(12) = {approx}, exact {exact}");
        assert!((approx as f64 - exact).abs() < 0.01);
    }

    #[test]
    fn test_fast_log() {
        assert_eq!(fast_log(1.), 0.);
        assert!((fast_log(std::f32::consts::E) - 1.).abs() < 0.01);
        assert!((fast_log(10.) - 10f32.ln()).abs() < 0.01);
        assert_eq!(fast_log(12.), std::f32::consts::LN_2 * fast_log2(12.));
    }

    #[test]
    fn test_generalized_matches_production() {
        let constants = ApproxConstants::PRODUCTION;
        assert_eq!(constants, ApproxConstants::from_k(K));
        assert_eq!(constants, ApproxConstants::default());
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100_000 {
            // Any positive normal pattern.
            let bits = rng.random_range(0x0080_0000u32..0x7f80_0000);
            let x = f32::from_bits(bits);
            assert_eq!(
                fast_log2(x).to_bits(),
                fast_log2_with(x, 1. + K, -K).to_bits(),
                "x = {x}"
            );
            assert_eq!(fast_log(x).to_bits(), constants.ln(x).to_bits());
        }
    }

    #[test]
    fn test_fast_log2_error_bound() {
        let mut max_diff = 0f64;
        for i in 1..20000 {
            let x = i as f32 / 1000.;
            let exact = (x as f64).log2();
            max_diff = max_diff.max((fast_log2(x) as f64 - exact).abs());
        }
        println!("max diff {max_diff}");
        assert!(max_diff < 0.01);
    }
}
