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
use crate::err::FastLogError;
use crate::fastlog::ApproxConstants;
use crate::tuning::mse::log2_mse;
use crate::tuning::suite::SampleSuite;

/// Search settings for [tune_k] and [tune_constants].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TunerOptions {
    /// Interval searched for `K` in the constrained family.
    pub k_bracket: (f64, f64),
    /// Golden-section stops once its bracket is narrower than this.
    pub tolerance: f64,
    pub max_iterations: usize,
    /// Coordinate sweeps of the unconstrained refinement.
    pub sweeps: usize,
    /// Initial half width around each coefficient, halved after every sweep.
    pub span: f64,
}

impl Default for TunerOptions {
    fn default() -> Self {
        TunerOptions {
            k_bracket: (0., 1.),
            tolerance: 1e-9,
            max_iterations: 100,
            sweeps: 8,
            span: 0.0625,
        }
    }
}

impl TunerOptions {
    fn validate(&self) -> Result<(), FastLogError> {
        let (lo, hi) = self.k_bracket;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(FastLogError::InvalidSearchBracket { lo, hi });
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.) {
            return Err(FastLogError::InvalidTolerance(self.tolerance));
        }
        if !(self.span.is_finite() && self.span > 0.) {
            return Err(FastLogError::InvalidSpan(self.span));
        }
        Ok(())
    }
}

/// Best `K` of the constrained family `c0 = 1 + K`, `c1 = -K`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KFit {
    pub k: f64,
    pub mse: f64,
}

impl KFit {
    #[inline]
    pub const fn constants(&self) -> ApproxConstants {
        ApproxConstants::from_k(self.k)
    }
}

/// Best unconstrained `(c0, c1)` pair.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConstantsFit {
    pub constants: ApproxConstants,
    pub mse: f64,
}

const INV_PHI: f64 = 0.618033988749894848204586834365638118;

/// Golden-section minimization of a unimodal `f` on `[lo, hi]`.
/// Returns the best probed point and its value.
fn golden_section<F>(lo: f64, hi: f64, tolerance: f64, max_iterations: usize, f: F) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    let (mut a, mut b) = (lo, hi);
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);
    for _ in 0..max_iterations {
        if b - a <= tolerance {
            break;
        }
        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = f(d);
        }
    }
    if fc <= fd { (c, fc) } else { (d, fd) }
}

/// Finds the `K` minimizing the log2 MSE over `suite`.
pub fn tune_k(suite: &SampleSuite, options: &TunerOptions) -> Result<KFit, FastLogError> {
    options.validate()?;
    let (lo, hi) = options.k_bracket;
    let (k, mse) = golden_section(lo, hi, options.tolerance, options.max_iterations, |k| {
        log2_mse(suite, ApproxConstants::from_k(k))
    });
    log::debug!("K search over [{lo}, {hi}] found K = {k}, MSE {mse:e}");
    Ok(KFit { k, mse })
}

/// Finds `(c0, c1)` minimizing the log2 MSE over `suite` without tying them together.
///
/// Starts from the [tune_k] optimum and refines each coefficient in turn.
/// A move is taken only if it strictly lowers the MSE, so the result is never
/// worse than the constrained fit.
pub fn tune_constants(
    suite: &SampleSuite,
    options: &TunerOptions,
) -> Result<ConstantsFit, FastLogError> {
    let seed = tune_k(suite, options)?;
    let mut best = ConstantsFit {
        constants: seed.constants(),
        mse: seed.mse,
    };
    let mut span = options.span;
    for sweep in 0..options.sweeps {
        let c1 = best.constants.c1;
        let (c0, mse) = golden_section(
            best.constants.c0 - span,
            best.constants.c0 + span,
            options.tolerance,
            options.max_iterations,
            |c0| log2_mse(suite, ApproxConstants::new(c0, c1)),
        );
        if mse < best.mse {
            best = ConstantsFit {
                constants: ApproxConstants::new(c0, c1),
                mse,
            };
        }

        let c0 = best.constants.c0;
        let (c1, mse) = golden_section(
            best.constants.c1 - span,
            best.constants.c1 + span,
            options.tolerance,
            options.max_iterations,
            |c1| log2_mse(suite, ApproxConstants::new(c0, c1)),
        );
        if mse < best.mse {
            best = ConstantsFit {
                constants: ApproxConstants::new(c0, c1),
                mse,
            };
        }

        log::debug!(
            "sweep {sweep}: c0 = {}, c1 = {}, MSE {:e}",
            best.constants.c0,
            best.constants.c1,
            best.mse
        );
        span *= 0.5;
    }
    Ok(best)
}
