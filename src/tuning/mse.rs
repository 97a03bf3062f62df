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
use crate::fastlog::ApproxConstants;
use crate::tuning::suite::{LogBase, SampleSuite};

/// Mean squared error of `approx` against the exact `base` logarithm over `suite`.
///
/// Differences and the running sum are kept in `f64`, samples are visited in
/// suite order so the result is reproducible bit for bit.
pub fn mean_squared_error<F>(suite: &SampleSuite, base: LogBase, approx: F) -> f64
where
    F: Fn(f32) -> f32,
{
    let sum = suite.iter().fold(0f64, |acc, sample| {
        let delta = approx(sample.x()) as f64 - sample.exact(base);
        acc + delta * delta
    });
    sum / suite.len() as f64
}

#[inline]
pub fn log2_mse(suite: &SampleSuite, constants: ApproxConstants) -> f64 {
    mean_squared_error(suite, LogBase::Two, |x| constants.log2(x))
}

#[inline]
pub fn ln_mse(suite: &SampleSuite, constants: ApproxConstants) -> f64 {
    mean_squared_error(suite, LogBase::Natural, |x| constants.ln(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fastlog::{K, fast_log, fast_log2};

    // Regression baselines over `SampleSuite::canonical()`.
    const CANONICAL_LOG2_MSE: f64 = 2.9901569008407446e-05;
    const CANONICAL_LN_MSE: f64 = 1.4366358481169555e-05;

    #[test]
    fn test_canonical_log2_mse() {
        let suite = SampleSuite::canonical();
        let mse = mean_squared_error(suite, LogBase::Two, fast_log2);
        println!("log2 MSE is {mse:e}");
        assert_eq!(mse, CANONICAL_LOG2_MSE);
        assert_eq!(log2_mse(suite, ApproxConstants::PRODUCTION), mse);
    }

    #[test]
    fn test_canonical_ln_mse() {
        let suite = SampleSuite::canonical();
        let mse = mean_squared_error(suite, LogBase::Natural, fast_log);
        println!("ln MSE is {mse:e}");
        assert_eq!(mse, CANONICAL_LN_MSE);
        assert_eq!(ln_mse(suite, ApproxConstants::PRODUCTION), mse);
        // MSE[ln] ~ ln(2)^2 * MSE[log2]. Not exact: ln is rounded to f32 after
        // scaling by the f32 LN_2, and compared against its own exact column.
        let scaled = std::f64::consts::LN_2 * std::f64::consts::LN_2 * CANONICAL_LOG2_MSE;
        assert!(((mse - scaled) / scaled).abs() < 1e-4, "{mse} vs {scaled}");
    }

    #[test]
    fn test_beats_quarter_k() {
        // log2(1 + f) ~ f * (1 + k - k * f) with the textbook k = 1/4.
        let suite = SampleSuite::canonical();
        let mse = log2_mse(suite, ApproxConstants::from_k(K));
        let quarter = log2_mse(suite, ApproxConstants::from_k(0.25));
        println!("MSE {mse:e}, k = 1/4 MSE {quarter:e}");
        assert!(mse < quarter);
    }

    #[test]
    fn test_beats_leela_constants() {
        let suite = SampleSuite::canonical();
        let mse = log2_mse(suite, ApproxConstants::PRODUCTION);
        let leela = log2_mse(suite, ApproxConstants::new(1.3465552, -0.34655523));
        println!("MSE {mse:e}, Leela MSE {leela:e}");
        assert!(mse < leela);
    }

    #[test]
    fn test_small_integers_not_worse() {
        let small = SampleSuite::from_values(1u32..=256).unwrap();
        let small_mse = log2_mse(&small, ApproxConstants::PRODUCTION);
        let suite_mse = log2_mse(SampleSuite::canonical(), ApproxConstants::PRODUCTION);
        println!("small x MSE {small_mse:e}, suite MSE {suite_mse:e}");
        assert!(small_mse <= suite_mse);
    }

    #[test]
    fn test_generalized_form_matches_on_suite() {
        for sample in SampleSuite::canonical() {
            let x = sample.x();
            assert_eq!(
                fast_log2(x).to_bits(),
                ApproxConstants::new(1. + K, -K).log2(x).to_bits(),
                "x = {x}"
            );
        }
    }

    #[test]
    fn test_exact_approximator_has_zero_error() {
        let suite = SampleSuite::from_values([1f32, 2., 4., 0.5]).unwrap();
        assert_eq!(mean_squared_error(&suite, LogBase::Two, |x| x.log2()), 0.);
        let mse = mean_squared_error(&suite, LogBase::Two, |_| 1.);
        // (1 - 0)^2 + 0 + (1 - 2)^2 + (1 + 1)^2 over 4 samples.
        assert_eq!(mse, 6. / 4.);
    }
}
