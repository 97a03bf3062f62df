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
#![allow(clippy::excessive_precision)]
#![deny(unreachable_pub)]
//! Fast approximate `log2` and `ln` for `f32`.
//!
//! `log2(2^e * (1 + f)) = e + log2(1 + f)`, the exponent comes straight out of the
//! bit pattern and `log2(1 + f)` is replaced by `f * (1 + K * (1 - f))`.
//! Neither function checks its input, callers must pass positive, finite, normal floats.
//!
//! The `tuning` feature carries the offline machinery that picked [K]: a fixed
//! sample suite, MSE evaluation and the constant search.
mod bits;
#[cfg(feature = "tuning")]
mod err;
mod fastlog;
#[cfg(feature = "tuning")]
mod tuning;

pub use bits::{float_from_bits, float_to_bits};
#[cfg(feature = "tuning")]
pub use err::FastLogError;
pub use fastlog::{ApproxConstants, K, fast_log, fast_log2, fast_log2_with};
#[cfg(feature = "tuning")]
pub use tuning::{
    ConstantsFit, FloatSample, KFit, LogBase, MAX_NORMAL_EXPONENT, MIN_NORMAL_EXPONENT,
    SampleSuite, SuiteOptions, TunerOptions, ln_mse, log2_mse, mean_squared_error,
    tune_constants, tune_k,
};
