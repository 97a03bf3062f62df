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
use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub enum FastLogError {
    /// Sample is not a positive, finite, normal float.
    InvalidSample(f32),
    EmptySuite,
    ExponentOutOfRange(i32),
    InvalidExponentRange { min: i32, max: i32 },
    InvalidFractionSteps(u32),
    InvalidSearchBracket { lo: f64, hi: f64 },
    InvalidTolerance(f64),
    InvalidSpan(f64),
}

impl Display for FastLogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FastLogError::InvalidSample(x) => f.write_fmt(format_args!(
                "Sample must be positive, finite and normal, but it was {x}"
            )),
            FastLogError::EmptySuite => f.write_str("Sample suite must not be empty"),
            FastLogError::ExponentOutOfRange(e) => f.write_fmt(format_args!(
                "Exponent {e} is outside of normal f32 range -126..=127"
            )),
            FastLogError::InvalidExponentRange { min, max } => f.write_fmt(format_args!(
                "Invalid exponent range, min {min} is greater than max {max}"
            )),
            FastLogError::InvalidFractionSteps(steps) => f.write_fmt(format_args!(
                "Fraction steps must be a power of two in 1..=8388608, but it was {steps}"
            )),
            FastLogError::InvalidSearchBracket { lo, hi } => f.write_fmt(format_args!(
                "Invalid search bracket [{lo}, {hi}]"
            )),
            FastLogError::InvalidTolerance(tol) => {
                f.write_fmt(format_args!("Tolerance must be positive, but it was {tol}"))
            }
            FastLogError::InvalidSpan(span) => {
                f.write_fmt(format_args!("Search span must be positive, but it was {span}"))
            }
        }
    }
}

impl Error for FastLogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            FastLogError::EmptySuite.to_string(),
            "Sample suite must not be empty"
        );
        assert_eq!(
            FastLogError::InvalidSpan(-1.).to_string(),
            "Search span must be positive, but it was -1"
        );
        let err: Box<dyn Error> = Box::new(FastLogError::ExponentOutOfRange(128));
        assert!(err.to_string().contains("128"));
    }
}
