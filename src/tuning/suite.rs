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
use crate::bits::float_from_bits;
use crate::err::FastLogError;
use num_traits::AsPrimitive;
use pxfm::{f_log, f_log2};
use std::sync::OnceLock;

/// Smallest unbiased exponent of a normal `f32`.
pub const MIN_NORMAL_EXPONENT: i32 = -126;
/// Largest unbiased exponent of a finite `f32`.
pub const MAX_NORMAL_EXPONENT: i32 = 127;

const MAX_FRACTION_STEPS: u32 = 1 << 23;

/// Which exact column a sample is compared against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LogBase {
    Two,
    Natural,
}

/// Positive normal `x` with its exact logarithms, computed once in `f64`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FloatSample {
    x: f32,
    log2: f64,
    ln: f64,
}

impl FloatSample {
    pub fn new(x: f32) -> Result<FloatSample, FastLogError> {
        if !(x.is_normal() && x > 0.) {
            return Err(FastLogError::InvalidSample(x));
        }
        Ok(FloatSample::with_exact(x))
    }

    #[inline]
    fn with_exact(x: f32) -> FloatSample {
        let d = x as f64;
        FloatSample {
            x,
            log2: f_log2(d),
            ln: f_log(d),
        }
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub const fn log2(&self) -> f64 {
        self.log2
    }

    #[inline]
    pub const fn ln(&self) -> f64 {
        self.ln
    }

    #[inline]
    pub const fn exact(&self, base: LogBase) -> f64 {
        match base {
            LogBase::Two => self.log2,
            LogBase::Natural => self.ln,
        }
    }
}

/// Grid layout of a [SampleSuite].
///
/// Every unbiased exponent `e` in `min_exponent..=max_exponent` contributes
/// `fraction_steps` samples `2^e * (1 + i / fraction_steps)`.
/// `fraction_steps` must be a power of two not exceeding `2^23`, so every
/// sample is exactly representable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SuiteOptions {
    pub min_exponent: i32,
    pub max_exponent: i32,
    pub fraction_steps: u32,
}

impl Default for SuiteOptions {
    /// Canonical suite, the MSE regression figures refer to this layout.
    fn default() -> Self {
        SuiteOptions {
            min_exponent: MIN_NORMAL_EXPONENT,
            max_exponent: MAX_NORMAL_EXPONENT,
            fraction_steps: 512,
        }
    }
}

impl SuiteOptions {
    fn validate(&self) -> Result<(), FastLogError> {
        for e in [self.min_exponent, self.max_exponent] {
            if !(MIN_NORMAL_EXPONENT..=MAX_NORMAL_EXPONENT).contains(&e) {
                return Err(FastLogError::ExponentOutOfRange(e));
            }
        }
        if self.min_exponent > self.max_exponent {
            return Err(FastLogError::InvalidExponentRange {
                min: self.min_exponent,
                max: self.max_exponent,
            });
        }
        if !self.fraction_steps.is_power_of_two() || self.fraction_steps > MAX_FRACTION_STEPS {
            return Err(FastLogError::InvalidFractionSteps(self.fraction_steps));
        }
        Ok(())
    }

    fn len(&self) -> usize {
        (self.max_exponent - self.min_exponent + 1) as usize * self.fraction_steps as usize
    }
}

/// Fixed, ordered evaluation corpus. Never mutated after construction.
///
/// MSE figures are only comparable between runs over the same suite.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSuite {
    samples: Vec<FloatSample>,
}

impl SampleSuite {
    /// Process wide canonical suite built from [SuiteOptions::default].
    pub fn canonical() -> &'static SampleSuite {
        static CANONICAL: OnceLock<SampleSuite> = OnceLock::new();
        CANONICAL.get_or_init(|| SampleSuite::grid(&SuiteOptions::default()))
    }

    pub fn new(options: &SuiteOptions) -> Result<SampleSuite, FastLogError> {
        options.validate()?;
        Ok(SampleSuite::grid(options))
    }

    /// Ad-hoc suite over arbitrary values, each must be a positive normal float.
    pub fn from_values<T, I>(values: I) -> Result<SampleSuite, FastLogError>
    where
        T: AsPrimitive<f32>,
        I: IntoIterator<Item = T>,
    {
        let samples = values
            .into_iter()
            .map(|v| FloatSample::new(v.as_()))
            .collect::<Result<Vec<_>, _>>()?;
        if samples.is_empty() {
            return Err(FastLogError::EmptySuite);
        }
        Ok(SampleSuite { samples })
    }

    fn grid(options: &SuiteOptions) -> SampleSuite {
        let shift = 23 - options.fraction_steps.trailing_zeros();
        let mut samples = Vec::with_capacity(options.len());
        for e in options.min_exponent..=options.max_exponent {
            let exponent_bits = ((e + 127) as u32) << 23;
            for i in 0..options.fraction_steps {
                let x = float_from_bits(exponent_bits | (i << shift));
                samples.push(FloatSample::with_exact(x));
            }
        }
        SampleSuite { samples }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false, empty suites are rejected on construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[FloatSample] {
        &self.samples
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, FloatSample> {
        self.samples.iter()
    }

    /// Disjoint slices of at most `chunk_size` samples, e.g. one per worker thread.
    ///
    /// A `chunk_size` of zero is treated as one.
    #[inline]
    pub fn chunks(&self, chunk_size: usize) -> std::slice::Chunks<'_, FloatSample> {
        self.samples.chunks(chunk_size.max(1))
    }
}

impl<'a> IntoIterator for &'a SampleSuite {
    type Item = &'a FloatSample;
    type IntoIter = std::slice::Iter<'a, FloatSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
