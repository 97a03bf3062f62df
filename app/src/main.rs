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
use fastlog::{
    ApproxConstants, FastLogError, K, SampleSuite, TunerOptions, ln_mse, log2_mse, tune_constants,
    tune_k,
};
use log::info;

/// Offline search for the approximation constants over the canonical suite.
///
/// Verbosity is controlled with `RUST_LOG`, e.g. `RUST_LOG=debug` shows every sweep.
fn main() -> Result<(), FastLogError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let suite = SampleSuite::canonical();
    let options = TunerOptions::default();
    info!("canonical suite: {} samples", suite.len());

    let shipped = ApproxConstants::PRODUCTION;
    info!(
        "shipped K = {K}: log2 MSE {:e}, ln MSE {:e}",
        log2_mse(suite, shipped),
        ln_mse(suite, shipped)
    );

    let constrained = tune_k(suite, &options)?;
    info!(
        "constrained: K = {}, c0 = {}, c1 = {}, MSE {:e}",
        constrained.k,
        constrained.constants().c0,
        constrained.constants().c1,
        constrained.mse
    );

    let unconstrained = tune_constants(suite, &options)?;
    info!(
        "unconstrained: c0 = {}, c1 = {}, MSE {:e}",
        unconstrained.constants.c0, unconstrained.constants.c1, unconstrained.mse
    );

    for (name, constants) in [
        ("k = 1/4", ApproxConstants::from_k(0.25)),
        ("Leela", ApproxConstants::new(1.3465552, -0.34655523)),
    ] {
        info!("{name}: log2 MSE {:e}", log2_mse(suite, constants));
    }
    Ok(())
}
