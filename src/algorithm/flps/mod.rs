//! fLPS parameter advisor.
//!
//! fLPS scans windows between a minimum (m) and maximum (M) length and
//! reports compositional biases whose binomial P-value falls below the
//! threshold t. For a target region length this module returns one
//! `(m, M, t)` set per coverage level.

pub mod tables;

use tracing::debug;

use super::common::constants::{FLPS_MAX_LOG10_THRESHOLD, FLPS_MIN_RUN, MIN_TARGET_LENGTH};
use super::ParameterAdvisor;
use crate::common::{AlgorithmKind, Coverage, Focus, Recommendation, Rejection, Request};

pub use tables::{FlpsLevel, MinRunRule};

/// Recommended fLPS window range and P-value threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlpsParams {
    /// Minimum window length (m)
    pub min_run: i64,
    /// Maximum window length (M)
    pub max_window: i64,
    pub log10_threshold: f64,
}

impl FlpsParams {
    pub fn compute(level: &FlpsLevel, target_length: u32) -> Self {
        let max_window = level.max_window.eval(target_length).round() as i64;
        let min_run = level
            .min_run
            .select(target_length)
            .map_or(max_window, |rule| rule.apply(max_window, target_length));
        let log10_threshold = level.log10_threshold.eval(target_length);
        Self {
            min_run,
            max_window,
            log10_threshold,
        }
    }

    /// P-value threshold (t)
    pub fn threshold(&self) -> f64 {
        10f64.powf(self.log10_threshold)
    }
}

/// Focus/coverage/length combinations with no usable fit, whatever the
/// formulas return.
fn is_excluded(focus: Focus, coverage: Coverage, len: u32) -> bool {
    match (focus, coverage) {
        (Focus::Narrow, _) if len <= 10 => true,
        (Focus::Narrow, Coverage::TwentyFive) => len < 50,
        (Focus::Narrow, Coverage::Forty) => len < 100,
        (Focus::Diverse, Coverage::Forty) => len <= 15,
        _ => false,
    }
}

/// Rejection reasons for a computed fLPS set
pub fn gate(request: &Request, level: &FlpsLevel, params: &FlpsParams) -> Vec<Rejection> {
    let len = request.target_length();
    let mut reasons = Vec::new();

    if len < MIN_TARGET_LENGTH || len > level.upper_bound {
        reasons.push(Rejection::TargetLength);
    }
    if params.log10_threshold > FLPS_MAX_LOG10_THRESHOLD {
        reasons.push(Rejection::ThresholdTooHigh);
    }
    if !params.log10_threshold.is_finite() {
        reasons.push(Rejection::NonFinite);
    }
    if params.min_run < FLPS_MIN_RUN {
        reasons.push(Rejection::MinRunTooShort);
    }
    if is_excluded(request.focus(), level.coverage, len) {
        reasons.push(Rejection::ExcludedCombination);
    }

    reasons
}

/// Advisor for the fLPS compositional-bias detector
#[derive(Debug, Clone, Copy, Default)]
pub struct FlpsAdvisor;

impl ParameterAdvisor for FlpsAdvisor {
    type Params = FlpsParams;

    const KIND: AlgorithmKind = AlgorithmKind::Flps;

    fn recommend(request: &Request, coverage: Coverage) -> Recommendation<FlpsParams> {
        let level = tables::level(request.focus(), coverage);
        let params = FlpsParams::compute(level, request.target_length());
        let reasons = gate(request, level, &params);

        debug!(
            coverage = coverage.percent(),
            min_run = params.min_run,
            max_window = params.max_window,
            log10_threshold = params.log10_threshold,
            ?reasons,
            "flps level evaluated"
        );

        Recommendation::from_gate(coverage, level.upper_bound, params, reasons)
    }
}
