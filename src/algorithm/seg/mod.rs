//! SEG parameter advisor.
//!
//! SEG masks windows of `L` residues whose complexity falls below the low cut
//! (K1) and extends them while it stays below the high cut (K2). For a target
//! region length this module returns one `(L, K1, K2)` set per coverage level.

pub mod tables;

use tracing::debug;

use super::common::constants::{
    MIN_TARGET_LENGTH, SEG_DIVERSE_40_MIN_LENGTH, SEG_MAX_HICUT,
};
use super::ParameterAdvisor;
use crate::common::{AlgorithmKind, Coverage, Focus, Recommendation, Rejection, Request};

pub use tables::SegLevel;

/// Recommended SEG window and complexity cuts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegParams {
    /// Window length (L)
    pub window: i64,
    /// Low complexity cut (K1)
    pub locut: f64,
    /// High complexity cut (K2)
    pub hicut: f64,
}

impl SegParams {
    /// Evaluate one table row at the target length.
    pub fn compute(level: &SegLevel, target_length: u32) -> Self {
        let window = level.window.eval(target_length).round() as i64;
        let hicut = level.hicut.eval(target_length);
        let locut = hicut - level.locut_gap.eval(target_length);
        Self {
            window,
            locut,
            hicut,
        }
    }
}

/// Rejection reasons for a computed SEG set.
///
/// The 40% DIVERSE short-target case is reported on its own; the generic
/// checks still run so every violated bound is listed.
pub fn gate(request: &Request, level: &SegLevel, params: &SegParams) -> Vec<Rejection> {
    let len = request.target_length();
    let mut reasons = Vec::new();

    if len < MIN_TARGET_LENGTH || len > level.upper_bound {
        reasons.push(Rejection::TargetLength);
    }
    if params.hicut > SEG_MAX_HICUT {
        reasons.push(Rejection::HicutTooHigh);
    }
    if !params.hicut.is_finite() || !params.locut.is_finite() {
        reasons.push(Rejection::NonFinite);
    }
    if level.coverage == Coverage::Forty
        && request.focus() == Focus::Diverse
        && len < SEG_DIVERSE_40_MIN_LENGTH
    {
        reasons.push(Rejection::ShortDiverseTarget);
    }

    reasons
}

/// Advisor for the SEG complexity filter
#[derive(Debug, Clone, Copy, Default)]
pub struct SegAdvisor;

impl ParameterAdvisor for SegAdvisor {
    type Params = SegParams;

    const KIND: AlgorithmKind = AlgorithmKind::Seg;

    fn recommend(request: &Request, coverage: Coverage) -> Recommendation<SegParams> {
        let level = tables::level(request.focus(), coverage);
        let params = SegParams::compute(level, request.target_length());
        let reasons = gate(request, level, &params);

        debug!(
            coverage = coverage.percent(),
            window = params.window,
            locut = params.locut,
            hicut = params.hicut,
            ?reasons,
            "seg level evaluated"
        );

        Recommendation::from_gate(coverage, level.upper_bound, params, reasons)
    }
}
