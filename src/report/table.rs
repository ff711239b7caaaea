//! Per-algorithm table columns and cell formatting

use crate::algorithm::{FlpsAdvisor, FlpsParams, ParameterAdvisor, SegAdvisor, SegParams};
use crate::common::Rejection;

/// Columns and cell text of an advisor's report table.
pub trait ReportTable: ParameterAdvisor {
    /// Column names after `Estimated_coverage`
    const COLUMNS: &'static str;
    /// Underlines for `COLUMNS`
    const RULES: &'static str;
    /// Downstream program named in the footer
    const DOWNSTREAM: &'static str;

    fn format_params(params: &Self::Params) -> String;

    fn format_not_applicable(upper_bound: u32, reasons: &[Rejection]) -> String;
}

impl ReportTable for SegAdvisor {
    const COLUMNS: &'static str = "L\tK1\tK2";
    const RULES: &'static str = "-\t--\t---";
    const DOWNSTREAM: &'static str = "SEG algorithm";

    fn format_params(params: &SegParams) -> String {
        format!("{}\t{:.2}\t{:.2}", params.window, params.locut, params.hicut)
    }

    // The short-target wording only replaces the generic one for the
    // 40% DIVERSE length < 10 case.
    fn format_not_applicable(upper_bound: u32, reasons: &[Rejection]) -> String {
        let shortest = if reasons.contains(&Rejection::ShortDiverseTarget) {
            10
        } else {
            5
        };
        format!("NA [ target length <{shortest} OR >{upper_bound}, OR K2>4.2]")
    }
}

impl ReportTable for FlpsAdvisor {
    const COLUMNS: &'static str = "m\tM\tt";
    const RULES: &'static str = "-\t-\t--";
    const DOWNSTREAM: &'static str = "fLPS program";

    fn format_params(params: &FlpsParams) -> String {
        format!(
            "{}\t{}\t{}",
            params.min_run,
            params.max_window,
            format_exponential(params.threshold(), 1)
        )
    }

    fn format_not_applicable(upper_bound: u32, _reasons: &[Rejection]) -> String {
        format!("NA [ target length <5 OR >{upper_bound}, OR t>0.001]")
    }
}

/// Scientific notation with a signed, at least two-digit exponent
/// (`1.0e-05`), as printed by C's `%.Ne`.
pub fn format_exponential(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}
