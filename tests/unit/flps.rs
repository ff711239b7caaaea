//! Unit tests for algorithm/flps

use lcrparams::algorithm::flps::{FlpsAdvisor, FlpsParams};
use lcrparams::{Coverage, Focus, ParameterAdvisor, Rejection};

use super::helpers::{assert_approx_eq, flps_request, mean};

fn params_at(len: i64, focus: Focus, coverage: Coverage) -> FlpsParams {
    let rec = FlpsAdvisor::recommend(&flps_request(len, focus), coverage);
    *rec.params().expect("valid fLPS parameters")
}

#[test]
fn test_narrow_length_5_is_all_na() {
    let rows = FlpsAdvisor::advise(&flps_request(5, Focus::Narrow));
    assert_eq!(rows.len(), 5);
    for row in &rows {
        assert!(!row.is_valid(), "{:?} should be NA", row.coverage);
        assert!(row.has_reason(Rejection::ExcludedCombination));
    }
}

#[test]
fn test_narrow_length_10_excluded_11_not() {
    let rows = FlpsAdvisor::advise(&flps_request(10, Focus::Narrow));
    assert!(rows.iter().all(|r| r.has_reason(Rejection::ExcludedCombination)));

    let rec = FlpsAdvisor::recommend(&flps_request(11, Focus::Narrow), Coverage::Two);
    assert!(!rec.has_reason(Rejection::ExcludedCombination));
}

#[test]
fn test_diverse_two_percent_at_20() {
    let p = params_at(20, Focus::Diverse, Coverage::Two);
    let big_m = (2.534 * 20f64.powf(0.506)).round() as i64;
    assert_eq!(p.max_window, big_m);
    assert_eq!(p.max_window, 12);
    assert_eq!(p.min_run, big_m - 2);
    assert_approx_eq(p.log10_threshold, -0.153 * 20.0 - 3.994, 1e-12);
}

#[test]
fn test_diverse_forty_excludes_up_to_15() {
    let rec = FlpsAdvisor::recommend(&flps_request(15, Focus::Diverse), Coverage::Forty);
    assert!(rec.has_reason(Rejection::ExcludedCombination));

    let p = params_at(16, Focus::Diverse, Coverage::Forty);
    assert_eq!(p.min_run, (0.481 * 16f64.powf(0.876)).round() as i64);
    assert_eq!(p.min_run, 5);
    assert_eq!(p.max_window, 42);
    assert_approx_eq(p.log10_threshold, -0.022 * 16.0 - 2.709, 1e-12);
}

#[test]
fn test_diverse_regime_switch_above_105() {
    let p = params_at(105, Focus::Diverse, Coverage::TwentyFive);
    assert_eq!(p.max_window, (5.647 * 105f64.powf(0.56)).round() as i64);
    assert_eq!(p.min_run, (0.872 * 105f64.powf(0.797)).round() as i64);

    let p = params_at(106, Focus::Diverse, Coverage::TwentyFive);
    let big_m = (6.096 * 106f64.powf(0.552)).round() as i64;
    assert_eq!(p.max_window, big_m);
    assert_eq!(p.min_run, big_m - 50);
    assert_approx_eq(p.log10_threshold, -0.031 * 106.0 - 2.93, 1e-12);

    let p = params_at(200, Focus::Diverse, Coverage::Forty);
    let big_m = (11.126 * 200f64.powf(0.484)).round() as i64;
    assert_eq!(p.max_window, big_m);
    assert_eq!(p.min_run, big_m - 80);
}

#[test]
fn test_narrow_five_percent_threshold_transition() {
    let short = |x: f64| -0.127 * x - 2.183;
    let long = |x: f64| -0.09 * x - 3.173;

    assert_approx_eq(params_at(28, Focus::Narrow, Coverage::Five).log10_threshold, short(28.0), 1e-12);
    for len in 29..33 {
        let x = len as f64;
        let p = params_at(len, Focus::Narrow, Coverage::Five);
        assert_approx_eq(p.log10_threshold, mean(short(x), long(x)), 1e-12);
    }
    assert_approx_eq(params_at(33, Focus::Narrow, Coverage::Five).log10_threshold, long(33.0), 1e-12);
}

#[test]
fn test_narrow_min_equals_max() {
    for (len, coverage) in [
        (20, Coverage::Two),
        (60, Coverage::Five),
        (150, Coverage::Ten),
        (80, Coverage::TwentyFive),
        (150, Coverage::Forty),
    ] {
        let p = params_at(len, Focus::Narrow, coverage);
        assert_eq!(p.min_run, p.max_window);
    }
}

#[test]
fn test_narrow_late_coverage_exclusions() {
    let rec = FlpsAdvisor::recommend(&flps_request(49, Focus::Narrow), Coverage::TwentyFive);
    assert!(rec.has_reason(Rejection::ExcludedCombination));
    let p = params_at(50, Focus::Narrow, Coverage::TwentyFive);
    assert_eq!(p.log10_threshold, -4.0);

    let rec = FlpsAdvisor::recommend(&flps_request(99, Focus::Narrow), Coverage::Forty);
    assert!(rec.has_reason(Rejection::ExcludedCombination));
    let p = params_at(100, Focus::Narrow, Coverage::Forty);
    assert_eq!(p.max_window, (0.889 * 100f64.powf(0.977)).round() as i64);
    assert_eq!(p.log10_threshold, -4.0);
}

#[test]
fn test_threshold_ceiling() {
    // log10(t) = -0.039 * 10 - 2.381 = -2.771
    let rec = FlpsAdvisor::recommend(&flps_request(10, Focus::Diverse), Coverage::TwentyFive);
    assert!(rec.has_reason(Rejection::ThresholdTooHigh));

    let p = params_at(120, Focus::Narrow, Coverage::TwentyFive);
    assert_approx_eq(p.log10_threshold, -0.028 * 120.0 - 1.695, 1e-12);
}

#[test]
fn test_upper_bounds() {
    let rec = FlpsAdvisor::recommend(&flps_request(101, Focus::Diverse), Coverage::Two);
    assert!(rec.has_reason(Rejection::TargetLength));
    let rec = FlpsAdvisor::recommend(&flps_request(201, Focus::Narrow), Coverage::Ten);
    assert!(rec.has_reason(Rejection::TargetLength));
    let rec = FlpsAdvisor::recommend(&flps_request(251, Focus::Diverse), Coverage::Ten);
    assert!(rec.has_reason(Rejection::TargetLength));
}
