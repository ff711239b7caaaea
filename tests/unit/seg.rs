//! Unit tests for algorithm/seg

use lcrparams::algorithm::seg::{gate, tables, SegAdvisor, SegParams};
use lcrparams::{Coverage, Focus, Outcome, ParameterAdvisor, Rejection};

use super::helpers::{assert_approx_eq, mean, seg_request};

fn params_at(len: i64, focus: Focus, coverage: Coverage) -> SegParams {
    let rec = SegAdvisor::recommend(&seg_request(len, focus), coverage);
    *rec.params().expect("valid SEG parameters")
}

#[test]
fn test_diverse_two_percent_at_15() {
    let p = params_at(15, Focus::Diverse, Coverage::Two);
    let x = 15f64;

    let window = (1.274 * x.powf(0.823)).round() as i64;
    let hicut = 0.701 * x.ln() + 0.155;

    assert_eq!(p.window, window);
    assert_eq!(p.window, 12);
    assert_approx_eq(p.hicut, hicut, 1e-12);
    assert_approx_eq(p.locut, hicut - 0.3, 1e-12);
}

#[test]
fn test_diverse_two_percent_regime_boundaries() {
    let short_window = |x: f64| 1.274 * x.powf(0.823);
    let long_window = |x: f64| 1.004 * x.powf(0.891);
    let short_hicut = |x: f64| 0.701 * x.ln() + 0.155;
    let long_hicut = |x: f64| 0.447 * x.ln() + 1.038;

    // <= 35: short regime
    let p = params_at(35, Focus::Diverse, Coverage::Two);
    assert_eq!(p.window, short_window(35.0).round() as i64);
    assert_approx_eq(p.hicut, short_hicut(35.0), 1e-12);

    // 35 < len <= 45: mean of both regimes, window rounded after averaging
    for len in [36, 40, 45] {
        let x = len as f64;
        let p = params_at(len, Focus::Diverse, Coverage::Two);
        assert_eq!(p.window, mean(short_window(x), long_window(x)).round() as i64);
        assert_approx_eq(p.hicut, mean(short_hicut(x), long_hicut(x)), 1e-12);
    }

    // > 45: long regime
    let p = params_at(46, Focus::Diverse, Coverage::Two);
    assert_eq!(p.window, long_window(46.0).round() as i64);
    assert_approx_eq(p.hicut, long_hicut(46.0), 1e-12);
}

#[test]
fn test_diverse_five_percent_gap_widens_above_50() {
    let p = params_at(50, Focus::Diverse, Coverage::Five);
    assert_approx_eq(p.hicut - p.locut, 0.3, 1e-12);
    assert_approx_eq(p.hicut, 0.716 * 50f64.ln() + 0.381, 1e-12);

    let p = params_at(51, Focus::Diverse, Coverage::Five);
    assert_approx_eq(p.hicut - p.locut, 0.4, 1e-12);
    assert_eq!(p.window, (0.747 * 51f64.powf(0.912)).round() as i64);
    assert_approx_eq(p.hicut, 0.337 * 51f64.ln() + 1.883, 1e-12);
}

#[test]
fn test_diverse_twenty_five_single_window_fit() {
    for len in [20, 50, 200] {
        let p = params_at(len, Focus::Diverse, Coverage::TwentyFive);
        assert_eq!(p.window, (1.507 * (len as f64).powf(0.762)).round() as i64);
        assert_approx_eq(p.hicut - p.locut, 0.3, 1e-12);
    }
}

#[test]
fn test_diverse_forty_gap_and_transition() {
    let x = 60f64;
    let p = params_at(60, Focus::Diverse, Coverage::Forty);
    assert_eq!(
        p.window,
        mean(1.491 * x.powf(0.793), 1.138 * x.powf(0.86)).round() as i64
    );
    assert_approx_eq(
        p.hicut,
        mean(0.581 * x.ln() + 1.316, 0.28 * x.ln() + 2.442),
        1e-12,
    );
    assert_approx_eq(p.hicut - p.locut, 0.2, 1e-12);
}

#[test]
fn test_narrow_uses_target_length_and_equal_cuts() {
    for (len, coverage) in [
        (12, Coverage::Two),
        (45, Coverage::Five),
        (50, Coverage::Ten),
        (120, Coverage::TwentyFive),
        (250, Coverage::Forty),
    ] {
        let p = params_at(len, Focus::Narrow, coverage);
        assert_eq!(p.window, len);
        assert_eq!(p.locut, p.hicut);
    }

    let x = 50f64;
    let p = params_at(50, Focus::Narrow, Coverage::Ten);
    assert_approx_eq(p.hicut, mean(0.803 * x.ln() + 0.251, 0.3 * x.ln() + 2.135), 1e-12);
}

#[test]
fn test_upper_bounds_per_focus() {
    let rec = SegAdvisor::recommend(&seg_request(201, Focus::Diverse), Coverage::Two);
    assert_eq!(
        rec.outcome,
        Outcome::NotApplicable {
            upper_bound: 200,
            reasons: vec![Rejection::TargetLength]
        }
    );

    let rec = SegAdvisor::recommend(&seg_request(251, Focus::Narrow), Coverage::Forty);
    assert!(rec.has_reason(Rejection::TargetLength));
    assert!(SegAdvisor::recommend(&seg_request(250, Focus::Narrow), Coverage::Forty).is_valid());
    assert!(SegAdvisor::recommend(&seg_request(300, Focus::Narrow), Coverage::Five).is_valid());
}

#[test]
fn test_diverse_forty_short_target() {
    for len in 5..10 {
        let rec = SegAdvisor::recommend(&seg_request(len, Focus::Diverse), Coverage::Forty);
        assert!(rec.has_reason(Rejection::ShortDiverseTarget), "len {len}");
    }
    assert!(SegAdvisor::recommend(&seg_request(10, Focus::Diverse), Coverage::Forty).is_valid());

    // Narrow focus has no short-target case at 40%
    let rec = SegAdvisor::recommend(&seg_request(9, Focus::Narrow), Coverage::Forty);
    assert!(!rec.has_reason(Rejection::ShortDiverseTarget));
}

#[test]
fn test_hicut_ceiling_is_generic_rejection_even_at_forty_diverse() {
    let request = seg_request(50, Focus::Diverse);
    let level = tables::level(Focus::Diverse, Coverage::Forty);
    let params = SegParams {
        window: 40,
        locut: 4.3,
        hicut: 4.5,
    };
    assert_eq!(gate(&request, level, &params), vec![Rejection::HicutTooHigh]);

    let params = SegParams {
        window: 40,
        locut: 4.0,
        hicut: 4.2,
    };
    assert!(gate(&request, level, &params).is_empty());
}

#[test]
fn test_each_level_is_independent() {
    // A rejected level must not leak into the next one
    let rows = SegAdvisor::advise(&seg_request(220, Focus::Diverse));
    assert!(!rows[0].is_valid());
    assert!(rows[1..].iter().all(|r| r.is_valid()));
}
