//! Test utilities shared by the unit tests

use lcrparams::{AlgorithmKind, Focus, Request};

pub fn seg_request(len: i64, focus: Focus) -> Request {
    Request::new(len, focus, AlgorithmKind::Seg).expect("length in range")
}

pub fn flps_request(len: i64, focus: Focus) -> Request {
    Request::new(len, focus, AlgorithmKind::Flps).expect("length in range")
}

/// Assert that two floats are within `epsilon`
pub fn assert_approx_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Values not approximately equal: {} vs {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// Mean of two regressions evaluated at the same length
pub fn mean(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}
