//! Bounds shared by the SEG and fLPS advisors

/// Shortest target length the regressions were fitted for
pub const MIN_TARGET_LENGTH: u32 = 5;

/// Longest target length the regressions were fitted for
pub const MAX_TARGET_LENGTH: u32 = 300;

/// Length used when `-l` is absent or out of range
pub const DEFAULT_TARGET_LENGTH: u32 = 15;

/// SEG parameter sets with a K2 (hicut) above this are not reported
pub const SEG_MAX_HICUT: f64 = 4.2;

/// SEG 40% DIVERSE sets need at least this target length
pub const SEG_DIVERSE_40_MIN_LENGTH: u32 = 10;

/// fLPS parameter sets need log10(t) at or below this (t <= 0.001)
pub const FLPS_MAX_LOG10_THRESHOLD: f64 = -3.0;

/// Smallest fLPS minimum window (m) that is reported
pub const FLPS_MIN_RUN: i64 = 5;
