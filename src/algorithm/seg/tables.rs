//! SEG regression tables.
//!
//! Window length (L) and the high cut (K2) were fitted as functions of the
//! target length for each coverage level. The low cut is `K1 = K2 - gap`.
//! Most levels switch between a short-region and a long-region regime; the
//! lengths between the two regimes use the mean of both fits.

use crate::algorithm::common::{Band, Law, Piece, Piecewise};
use crate::common::{Coverage, Focus};

/// Fitted parameters for one focus and coverage level
#[derive(Debug, Clone, Copy)]
pub struct SegLevel {
    pub coverage: Coverage,
    /// Longest target length this level is reported for
    pub upper_bound: u32,
    pub window: Piecewise<Law>,
    pub hicut: Piecewise<Law>,
    /// Distance between hicut and locut
    pub locut_gap: Piecewise<Law>,
}

const WHOLE_LENGTH: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::IDENTITY)];
const NO_GAP: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::Constant(0.0))];
const GAP_0_2: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::Constant(0.2))];
const GAP_0_3: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::Constant(0.3))];

// ============================================================================
// DIVERSE focus
// ============================================================================

// ~2%
const D2_WINDOW_SHORT: Law = Law::power(1.274, 0.823);
const D2_WINDOW_LONG: Law = Law::power(1.004, 0.891);
const D2_HICUT_SHORT: Law = Law::log(0.701, 0.155);
const D2_HICUT_LONG: Law = Law::log(0.447, 1.038);

const D2_WINDOW: &[Piece<Law>] = &[
    Piece::new(Band::at_most(35), D2_WINDOW_SHORT),
    Piece::new(Band::above(45), D2_WINDOW_LONG),
    Piece::new(Band::between(35, 45), Law::Mean(&D2_WINDOW_SHORT, &D2_WINDOW_LONG)),
];
const D2_HICUT: &[Piece<Law>] = &[
    Piece::new(Band::at_most(35), D2_HICUT_SHORT),
    Piece::new(Band::above(45), D2_HICUT_LONG),
    Piece::new(Band::between(35, 45), Law::Mean(&D2_HICUT_SHORT, &D2_HICUT_LONG)),
];

// ~5%: no transition band, and the gap widens for long regions
const D5_WINDOW: &[Piece<Law>] = &[
    Piece::new(Band::at_most(50), Law::power(1.385, 0.801)),
    Piece::new(Band::above(50), Law::power(0.747, 0.912)),
];
const D5_HICUT: &[Piece<Law>] = &[
    Piece::new(Band::at_most(50), Law::log(0.716, 0.381)),
    Piece::new(Band::above(50), Law::log(0.337, 1.883)),
];
const D5_GAP: &[Piece<Law>] = &[
    Piece::new(Band::at_most(50), Law::Constant(0.3)),
    Piece::new(Band::above(50), Law::Constant(0.4)),
];

// ~10%
const D10_WINDOW_SHORT: Law = Law::power(1.376, 0.799);
const D10_WINDOW_LONG: Law = Law::power(1.298, 0.809);
const D10_HICUT_SHORT: Law = Law::log(0.69, 0.625);
const D10_HICUT_LONG: Law = Law::log(0.347, 1.93);

const D10_WINDOW: &[Piece<Law>] = &[
    Piece::new(Band::at_most(45), D10_WINDOW_SHORT),
    Piece::new(Band::above(55), D10_WINDOW_LONG),
    Piece::new(Band::between(45, 55), Law::Mean(&D10_WINDOW_SHORT, &D10_WINDOW_LONG)),
];
const D10_HICUT: &[Piece<Law>] = &[
    Piece::new(Band::at_most(45), D10_HICUT_SHORT),
    Piece::new(Band::above(55), D10_HICUT_LONG),
    Piece::new(Band::between(45, 55), Law::Mean(&D10_HICUT_SHORT, &D10_HICUT_LONG)),
];

// ~25%: one window fit over the whole range
const D25_HICUT_SHORT: Law = Law::log(0.476, 1.566);
const D25_HICUT_LONG: Law = Law::log(0.314, 2.221);

const D25_WINDOW: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::power(1.507, 0.762))];
const D25_HICUT: &[Piece<Law>] = &[
    Piece::new(Band::at_most(45), D25_HICUT_SHORT),
    Piece::new(Band::above(55), D25_HICUT_LONG),
    Piece::new(Band::between(45, 55), Law::Mean(&D25_HICUT_SHORT, &D25_HICUT_LONG)),
];

// ~40%
const D40_WINDOW_SHORT: Law = Law::power(1.491, 0.793);
const D40_WINDOW_LONG: Law = Law::power(1.138, 0.86);
const D40_HICUT_SHORT: Law = Law::log(0.581, 1.316);
const D40_HICUT_LONG: Law = Law::log(0.28, 2.442);

const D40_WINDOW: &[Piece<Law>] = &[
    Piece::new(Band::at_most(55), D40_WINDOW_SHORT),
    Piece::new(Band::above(65), D40_WINDOW_LONG),
    Piece::new(Band::between(55, 65), Law::Mean(&D40_WINDOW_SHORT, &D40_WINDOW_LONG)),
];
const D40_HICUT: &[Piece<Law>] = &[
    Piece::new(Band::at_most(55), D40_HICUT_SHORT),
    Piece::new(Band::above(65), D40_HICUT_LONG),
    Piece::new(Band::between(55, 65), Law::Mean(&D40_HICUT_SHORT, &D40_HICUT_LONG)),
];

pub static DIVERSE: [SegLevel; 5] = [
    SegLevel {
        coverage: Coverage::Two,
        upper_bound: 200,
        window: Piecewise(D2_WINDOW),
        hicut: Piecewise(D2_HICUT),
        locut_gap: Piecewise(GAP_0_3),
    },
    SegLevel {
        coverage: Coverage::Five,
        upper_bound: 300,
        window: Piecewise(D5_WINDOW),
        hicut: Piecewise(D5_HICUT),
        locut_gap: Piecewise(D5_GAP),
    },
    SegLevel {
        coverage: Coverage::Ten,
        upper_bound: 300,
        window: Piecewise(D10_WINDOW),
        hicut: Piecewise(D10_HICUT),
        locut_gap: Piecewise(GAP_0_3),
    },
    SegLevel {
        coverage: Coverage::TwentyFive,
        upper_bound: 300,
        window: Piecewise(D25_WINDOW),
        hicut: Piecewise(D25_HICUT),
        locut_gap: Piecewise(GAP_0_3),
    },
    SegLevel {
        coverage: Coverage::Forty,
        upper_bound: 300,
        window: Piecewise(D40_WINDOW),
        hicut: Piecewise(D40_HICUT),
        locut_gap: Piecewise(GAP_0_2),
    },
];

// ============================================================================
// NARROW focus: L is the target length itself and K1 = K2.
// Every level switches regime at 45/55.
// ============================================================================

const N2_SHORT: Law = Law::log(0.818, -0.245);
const N2_LONG: Law = Law::log(0.418, 1.206);
const N5_SHORT: Law = Law::log(0.824, -0.003);
const N5_LONG: Law = Law::log(0.355, 1.731);
const N10_SHORT: Law = Law::log(0.803, 0.251);
const N10_LONG: Law = Law::log(0.3, 2.135);
const N25_SHORT: Law = Law::log(0.788, 0.499);
const N25_LONG: Law = Law::log(0.278, 2.405);
const N40_SHORT: Law = Law::log(0.705, 0.887);
const N40_LONG: Law = Law::log(0.257, 2.596);

const N2_HICUT: &[Piece<Law>] = &[
    Piece::new(Band::at_most(45), N2_SHORT),
    Piece::new(Band::above(55), N2_LONG),
    Piece::new(Band::between(45, 55), Law::Mean(&N2_SHORT, &N2_LONG)),
];
const N5_HICUT: &[Piece<Law>] = &[
    Piece::new(Band::at_most(45), N5_SHORT),
    Piece::new(Band::above(55), N5_LONG),
    Piece::new(Band::between(45, 55), Law::Mean(&N5_SHORT, &N5_LONG)),
];
const N10_HICUT: &[Piece<Law>] = &[
    Piece::new(Band::at_most(45), N10_SHORT),
    Piece::new(Band::above(55), N10_LONG),
    Piece::new(Band::between(45, 55), Law::Mean(&N10_SHORT, &N10_LONG)),
];
const N25_HICUT: &[Piece<Law>] = &[
    Piece::new(Band::at_most(45), N25_SHORT),
    Piece::new(Band::above(55), N25_LONG),
    Piece::new(Band::between(45, 55), Law::Mean(&N25_SHORT, &N25_LONG)),
];
const N40_HICUT: &[Piece<Law>] = &[
    Piece::new(Band::at_most(45), N40_SHORT),
    Piece::new(Band::above(55), N40_LONG),
    Piece::new(Band::between(45, 55), Law::Mean(&N40_SHORT, &N40_LONG)),
];

pub static NARROW: [SegLevel; 5] = [
    SegLevel {
        coverage: Coverage::Two,
        upper_bound: 250,
        window: Piecewise(WHOLE_LENGTH),
        hicut: Piecewise(N2_HICUT),
        locut_gap: Piecewise(NO_GAP),
    },
    SegLevel {
        coverage: Coverage::Five,
        upper_bound: 300,
        window: Piecewise(WHOLE_LENGTH),
        hicut: Piecewise(N5_HICUT),
        locut_gap: Piecewise(NO_GAP),
    },
    SegLevel {
        coverage: Coverage::Ten,
        upper_bound: 300,
        window: Piecewise(WHOLE_LENGTH),
        hicut: Piecewise(N10_HICUT),
        locut_gap: Piecewise(NO_GAP),
    },
    SegLevel {
        coverage: Coverage::TwentyFive,
        upper_bound: 300,
        window: Piecewise(WHOLE_LENGTH),
        hicut: Piecewise(N25_HICUT),
        locut_gap: Piecewise(NO_GAP),
    },
    SegLevel {
        coverage: Coverage::Forty,
        upper_bound: 250,
        window: Piecewise(WHOLE_LENGTH),
        hicut: Piecewise(N40_HICUT),
        locut_gap: Piecewise(NO_GAP),
    },
];

/// Table row for a focus and coverage level
pub fn level(focus: Focus, coverage: Coverage) -> &'static SegLevel {
    let table = match focus {
        Focus::Diverse => &DIVERSE,
        Focus::Narrow => &NARROW,
    };
    &table[coverage as usize]
}
