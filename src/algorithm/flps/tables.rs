//! fLPS regression tables.
//!
//! Per coverage level: the maximum window `M` (power law, rounded), the
//! minimum window `m` (offset below `M` or its own power law) and the
//! binomial P-value threshold as `log10(t)` (linear in the target length).

use crate::algorithm::common::{Band, Law, Piece, Piecewise};
use crate::common::{Coverage, Focus};

/// How the minimum window `m` follows from `M`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinRunRule {
    /// `m = M - offset`
    BelowMax(i64),
    /// `m` has its own fit
    Fitted(Law),
}

impl MinRunRule {
    pub fn apply(&self, max_window: i64, target_length: u32) -> i64 {
        match self {
            MinRunRule::BelowMax(offset) => max_window - offset,
            MinRunRule::Fitted(law) => law.eval_rounded(target_length),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FlpsLevel {
    pub coverage: Coverage,
    /// Longest target length this level is reported for
    pub upper_bound: u32,
    pub max_window: Piecewise<Law>,
    pub min_run: Piecewise<MinRunRule>,
    pub log10_threshold: Piecewise<Law>,
}

const SAME_AS_MAX: &[Piece<MinRunRule>] = &[Piece::new(Band::ANY, MinRunRule::BelowMax(0))];
const FLAT_THRESHOLD: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::Constant(-4.0))];

// ============================================================================
// DIVERSE focus
// ============================================================================

const D2_MAX: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::power(2.534, 0.506))];
const D2_MIN: &[Piece<MinRunRule>] = &[Piece::new(Band::ANY, MinRunRule::BelowMax(2))];
const D2_LOG10_T: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::linear(-0.153, -3.994))];

const D5_MAX: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::power(3.46, 0.508))];
const D5_MIN: &[Piece<MinRunRule>] = &[Piece::new(Band::ANY, MinRunRule::BelowMax(4))];
const D5_LOG10_T: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::linear(-0.098, -3.305))];

const D10_MAX: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::power(3.912, 0.543))];
const D10_MIN: &[Piece<MinRunRule>] = &[Piece::new(Band::ANY, MinRunRule::BelowMax(10))];
const D10_LOG10_T: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::linear(-0.055, -3.635))];

// ~25% and ~40% switch regime above 105 residues
const D25_MAX: &[Piece<Law>] = &[
    Piece::new(Band::at_most(105), Law::power(5.647, 0.56)),
    Piece::new(Band::above(105), Law::power(6.096, 0.552)),
];
const D25_MIN: &[Piece<MinRunRule>] = &[
    Piece::new(Band::at_most(105), MinRunRule::Fitted(Law::power(0.872, 0.797))),
    Piece::new(Band::above(105), MinRunRule::BelowMax(50)),
];
const D25_LOG10_T: &[Piece<Law>] = &[
    Piece::new(Band::at_most(105), Law::linear(-0.039, -2.381)),
    Piece::new(Band::above(105), Law::linear(-0.031, -2.93)),
];

const D40_MAX: &[Piece<Law>] = &[
    Piece::new(Band::at_most(105), Law::power(9.82, 0.522)),
    Piece::new(Band::above(105), Law::power(11.126, 0.484)),
];
const D40_MIN: &[Piece<MinRunRule>] = &[
    Piece::new(Band::at_most(105), MinRunRule::Fitted(Law::power(0.481, 0.876))),
    Piece::new(Band::above(105), MinRunRule::BelowMax(80)),
];
const D40_LOG10_T: &[Piece<Law>] = &[
    Piece::new(Band::at_most(105), Law::linear(-0.022, -2.709)),
    Piece::new(Band::above(105), Law::linear(-0.025, -2.762)),
];

pub static DIVERSE: [FlpsLevel; 5] = [
    FlpsLevel {
        coverage: Coverage::Two,
        upper_bound: 100,
        max_window: Piecewise(D2_MAX),
        min_run: Piecewise(D2_MIN),
        log10_threshold: Piecewise(D2_LOG10_T),
    },
    FlpsLevel {
        coverage: Coverage::Five,
        upper_bound: 200,
        max_window: Piecewise(D5_MAX),
        min_run: Piecewise(D5_MIN),
        log10_threshold: Piecewise(D5_LOG10_T),
    },
    FlpsLevel {
        coverage: Coverage::Ten,
        upper_bound: 250,
        max_window: Piecewise(D10_MAX),
        min_run: Piecewise(D10_MIN),
        log10_threshold: Piecewise(D10_LOG10_T),
    },
    FlpsLevel {
        coverage: Coverage::TwentyFive,
        upper_bound: 300,
        max_window: Piecewise(D25_MAX),
        min_run: Piecewise(D25_MIN),
        log10_threshold: Piecewise(D25_LOG10_T),
    },
    FlpsLevel {
        coverage: Coverage::Forty,
        upper_bound: 300,
        max_window: Piecewise(D40_MAX),
        min_run: Piecewise(D40_MIN),
        log10_threshold: Piecewise(D40_LOG10_T),
    },
];

// ============================================================================
// NARROW focus: m = M everywhere
// ============================================================================

const N2_MAX: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::power(2.324, 0.539))];
const N2_LOG10_T: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::linear(-0.149, -3.883))];

const N5_SHORT: Law = Law::linear(-0.127, -2.183);
const N5_LONG: Law = Law::linear(-0.09, -3.173);
const N5_MAX: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::power(2.976, 0.556))];
// short fit up to 28, long fit from 33
const N5_LOG10_T: &[Piece<Law>] = &[
    Piece::new(Band::at_most(28), N5_SHORT),
    Piece::new(Band::above(32), N5_LONG),
    Piece::new(Band::between(28, 32), Law::Mean(&N5_SHORT, &N5_LONG)),
];

const N10_MAX: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::power(3.493, 0.572))];
const N10_LOG10_T: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::linear(-0.058, -2.731))];

const N25_MAX: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::power(3.394, 0.672))];
const N25_LOG10_T: &[Piece<Law>] = &[
    Piece::new(Band::at_most(90), Law::Constant(-4.0)),
    Piece::new(Band::above(90), Law::linear(-0.028, -1.695)),
];

const N40_MAX: &[Piece<Law>] = &[Piece::new(Band::ANY, Law::power(0.889, 0.977))];

pub static NARROW: [FlpsLevel; 5] = [
    FlpsLevel {
        coverage: Coverage::Two,
        upper_bound: 100,
        max_window: Piecewise(N2_MAX),
        min_run: Piecewise(SAME_AS_MAX),
        log10_threshold: Piecewise(N2_LOG10_T),
    },
    FlpsLevel {
        coverage: Coverage::Five,
        upper_bound: 200,
        max_window: Piecewise(N5_MAX),
        min_run: Piecewise(SAME_AS_MAX),
        log10_threshold: Piecewise(N5_LOG10_T),
    },
    FlpsLevel {
        coverage: Coverage::Ten,
        upper_bound: 200,
        max_window: Piecewise(N10_MAX),
        min_run: Piecewise(SAME_AS_MAX),
        log10_threshold: Piecewise(N10_LOG10_T),
    },
    FlpsLevel {
        coverage: Coverage::TwentyFive,
        upper_bound: 300,
        max_window: Piecewise(N25_MAX),
        min_run: Piecewise(SAME_AS_MAX),
        log10_threshold: Piecewise(N25_LOG10_T),
    },
    FlpsLevel {
        coverage: Coverage::Forty,
        upper_bound: 300,
        max_window: Piecewise(N40_MAX),
        min_run: Piecewise(SAME_AS_MAX),
        log10_threshold: Piecewise(FLAT_THRESHOLD),
    },
];

/// Table row for a focus and coverage level
pub fn level(focus: Focus, coverage: Coverage) -> &'static FlpsLevel {
    let table = match focus {
        Focus::Diverse => &DIVERSE,
        Focus::Narrow => &NARROW,
    };
    &table[coverage as usize]
}
