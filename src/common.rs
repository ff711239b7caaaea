use std::fmt;

use crate::algorithm::common::constants::{
    DEFAULT_TARGET_LENGTH, MAX_TARGET_LENGTH, MIN_TARGET_LENGTH,
};
use crate::error::{ParamsError, ParamsResult};

/// How tightly the recommended parameters are centred on the target length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typical length variance of the annotated regions is allowed
    #[default]
    Diverse,
    /// Length variance is minimised
    Narrow,
}

impl Focus {
    /// Only the exact value `narrow` selects the narrow focus; every other
    /// value falls back to diverse.
    pub fn from_flag(value: &str) -> Self {
        if value == "narrow" {
            Focus::Narrow
        } else {
            Focus::Diverse
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Focus::Diverse => "DIVERSE",
            Focus::Narrow => "NARROW",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Focus::Diverse => "A DIVERSE focus means that a typical or average level of length variance for the annotated regions is allowed.",
            Focus::Narrow => "A NARROW focus means that length variance is minimized for the annotated regions.",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Downstream program the parameters are meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    /// SEG sliding-window complexity filter (L, K1, K2)
    Seg,
    /// fLPS compositional-bias detector (m, M, t)
    Flps,
}

impl AlgorithmKind {
    pub fn program_name(self) -> &'static str {
        match self {
            AlgorithmKind::Seg => "SEGparameters",
            AlgorithmKind::Flps => "fLPSparameters",
        }
    }
}

/// Approximate share of a reference proteome expected to be annotated with a
/// given parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Coverage {
    Two,
    Five,
    Ten,
    TwentyFive,
    Forty,
}

impl Coverage {
    /// Report order
    pub const ALL: [Coverage; 5] = [
        Coverage::Two,
        Coverage::Five,
        Coverage::Ten,
        Coverage::TwentyFive,
        Coverage::Forty,
    ];

    pub fn percent(self) -> u32 {
        match self {
            Coverage::Two => 2,
            Coverage::Five => 5,
            Coverage::Ten => 10,
            Coverage::TwentyFive => 25,
            Coverage::Forty => 40,
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// One advisor invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    target_length: u32,
    focus: Focus,
    algorithm: AlgorithmKind,
}

impl Request {
    /// Rejects target lengths outside the fitted range.
    pub fn new(target_length: i64, focus: Focus, algorithm: AlgorithmKind) -> ParamsResult<Self> {
        let min = MIN_TARGET_LENGTH as i64;
        let max = MAX_TARGET_LENGTH as i64;
        if !(min..=max).contains(&target_length) {
            return Err(ParamsError::TargetLengthOutOfRange {
                value: target_length,
                min: MIN_TARGET_LENGTH,
                max: MAX_TARGET_LENGTH,
            });
        }
        Ok(Self {
            target_length: target_length as u32,
            focus,
            algorithm,
        })
    }

    /// Like [`Request::new`], but an out-of-range length is replaced by
    /// [`DEFAULT_TARGET_LENGTH`]. The flag is true when the reset happened.
    pub fn or_default_length(
        target_length: i64,
        focus: Focus,
        algorithm: AlgorithmKind,
    ) -> (Self, bool) {
        match Self::new(target_length, focus, algorithm) {
            Ok(request) => (request, false),
            Err(_) => (
                Self {
                    target_length: DEFAULT_TARGET_LENGTH,
                    focus,
                    algorithm,
                },
                true,
            ),
        }
    }

    pub fn target_length(&self) -> u32 {
        self.target_length
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }
}

/// Why a computed parameter set was withheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Target length below the fitted range or above the level's upper bound
    TargetLength,
    /// SEG K2 (hicut) above its ceiling
    HicutTooHigh,
    /// SEG 40% DIVERSE with a target length below 10
    ShortDiverseTarget,
    /// fLPS threshold above 0.001
    ThresholdTooHigh,
    /// fLPS minimum window (m) below 5
    MinRunTooShort,
    /// fLPS focus/coverage/length combination outside the fitted data
    ExcludedCombination,
    /// A formula produced a non-finite value
    NonFinite,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<P> {
    Valid(P),
    NotApplicable {
        upper_bound: u32,
        reasons: Vec<Rejection>,
    },
}

/// Parameter set (or the reason it is missing) for one coverage level.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<P> {
    pub coverage: Coverage,
    pub outcome: Outcome<P>,
}

impl<P> Recommendation<P> {
    /// Valid when `reasons` is empty.
    pub fn from_gate(coverage: Coverage, upper_bound: u32, params: P, reasons: Vec<Rejection>) -> Self {
        let outcome = if reasons.is_empty() {
            Outcome::Valid(params)
        } else {
            Outcome::NotApplicable {
                upper_bound,
                reasons,
            }
        };
        Self { coverage, outcome }
    }

    pub fn params(&self) -> Option<&P> {
        match &self.outcome {
            Outcome::Valid(params) => Some(params),
            Outcome::NotApplicable { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, Outcome::Valid(_))
    }

    pub fn has_reason(&self, reason: Rejection) -> bool {
        match &self.outcome {
            Outcome::Valid(_) => false,
            Outcome::NotApplicable { reasons, .. } => reasons.contains(&reason),
        }
    }
}
