//! Parameter advisors for the downstream low-complexity tools.
//!
//! - `seg` - SEG window and complexity cuts (L, K1, K2)
//! - `flps` - fLPS window range and P-value threshold (m, M, t)
//! - `common` - regression laws and shared bounds
//! - `args` - command-line options shared by every front-end

pub mod args;
pub mod common;
pub mod flps;
pub mod seg;

pub use flps::{FlpsAdvisor, FlpsParams};
pub use seg::{SegAdvisor, SegParams};

use crate::common::{AlgorithmKind, Coverage, Recommendation, Request};

/// One downstream algorithm's formula tables and validity gate.
pub trait ParameterAdvisor {
    type Params;

    const KIND: AlgorithmKind;

    /// Evaluate a single coverage level. Levels share nothing but the request.
    fn recommend(request: &Request, coverage: Coverage) -> Recommendation<Self::Params>;

    /// All coverage levels in report order.
    fn advise(request: &Request) -> Vec<Recommendation<Self::Params>> {
        Coverage::ALL
            .iter()
            .map(|&coverage| Self::recommend(request, coverage))
            .collect()
    }
}

/// Recommendations for whichever algorithm the request names
#[derive(Debug, Clone, PartialEq)]
pub enum Advice {
    Seg(Vec<Recommendation<SegParams>>),
    Flps(Vec<Recommendation<FlpsParams>>),
}

impl Advice {
    pub fn len(&self) -> usize {
        match self {
            Advice::Seg(rows) => rows.len(),
            Advice::Flps(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn coverages(&self) -> Vec<Coverage> {
        match self {
            Advice::Seg(rows) => rows.iter().map(|r| r.coverage).collect(),
            Advice::Flps(rows) => rows.iter().map(|r| r.coverage).collect(),
        }
    }
}

pub fn advise(request: &Request) -> Advice {
    match request.algorithm() {
        AlgorithmKind::Seg => Advice::Seg(SegAdvisor::advise(request)),
        AlgorithmKind::Flps => Advice::Flps(FlpsAdvisor::advise(request)),
    }
}
