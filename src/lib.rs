pub mod algorithm;
pub mod cli;
pub mod common;
pub mod error;
pub mod logging;
pub mod report;

pub use algorithm::{advise, Advice, ParameterAdvisor};
pub use common::{AlgorithmKind, Coverage, Focus, Outcome, Recommendation, Rejection, Request};
pub use error::{ParamsError, ParamsResult};
