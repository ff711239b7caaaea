//! Command-line arguments shared by the SEG and fLPS front-ends

use clap::Args;

use super::common::constants::DEFAULT_TARGET_LENGTH;
use crate::common::{AlgorithmKind, Focus, Request};

#[derive(Args, Debug, Clone)]
pub struct ParamArgs {
    /// Focus of the parameters: 'diverse' or 'narrow'.
    ///
    /// diverse = more diversity or variance of length is allowed (default);
    /// narrow = narrowest focus on a particular target length.
    /// Any value other than 'narrow' selects diverse.
    #[arg(short = 'f', long, value_name = "FOCUS", default_value = "diverse")]
    pub focus: String,

    /// Target length, in the range 5-300 inclusive.
    ///
    /// Out-of-range values are reset to 15 with a warning.
    #[arg(
        short = 'l',
        long,
        value_name = "LENGTH",
        default_value_t = DEFAULT_TARGET_LENGTH as i64,
        allow_negative_numbers = true
    )]
    pub length: i64,
}

impl ParamArgs {
    pub fn focus(&self) -> Focus {
        Focus::from_flag(&self.focus)
    }

    /// Build the request; the flag is true when the length was reset to the
    /// default.
    pub fn to_request(&self, algorithm: AlgorithmKind) -> (Request, bool) {
        Request::or_default_length(self.length, self.focus(), algorithm)
    }
}
