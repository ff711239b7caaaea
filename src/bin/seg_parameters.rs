//! `SEGparameters`: recommended SEG parameters for a target region length

use std::process::ExitCode;

use lcrparams::{cli, AlgorithmKind};

fn main() -> ExitCode {
    cli::main_with_args(AlgorithmKind::Seg, std::env::args_os())
}
