use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use lcrparams::algorithm::args::ParamArgs;
use lcrparams::cli;
use lcrparams::AlgorithmKind;

#[derive(Parser)]
#[command(name = "lcrparams")]
#[command(version = "0.1.0")]
#[command(about = "Recommended SEG and fLPS parameters for a target low-complexity region length", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// SEG window and complexity cuts (L, K1, K2)
    #[command(after_help = cli::AFTER_HELP, args_override_self = true)]
    Seg(ParamArgs),

    /// fLPS window range and P-value threshold (m, M, t)
    #[command(after_help = cli::AFTER_HELP, args_override_self = true)]
    Flps(ParamArgs),
}

fn main() -> ExitCode {
    lcrparams::logging::init();

    let parsed = match Cli::try_parse() {
        Ok(parsed) => parsed,
        Err(err) => return cli::exit_for_clap_error(&mut Cli::command(), err),
    };

    let (kind, args) = match parsed.command {
        Commands::Seg(args) => (AlgorithmKind::Seg, args),
        Commands::Flps(args) => (AlgorithmKind::Flps, args),
    };
    cli::finish(cli::run(kind, &args))
}
