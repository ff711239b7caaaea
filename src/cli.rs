//! Front-end glue shared by `SEGparameters`, `fLPSparameters` and the
//! `lcrparams` subcommands: argument parsing, the out-of-range warning, the
//! report on stdout and exit codes.
//!
//! Exit codes: 0 for a report or `-h`, 1 for a usage error (the help text is
//! printed to stderr) or a failed write.

use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Args, Command, FromArgMatches};
use tracing::debug;

use crate::algorithm::args::ParamArgs;
use crate::algorithm::common::constants::DEFAULT_TARGET_LENGTH;
use crate::common::AlgorithmKind;
use crate::logging;
use crate::report;

pub const AFTER_HELP: &str = "\
Suitable parameters are listed for estimated protein coverage of approximately 2%, 5%, 10%, 25% and 40%.
The protein coverage is the proportion of proteins expected to be annotated or 'covered' with a given
set of parameters. For some combinations of coverage level and target length no parameters can be
given because they are out of bounds; these are listed as 'NA'.

Citation:
  Harrison, PM. 'Optimal strategies for discovery of low-complexity or compositionally-biased regions'.
URLs:
  http://biology.mcgill.ca/faculty/harrison/flps.html
  https://github.com/pmharrison/flps";

pub fn about(kind: AlgorithmKind) -> &'static str {
    match kind {
        AlgorithmKind::Seg => "Parameter choosing program for finding low-complexity or compositionally-biased regions using SEG in proteins of a given target length",
        AlgorithmKind::Flps => "Parameter choosing program for finding low-complexity or compositionally-biased regions using fLPS in proteins of a given target length",
    }
}

/// Standalone command for one advisor
pub fn command(kind: AlgorithmKind) -> Command {
    let program = kind.program_name();
    let example = format!(
        "{AFTER_HELP}\n\nExample:\n  {program} -f diverse -l 15 > parameters.out\n  \
         (diverse focus with a target region length of 15 residues)\n\n\
         This help text and the report are written to standard output; warnings and\n\
         usage errors go to standard error."
    );
    ParamArgs::augment_args(
        Command::new(program)
            .about(about(kind))
            .after_help(example)
            .disable_version_flag(true)
            .args_override_self(true),
    )
}

/// Parse `argv` (including the program name) and run the advisor.
pub fn main_with_args<I, T>(kind: AlgorithmKind, argv: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    logging::init();

    let mut cmd = command(kind);
    let matches = match cmd.try_get_matches_from_mut(argv) {
        Ok(matches) => matches,
        Err(err) => return exit_for_clap_error(&mut cmd, err),
    };
    let args = match ParamArgs::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(err) => return exit_for_clap_error(&mut cmd, err),
    };

    finish(run(kind, &args))
}

/// Help and version requests exit 0; anything else prints the error and
/// the help text to stderr and exits 1.
pub fn exit_for_clap_error(cmd: &mut Command, err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            let _ = err.print();
            let _ = cmd.write_long_help(&mut io::stderr());
            ExitCode::from(1)
        }
    }
}

/// Resolve the request and write the report to stdout.
pub fn run(kind: AlgorithmKind, args: &ParamArgs) -> Result<()> {
    let (request, reset) = args.to_request(kind);
    if reset {
        eprintln!(
            " -l value is out of bounds, re-setting to a DEFAULT VALUE = {}",
            DEFAULT_TARGET_LENGTH
        );
        debug!(requested = args.length, "target length reset to default");
    }
    debug!(
        program = kind.program_name(),
        target_length = request.target_length(),
        focus = %request.focus(),
        "advising"
    );

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    report::write_report(&mut writer, &request).context("failed to write report")?;
    Ok(())
}

pub fn finish(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}
