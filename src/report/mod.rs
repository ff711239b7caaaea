//! Text report for a parameter request.
//!
//! Layout (tab-separated table between a header and a footer):
//!
//! ```text
//!
//! SEGparameters has chosen the following parameters for target length 15 and focus DIVERSE:
//!
//! A DIVERSE focus means that ...
//! 	Estimated_coverage	L	K1	K2:
//! 	------------------	-	--	---
//! 	~2%			12	1.75	2.05
//! ...
//! ```

pub mod table;

use std::io::{self, Write};

use crate::algorithm::{FlpsAdvisor, ParameterAdvisor, SegAdvisor};
use crate::common::{AlgorithmKind, Outcome, Recommendation, Request};
use crate::error::ParamsResult;

pub use table::{format_exponential, ReportTable};

/// Compute and write the full report for `request`.
pub fn write_report<W: Write>(writer: &mut W, request: &Request) -> ParamsResult<()> {
    match request.algorithm() {
        AlgorithmKind::Seg => {
            let rows = SegAdvisor::advise(request);
            write_table::<SegAdvisor, W>(writer, request, &rows)?;
        }
        AlgorithmKind::Flps => {
            let rows = FlpsAdvisor::advise(request);
            write_table::<FlpsAdvisor, W>(writer, request, &rows)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Report as a string
pub fn render(request: &Request) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(&mut buf, request);
    String::from_utf8_lossy(&buf).into_owned()
}

pub fn write_table<A, W>(
    writer: &mut W,
    request: &Request,
    rows: &[Recommendation<A::Params>],
) -> io::Result<()>
where
    A: ReportTable,
    W: Write,
{
    let focus = request.focus();

    writeln!(writer)?;
    writeln!(
        writer,
        "{} has chosen the following parameters for target length {} and focus {}:",
        A::KIND.program_name(),
        request.target_length(),
        focus
    )?;
    writeln!(writer)?;
    writeln!(writer, "{}", focus.description())?;
    writeln!(writer, "\tEstimated_coverage\t{}:", A::COLUMNS)?;
    writeln!(writer, "\t------------------\t{}", A::RULES)?;

    for row in rows {
        let cell = match &row.outcome {
            Outcome::Valid(params) => A::format_params(params),
            Outcome::NotApplicable {
                upper_bound,
                reasons,
            } => A::format_not_applicable(*upper_bound, reasons),
        };
        writeln!(writer, "\t~{}%\t\t\t{}", row.coverage.percent(), cell)?;
    }

    writeln!(writer)?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Coverage is the proportion of protein sequences expected to be labelled by these parameter sets."
    )?;
    writeln!(writer)?;
    writeln!(
        writer,
        "It is recommended to use all of the parameters progressively in separate runs of the {},",
        A::DOWNSTREAM
    )?;
    writeln!(writer, " and compare the outputs.")?;
    writeln!(
        writer,
        "If the calculated parameters are listed as 'NA', it means that at least one of them was out of bounds."
    )?;
    writeln!(writer)?;
    Ok(())
}
