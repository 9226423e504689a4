//! Command-line interface layer.
//!
//! The CLI never writes discrepancies to a global stream: the caller passes
//! the diagnostic sink, so the whole run can be exercised with an in-memory
//! buffer.

use std::io::Write;

use anyhow::Result;

mod args;
mod exit_status;
mod logging;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use logging::init_logging;
pub use report::report_to;
pub use run::{CheckResult, MIN_LANGUAGES, run};

/// Run a check and write every discrepancy to `diagnostics`.
pub fn run_cli<W: Write>(args: &Arguments, diagnostics: &mut W) -> Result<ExitStatus> {
    let result = run(args)?;
    report_to(&result.issues, diagnostics)?;
    Ok(ExitStatus::for_issues(&result.issues))
}
