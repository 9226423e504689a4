//! Report printing.
//!
//! Each issue is written as one line to the diagnostic sink, in the order
//! given. Nothing is written when there are no issues.

use std::io::{self, Write};

use crate::issues::{Issue, Report};

/// Print issues to a writer, one line each.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) -> io::Result<()> {
    for issue in issues {
        writeln!(writer, "{}", issue.message())?;
    }
    writer.flush()
}
