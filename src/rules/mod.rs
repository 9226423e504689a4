//! Reconciliation rules.
//!
//! Pure functions over parsed language projects: no I/O, no failure modes.
//! [`reconcile`] runs every rule and is what the CLI uses.
//!
//! ## Module Structure
//!
//! - `missing_table`: Tables some projects define and others lack
//! - `missing_key`: Keys some copies of a table define and others lack

pub mod missing_key;
pub mod missing_table;

pub use missing_key::check_missing_keys;
pub use missing_table::{all_table_names, check_missing_tables, common_table_names};

use crate::{core::ParsedLanguageProject, issues::Issue};

/// Compare all projects against each other.
///
/// Returns every missing table and missing key, deduplicated and in canonical
/// order. Zero or one project has nothing to compare against and yields no
/// issues. A project given more than once is compared like any other, but
/// its issues are reported once.
pub fn reconcile(projects: &[ParsedLanguageProject]) -> Vec<Issue> {
    let mut issues: Vec<Issue> = check_missing_tables(projects)
        .into_iter()
        .map(Issue::MissingTable)
        .collect();
    issues.extend(check_missing_keys(projects).into_iter().map(Issue::MissingKey));
    issues.sort();
    issues.dedup();
    issues
}
