//! Issue types for localization consistency results.
//!
//! Each issue is self-contained and renders its own one-line message, which is
//! exactly what the CLI prints. Issues are totally ordered so every report
//! comes out in the same order: missing tables, then missing keys, then
//! duplicate keys, each sorted by project and table.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::core::{LanguageProject, SourceLocation, StringsTable};

// ============================================================
// Rule
// ============================================================

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    MissingTable,
    MissingKey,
    DuplicateKey,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MissingTable => write!(f, "missing-table"),
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::DuplicateKey => write!(f, "duplicate-key"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A language project lacks a table that at least one other project has.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MissingTableIssue {
    pub project: LanguageProject,
    pub table_name: String,
}

impl MissingTableIssue {
    pub fn new(project: LanguageProject, table_name: impl Into<String>) -> Self {
        Self {
            project,
            table_name: table_name.into(),
        }
    }
}

/// A table lacks a key that the same-named table of another project has.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MissingKeyIssue {
    /// The table missing the key.
    pub table: StringsTable,
    pub key: String,
    /// The first table found to define the key.
    pub found_in: StringsTable,
}

impl MissingKeyIssue {
    pub fn new(table: StringsTable, key: impl Into<String>, found_in: StringsTable) -> Self {
        Self {
            table,
            key: key.into(),
            found_in,
        }
    }

    /// The project whose table defines the key.
    pub fn found_in_project(&self) -> &LanguageProject {
        self.found_in.project()
    }
}

/// A key defined more than once for the same table of one language.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DuplicateKeyIssue {
    pub table: StringsTable,
    pub key: String,
    /// The definition that was kept.
    pub first: SourceLocation,
    pub second: SourceLocation,
}

// ============================================================
// Report Trait
// ============================================================

/// Trait for issues that can be reported to the diagnostic stream.
#[enum_dispatch]
pub trait Report {
    /// The one-line message printed for this issue.
    fn message(&self) -> String;

    fn report_rule(&self) -> Rule;
}

impl Report for MissingTableIssue {
    fn message(&self) -> String {
        format!(
            "Missing strings file in \"{}\": \"{}\"",
            self.project, self.table_name
        )
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingTable
    }
}

impl Report for MissingKeyIssue {
    fn message(&self) -> String {
        format!(
            "Missing key \"{}\" in {} (found in {})",
            self.key, self.table, self.found_in
        )
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingKey
    }
}

impl Report for DuplicateKeyIssue {
    fn message(&self) -> String {
        format!(
            "Duplicate key \"{}\" in {} (defined in {} and {})",
            self.key, self.table, self.first, self.second
        )
    }

    fn report_rule(&self) -> Rule {
        Rule::DuplicateKey
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A localization discrepancy.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Issue {
    MissingTable(MissingTableIssue),
    MissingKey(MissingKeyIssue),
    DuplicateKey(DuplicateKeyIssue),
}

impl Issue {
    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
