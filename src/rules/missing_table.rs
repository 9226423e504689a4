//! Missing table detection rule.
//!
//! Detects language projects lacking a table that at least one other project
//! defines, including tables defined by a single project only.

use std::collections::BTreeSet;

use crate::{core::ParsedLanguageProject, issues::MissingTableIssue};

/// Union of the table names of all projects.
pub fn all_table_names(projects: &[ParsedLanguageProject]) -> BTreeSet<&str> {
    projects.iter().flat_map(|p| p.table_names()).collect()
}

/// Table names defined by every project. Empty when there are no projects.
pub fn common_table_names(projects: &[ParsedLanguageProject]) -> BTreeSet<&str> {
    let mut projects = projects.iter();
    let Some(first) = projects.next() else {
        return BTreeSet::new();
    };

    let mut common: BTreeSet<&str> = first.table_names().collect();
    for project in projects {
        common.retain(|name| project.contains_table(name));
    }
    common
}

/// Find every (project, table name) pair where the project lacks a table
/// that some other project has.
pub fn check_missing_tables(projects: &[ParsedLanguageProject]) -> Vec<MissingTableIssue> {
    let all = all_table_names(projects);

    projects
        .iter()
        .flat_map(|project| {
            all.iter()
                .filter(move |name| !project.contains_table(name))
                .map(move |name| MissingTableIssue::new(project.project().clone(), *name))
        })
        .collect()
}
