//! Missing key detection rule.
//!
//! Compares every ordered pair of distinct projects, so a key missing on
//! either side is found regardless of input order. Only tables defined by
//! every project are compared; a table absent somewhere is already reported
//! by the missing table rule.
//!
//! A key missing from one table is reported once, even when several other
//! projects define it. `found_in` is the first source in pair order: sources
//! in input order, then tables and keys in lexicographic order.

use std::collections::{BTreeSet, HashSet};

use super::missing_table::common_table_names;
use crate::{
    core::{ParsedLanguageProject, StringsTable},
    issues::MissingKeyIssue,
};

pub fn check_missing_keys(projects: &[ParsedLanguageProject]) -> Vec<MissingKeyIssue> {
    let common = common_table_names(projects);
    find_missing_keys(projects, &common)
}

/// Find keys missing from the given tables across all project pairs.
///
/// Table names not defined by both projects of a pair are skipped.
pub fn find_missing_keys(
    projects: &[ParsedLanguageProject],
    table_names: &BTreeSet<&str>,
) -> Vec<MissingKeyIssue> {
    let mut reported: HashSet<(&StringsTable, &str)> = HashSet::new();
    let mut issues = Vec::new();

    for (i, source) in projects.iter().enumerate() {
        for (j, target) in projects.iter().enumerate() {
            if i == j {
                continue;
            }

            for name in table_names {
                let (Some(source_table), Some(target_table)) =
                    (source.table(name), target.table(name))
                else {
                    continue;
                };

                for key in source_table.keys() {
                    if target_table.contains_key(key)
                        || !reported.insert((&target_table.table, key.as_str()))
                    {
                        continue;
                    }

                    issues.push(MissingKeyIssue::new(
                        target_table.table.clone(),
                        key.clone(),
                        source_table.table.clone(),
                    ));
                }
            }
        }
    }

    issues
}
