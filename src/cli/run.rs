//! Check orchestration: config, loading, reconciliation.

use anyhow::{Result, bail};
use tracing::{debug, info};

use super::args::Arguments;
use crate::{
    config::{Config, load_config, load_config_file},
    core::{LoadOptions, load_projects},
    issues::Issue,
    rules::reconcile,
};

/// Fewest languages a check compares.
pub const MIN_LANGUAGES: usize = 2;

/// Result of checking a set of language projects.
#[derive(Debug)]
pub struct CheckResult {
    /// All discrepancies, in canonical order.
    pub issues: Vec<Issue>,
    pub languages_checked: usize,
    /// Tables summed over all languages.
    pub tables_checked: usize,
    pub files_checked: usize,
}

/// Load every requested language and reconcile them.
///
/// # Returns
/// - `Ok(CheckResult)` with all discrepancies (possibly none)
/// - `Err` if the check cannot run (config, usage, I/O or parse errors)
pub fn run(args: &Arguments) -> Result<CheckResult> {
    let config = resolve_config(args)?;

    if config.languages.len() < MIN_LANGUAGES {
        bail!(
            "At least {} languages are required, got {}.\n\
             Hint: list them after the directory, e.g. `lproj-check Resources en fr`.",
            MIN_LANGUAGES,
            config.languages.len()
        );
    }

    let options = LoadOptions::new(config.normalized_extensions(), &config.ignores)?;
    let loaded = load_projects(&args.directory, &config.languages, &options)?;

    // Duplicate keys order after every reconciliation issue.
    let mut duplicates = loaded.duplicates;
    duplicates.sort();
    let mut issues = reconcile(&loaded.projects);
    issues.extend(duplicates.into_iter().map(Issue::DuplicateKey));

    let tables_checked = loaded.projects.iter().map(|p| p.table_count()).sum();
    info!(
        languages = loaded.projects.len(),
        tables = tables_checked,
        files = loaded.files_read,
        issues = issues.len(),
        "check finished"
    );

    Ok(CheckResult {
        issues,
        languages_checked: loaded.projects.len(),
        tables_checked,
        files_checked: loaded.files_read,
    })
}

/// Config file values with command line overrides applied.
fn resolve_config(args: &Arguments) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            load_config_file(path)?
        }
        None => {
            let loaded = load_config(&args.directory)?;
            match &loaded.path {
                Some(path) => debug!(path = %path.display(), "found config file"),
                None => debug!("no config file found, using defaults"),
            }
            loaded.config
        }
    };

    if !args.languages.is_empty() {
        config.languages = args.languages.clone();
    }
    if !args.extensions.is_empty() {
        config.extensions = args.extensions.clone();
    }
    config.validate()?;

    Ok(config)
}
