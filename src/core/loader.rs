//! Repository loader.
//!
//! Resolves the requested languages to `<language>.lproj` directories under a
//! root, reads every strings table file directly inside them and parses the
//! files into [`ParsedLanguageProject`]s.
//!
//! Files that share a table name (e.g. `Main.strings` and `Main.plist` when
//! both extensions are enabled) are merged into one table. A key defined more
//! than once keeps its first value and is reported as a [`DuplicateKeyIssue`].

use std::{
    collections::{BTreeMap, HashMap, HashSet, hash_map::Entry},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{
    data::{
        LanguageProject, LocalizedTable, ParsedLanguageProject, SourceLocation, StringsMap,
        StringsTable,
    },
    parsers::{StringsEntry, parse_strings},
};
use crate::issues::DuplicateKeyIssue;

pub const LPROJ_EXTENSION: &str = "lproj";

pub const DEFAULT_EXTENSIONS: &[&str] = &["strings"];

/// Which files of a language directory are loaded.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// File extensions (without the dot), compared case-insensitively.
    pub extensions: Vec<String>,
    /// Tables whose name matches one of these patterns are skipped.
    pub ignores: Vec<Pattern>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignores: Vec::new(),
        }
    }
}

impl LoadOptions {
    pub fn new(extensions: Vec<String>, ignores: &[String]) -> Result<Self> {
        let ignores = ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            extensions,
            ignores,
        })
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
    }

    fn is_ignored(&self, table_name: &str) -> bool {
        self.ignores.iter().any(|p| p.matches(table_name))
    }
}

/// All requested language projects, in request order.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub projects: Vec<ParsedLanguageProject>,
    pub duplicates: Vec<DuplicateKeyIssue>,
    /// Number of table files read.
    pub files_read: usize,
}

/// One loaded language project.
#[derive(Debug)]
pub struct LoadedProject {
    pub project: ParsedLanguageProject,
    pub duplicates: Vec<DuplicateKeyIssue>,
    pub files_read: usize,
}

/// Directory of a language under `root`.
///
/// - ("Resources", "en") -> "Resources/en.lproj"
/// - ("Resources", "en.lproj") -> "Resources/en.lproj"
pub fn resolve_project_dir(root: &Path, language: &str) -> PathBuf {
    let suffix = format!(".{}", LPROJ_EXTENSION);
    if language.ends_with(&suffix) {
        root.join(language)
    } else {
        root.join(format!("{}{}", language, suffix))
    }
}

pub fn load_projects(
    root: &Path,
    languages: &[String],
    options: &LoadOptions,
) -> Result<LoadResult> {
    if !root.exists() {
        bail!("Directory '{}' does not exist.", root.display());
    }
    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let mut result = LoadResult::default();
    let mut seen = HashSet::new();
    for language in languages {
        let project = LanguageProject::new(resolve_project_dir(root, language));
        if !seen.insert(project.clone()) {
            debug!(project = %project, "skipping repeated language");
            continue;
        }
        let loaded = load_project(project, options)?;

        result.files_read += loaded.files_read;
        result.duplicates.extend(loaded.duplicates);
        result.projects.push(loaded.project);
    }

    Ok(result)
}

pub fn load_project(project: LanguageProject, options: &LoadOptions) -> Result<LoadedProject> {
    let dir = project.path();
    if !dir.exists() {
        bail!(
            "Language directory '{}' does not exist.\n\
             Hint: each language needs a '<language>.{}' directory.",
            dir.display(),
            LPROJ_EXTENSION
        );
    }
    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let sources = collect_table_files(dir, options)?;

    let mut parsed = ParsedLanguageProject::new(project.clone());
    let mut duplicates = Vec::new();
    let mut files_read = 0;

    for (name, files) in sources {
        let table = StringsTable::new(project.clone(), name, &files[0]);
        let (table, table_duplicates) = load_table(table, &files)?;
        debug!(
            table = %table.table,
            keys = table.len(),
            files = files.len(),
            "loaded strings table"
        );
        if table.is_empty() {
            debug!(table = %table.table, "strings table has no entries");
        }

        files_read += files.len();
        duplicates.extend(table_duplicates);
        parsed.insert_table(table);
    }

    Ok(LoadedProject {
        project: parsed,
        duplicates,
        files_read,
    })
}

/// Table files directly inside `dir`, grouped by table name.
///
/// Files within a group are in file name order.
fn collect_table_files(
    dir: &Path,
    options: &LoadOptions,
) -> Result<BTreeMap<String, Vec<PathBuf>>> {
    let mut sources: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !options.accepts(path) {
            continue;
        }

        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "skipping file with a non UTF-8 name");
            continue;
        };
        if options.is_ignored(name) {
            debug!(path = %path.display(), "skipping ignored table");
            continue;
        }

        sources
            .entry(name.to_string())
            .or_default()
            .push(path.to_path_buf());
    }

    Ok(sources)
}

/// Read and merge the files of one table.
fn load_table(
    table: StringsTable,
    files: &[PathBuf],
) -> Result<(LocalizedTable, Vec<DuplicateKeyIssue>)> {
    let mut strings = StringsMap::new();
    let mut defined_at: HashMap<String, SourceLocation> = HashMap::new();
    let mut duplicates = Vec::new();

    for file in files {
        let bytes = fs::read(file)
            .with_context(|| format!("Failed to read strings file: {}", file.display()))?;
        let entries = parse_strings(&bytes, file)?;
        debug!(file = %file.display(), entries = entries.len(), "parsed strings file");

        for StringsEntry { key, value, line } in entries {
            let location = SourceLocation::new(file, line);
            match defined_at.entry(key) {
                Entry::Occupied(first) => duplicates.push(DuplicateKeyIssue {
                    table: table.clone(),
                    key: first.key().clone(),
                    first: first.get().clone(),
                    second: location,
                }),
                Entry::Vacant(slot) => {
                    strings.insert(slot.key().clone(), value);
                    slot.insert(location);
                }
            }
        }
    }

    Ok((LocalizedTable::new(table, strings), duplicates))
}
