use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
    path::{Path, PathBuf},
};

use super::LanguageProject;

/// Key-value pairs of one strings table, ordered by key.
pub type StringsMap = BTreeMap<String, String>;

/// Extension assumed for tables that have no backing file.
pub const STRINGS_EXTENSION: &str = "strings";

/// One named table of translations within a language project.
///
/// Two tables are the same table when they belong to the same project and
/// share a name. The resolved `path` is only used when rendering reports, so
/// merging several source files into one table keeps its identity stable.
#[derive(Debug, Clone)]
pub struct StringsTable {
    project: LanguageProject,
    name: String,
    path: PathBuf,
}

impl StringsTable {
    pub fn new(
        project: LanguageProject,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project,
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a table without a known source file.
    ///
    /// The path becomes `<project>/<name>.strings`.
    pub fn in_project(project: LanguageProject, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = project.path().join(format!("{}.{}", name, STRINGS_EXTENSION));
        Self {
            project,
            name,
            path,
        }
    }

    pub fn project(&self) -> &LanguageProject {
        &self.project
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PartialEq for StringsTable {
    fn eq(&self, other: &Self) -> bool {
        self.project == other.project && self.name == other.name
    }
}

impl Eq for StringsTable {}

impl Hash for StringsTable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.project.hash(state);
        self.name.hash(state);
    }
}

impl PartialOrd for StringsTable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StringsTable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.project
            .cmp(&other.project)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for StringsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// A strings table together with its key-value entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedTable {
    pub table: StringsTable,
    pub strings: StringsMap,
}

impl LocalizedTable {
    pub fn new(table: StringsTable, strings: StringsMap) -> Self {
        Self { table, strings }
    }

    pub fn name(&self) -> &str {
        self.table.name()
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.strings.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    /// Keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.strings.keys()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Where a strings entry was defined.
///
/// Textual strings files know the line of each entry, property lists don't.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub file_path: PathBuf,
    /// Line number (1-indexed), if known.
    pub line: Option<usize>,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<PathBuf>, line: Option<usize>) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }

    pub fn with_line(file_path: impl Into<PathBuf>, line: usize) -> Self {
        Self::new(file_path, Some(line))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file_path.display(), line),
            None => write!(f, "{}", self.file_path.display()),
        }
    }
}
