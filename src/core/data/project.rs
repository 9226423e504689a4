use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
};

use super::{LocalizedTable, StringsMap, StringsTable};

/// One language's localization directory (e.g. `Resources/en.lproj`).
///
/// Identity is the directory path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageProject {
    path: PathBuf,
}

impl LanguageProject {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Language identifier derived from the directory name.
    ///
    /// - "Resources/en.lproj" -> Some("en")
    /// - "Resources/zh-Hans.lproj" -> Some("zh-Hans")
    pub fn language(&self) -> Option<&str> {
        self.path.file_stem().and_then(|s| s.to_str())
    }
}

impl fmt::Display for LanguageProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// A language project with all of its strings tables parsed.
///
/// Tables are keyed by name, which is unique within a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLanguageProject {
    project: LanguageProject,
    tables: BTreeMap<String, LocalizedTable>,
}

impl ParsedLanguageProject {
    pub fn new(project: LanguageProject) -> Self {
        Self {
            project,
            tables: BTreeMap::new(),
        }
    }

    /// Add a table with no backing file, built from key-value pairs.
    ///
    /// ```
    /// use lproj_check::core::{LanguageProject, ParsedLanguageProject};
    ///
    /// let en = ParsedLanguageProject::new(LanguageProject::new("en.lproj"))
    ///     .with_table("Main", [("title", "Title")]);
    /// assert!(en.table("Main").is_some_and(|t| t.contains_key("title")));
    /// ```
    pub fn with_table<I, K, V>(mut self, name: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = StringsTable::in_project(self.project.clone(), name);
        let strings: StringsMap = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.insert_table(LocalizedTable::new(table, strings));
        self
    }

    /// Insert a table, returning the previous table with the same name.
    ///
    /// The table must belong to this project.
    pub fn insert_table(&mut self, table: LocalizedTable) -> Option<LocalizedTable> {
        debug_assert_eq!(table.table.project(), &self.project);
        self.tables.insert(table.name().to_string(), table)
    }

    pub fn project(&self) -> &LanguageProject {
        &self.project
    }

    pub fn table(&self, name: &str) -> Option<&LocalizedTable> {
        self.tables.get(name)
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Table names in lexicographic order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}
