//! Core loading pipeline: data types, table parsers and the repository loader.
//!
//! ## Module Structure
//!
//! - `data`: Language projects and strings tables
//! - `parsers`: Textual `.strings` and property list decoding
//! - `loader`: Resolves `.lproj` directories and reads their tables

pub mod data;
pub mod loader;
pub mod parsers;

pub use data::{
    LanguageProject, LocalizedTable, ParsedLanguageProject, SourceLocation, StringsMap,
    StringsTable,
};
pub use loader::{LoadOptions, LoadResult, load_projects};
pub use parsers::{DataTypeError, StringsEntry};
