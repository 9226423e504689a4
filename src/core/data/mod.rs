//! Core data types shared by the loader, parsers and rules.
//!
//! ## Module Structure
//!
//! - `project`: Language projects (`LanguageProject`, `ParsedLanguageProject`)
//! - `table`: Strings tables and their entries (`StringsTable`, `LocalizedTable`)

pub mod project;
pub mod table;

pub use project::{LanguageProject, ParsedLanguageProject};
pub use table::{LocalizedTable, SourceLocation, StringsMap, StringsTable};
