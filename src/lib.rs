//! lproj-check - consistency checker for Apple `.lproj` localizations
//!
//! Verifies that every language directory defines the same strings tables,
//! and that every table defines the same keys in every language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run, report, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Data types, strings table parsers and the repository loader
//! - `issues`: Discrepancy types and their rendering
//! - `rules`: The reconciliation rules (missing tables, missing keys)

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
