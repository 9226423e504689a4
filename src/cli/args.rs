//! CLI argument definitions using clap.
//!
//! ```text
//! lproj-check [OPTIONS] <DIRECTORY> [LANGUAGES]...
//! ```
//!
//! Languages and extensions given here override the config file.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory containing one `<language>.lproj` directory per language
    pub directory: PathBuf,

    /// Languages to compare, e.g. `en fr de` (overrides config file)
    pub languages: Vec<String>,

    /// File extension treated as a strings table (overrides config file)
    /// Can be specified multiple times: -e strings -e plist
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Config file path (default: search upwards from DIRECTORY)
    #[arg(long, env = "LPROJ_CHECK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
