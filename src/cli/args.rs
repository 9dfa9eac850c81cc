//! CLI argument definitions using clap.
//!
//! Flags override the matching fields of `.genstringsrc.json`.

use std::path::PathBuf;

use clap::Parser;

/// Extract localized strings from a Swift file into a `.strings` resource file.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Swift source file to scan
    pub input: PathBuf,

    /// `.strings` file to append entries to (created if missing)
    pub output: PathBuf,

    /// Read the syntax structure from a `sourcekitten structure` JSON dump instead of
    /// running sourcekitten
    #[arg(long, value_name = "FILE")]
    pub structure: Option<PathBuf>,

    /// Function whose calls become entries (overrides config file)
    #[arg(long = "function", value_name = "NAME")]
    pub target_function: Option<String>,

    /// Empty the output file before writing instead of appending
    #[arg(long)]
    pub truncate: bool,

    /// Also extract calls nested inside other calls' arguments
    #[arg(long)]
    pub descend_into_calls: bool,

    /// sourcekitten executable (overrides config file)
    #[arg(long, value_name = "PATH", env = "GENSTRINGS_SOURCEKITTEN")]
    pub sourcekitten: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
