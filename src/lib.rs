//! genstrings - localized string extraction for Swift sources
//!
//! Reads the SourceKit syntax structure of a Swift file, finds every call to a
//! localization function (`NSLocalizedString` by default) and appends one
//! `/* comment */ "key" = value;` entry per call to a `.strings` resource file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (structure, walker, writer, pipeline)
//! - `issues`: Issue type definitions and reporting
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
