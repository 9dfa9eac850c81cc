//! Syntax structure sources.
//!
//! The tool does not parse Swift itself. `sourcekit` obtains SourceKit's structure
//! for a file, either from a saved JSON dump or by running `sourcekitten`.

pub mod sourcekit;

pub use sourcekit::{SourceKitten, StructureError, StructureFile, StructureProvider, parse_structure};
