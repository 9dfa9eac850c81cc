use std::{
    fs, io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

use thiserror::Error;

use crate::core::syntax::SyntaxNode;

#[derive(Debug, Error)]
pub enum StructureError {
    #[error("failed to read structure file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` failed with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("structure is not valid SourceKit JSON")]
    Json(#[from] serde_json::Error),

    #[error("structure has no top-level key.substructure")]
    MissingSubstructure,
}

/// Source of the syntax structure for an input file.
pub trait StructureProvider {
    fn structure(&self, input: &Path) -> Result<SyntaxNode, StructureError>;
}

impl<F> StructureProvider for F
where
    F: Fn(&Path) -> Result<SyntaxNode, StructureError>,
{
    fn structure(&self, input: &Path) -> Result<SyntaxNode, StructureError> {
        self(input)
    }
}

/// Parse the JSON printed by `sourcekitten structure`.
pub fn parse_structure(json: &[u8]) -> Result<SyntaxNode, StructureError> {
    Ok(serde_json::from_slice(json)?)
}

/// A structure dump generated ahead of time, e.g.
/// `sourcekitten structure --file Login.swift > Login.json`.
#[derive(Debug, Clone)]
pub struct StructureFile {
    path: PathBuf,
}

impl StructureFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StructureProvider for StructureFile {
    fn structure(&self, _input: &Path) -> Result<SyntaxNode, StructureError> {
        let content = fs::read(&self.path).map_err(|source| StructureError::Read {
            path: self.path.clone(),
            source,
        })?;
        parse_structure(&content)
    }
}

/// Runs `<program> structure --file <input>` and parses its output.
#[derive(Debug, Clone)]
pub struct SourceKitten {
    program: PathBuf,
}

impl SourceKitten {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl StructureProvider for SourceKitten {
    fn structure(&self, input: &Path) -> Result<SyntaxNode, StructureError> {
        let program = self.program.display().to_string();
        let output = Command::new(&self.program)
            .arg("structure")
            .arg("--file")
            .arg(input)
            .output()
            .map_err(|source| StructureError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(StructureError::Failed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_structure(&output.stdout)
    }
}
