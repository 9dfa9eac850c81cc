use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Result};
use insta_cmd::get_cargo_bin;
use serde_json::{Value, json};
use tempfile::TempDir;

mod config;

const BIN_NAME: &str = "genstrings";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Keep config discovery inside the project
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with `Login.swift` and its structure dump `Login.json`.
    pub fn with_swift(source: &str, calls: &[Call]) -> Result<Self> {
        let test = Self::new()?;
        test.write_file("Login.swift", source)?;
        test.write_file("Login.json", &structure_json(source, calls))?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    /// `genstrings Login.swift Localizable.strings --structure Login.json`
    pub fn extract_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.args([
            "Login.swift",
            "Localizable.strings",
            "--structure",
            "Login.json",
        ]);
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// A call in the test source: the call text and its `(label, body)` arguments.
pub type Call<'a> = (&'a str, &'a [(&'a str, &'a str)]);

/// Build `sourcekitten structure` output for `source`, locating each call and its
/// arguments by searching the text.
pub fn structure_json(source: &str, calls: &[Call]) -> String {
    let substructure: Vec<Value> = calls
        .iter()
        .map(|(snippet, parameters)| call_node(source, snippet, parameters))
        .collect();
    let root = json!({
        "key.diagnostic_stage": "source.diagnostic.stage.swift.parse",
        "key.offset": 0,
        "key.length": source.len(),
        "key.substructure": substructure,
    });
    serde_json::to_string_pretty(&root).expect("structure serializes")
}

fn call_node(source: &str, snippet: &str, parameters: &[(&str, &str)]) -> Value {
    let offset = source.find(snippet).expect("call is in source");
    let name = &snippet[..snippet.find('(').expect("call has arguments")];
    let mut cursor = offset + name.len() + 1;

    let children: Vec<Value> = parameters
        .iter()
        .map(|(label, body)| {
            let text = if label.is_empty() {
                body.to_string()
            } else {
                format!("{label}: {body}")
            };
            let start = cursor + source[cursor..].find(&text).expect("argument is in call");
            cursor = start + text.len();
            let body_offset = if label.is_empty() {
                start
            } else {
                start + label.len() + 2
            };
            json!({
                "key.kind": "source.lang.swift.decl.var.parameter",
                "key.offset": start,
                "key.length": text.len(),
                "key.nameoffset": start,
                "key.namelength": label.len(),
                "key.bodyoffset": body_offset,
                "key.bodylength": body.len(),
            })
        })
        .collect();

    json!({
        "key.kind": "source.lang.swift.expr.call",
        "key.name": name,
        "key.offset": offset,
        "key.length": snippet.len(),
        "key.nameoffset": offset,
        "key.namelength": name.len(),
        "key.bodyoffset": offset + name.len() + 1,
        "key.bodylength": snippet.len() - name.len() - 2,
        "key.substructure": children,
    })
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
