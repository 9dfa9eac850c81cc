use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::extract::ExtractOptions;
use crate::core::pipeline::{DEFAULT_TARGET_FUNCTION, PipelineOptions};
use crate::core::syntax::kinds;
use crate::core::writer::WriteMode;

pub const CONFIG_FILE_NAME: &str = ".genstringsrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_target_function")]
    pub target_function: String,
    #[serde(default = "default_call_kind")]
    pub call_kind: String,
    #[serde(default = "default_parameter_kind")]
    pub parameter_kind: String,
    #[serde(default)]
    pub write_mode: WriteMode,
    #[serde(default)]
    pub descend_into_calls: bool,
    /// Program used when no pre-generated structure file is given.
    #[serde(default = "default_sourcekitten")]
    pub sourcekitten: String,
}

fn default_target_function() -> String {
    DEFAULT_TARGET_FUNCTION.to_string()
}

fn default_call_kind() -> String {
    kinds::CALL_EXPR.to_string()
}

fn default_parameter_kind() -> String {
    kinds::PARAMETER_DECL.to_string()
}

fn default_sourcekitten() -> String {
    "sourcekitten".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_function: default_target_function(),
            call_kind: default_call_kind(),
            parameter_kind: default_parameter_kind(),
            write_mode: WriteMode::default(),
            descend_into_calls: false,
            sourcekitten: default_sourcekitten(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Names used for matching must be non-empty, otherwise nothing would ever match.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("targetFunction", &self.target_function),
            ("callKind", &self.call_kind),
            ("parameterKind", &self.parameter_kind),
            ("sourcekitten", &self.sourcekitten),
        ] {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", field);
            }
        }
        Ok(())
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            target_function: self.target_function.clone(),
            extract: ExtractOptions {
                call_kind: self.call_kind.clone(),
                parameter_kind: self.parameter_kind.clone(),
                descend_into_calls: self.descend_into_calls,
            },
            write_mode: self.write_mode,
        }
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
