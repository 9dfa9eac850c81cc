use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::args::Arguments;
use crate::config::{Config, load_config};
use crate::core::parsers::{SourceKitten, StructureFile, StructureProvider};
use crate::core::pipeline::{self, PipelineOptions, RunReport};
use crate::core::writer::WriteMode;

/// Everything the reporter needs after a completed run.
pub struct RunOutcome {
    pub output: PathBuf,
    /// Config file that was applied, if any.
    pub config_path: Option<PathBuf>,
    pub options: PipelineOptions,
    /// Description of where the syntax structure came from.
    pub structure_source: String,
    pub report: RunReport,
}

/// Resolve configuration, pick the structure provider and run the pipeline.
pub fn run(args: &Arguments) -> Result<RunOutcome> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;
    let config = apply_overrides(loaded.config, args);
    config.validate()?;

    let options = config.pipeline_options();
    let (provider, structure_source) = structure_provider(args, &config);

    let report = pipeline::run(&args.input, &args.output, provider.as_ref(), &options)?;

    Ok(RunOutcome {
        output: args.output.clone(),
        config_path: loaded.path,
        options,
        structure_source,
        report,
    })
}

fn apply_overrides(mut config: Config, args: &Arguments) -> Config {
    if let Some(function) = &args.target_function {
        config.target_function = function.clone();
    }
    if args.truncate {
        config.write_mode = WriteMode::Truncate;
    }
    if args.descend_into_calls {
        config.descend_into_calls = true;
    }
    if let Some(program) = &args.sourcekitten {
        config.sourcekitten = program.display().to_string();
    }
    config
}

fn structure_provider(args: &Arguments, config: &Config) -> (Box<dyn StructureProvider>, String) {
    match &args.structure {
        Some(path) => (
            Box::new(StructureFile::new(path)),
            format!("structure file {}", path.display()),
        ),
        None => (
            Box::new(SourceKitten::new(Path::new(&config.sourcekitten))),
            format!("`{} structure`", config.sourcekitten),
        ),
    }
}
