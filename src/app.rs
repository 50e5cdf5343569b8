// src/app.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use chrono::Local;
use project_analyzer_engine::config::ConfigBuilder;
use project_analyzer_engine::error::EngineError;
use project_analyzer_engine::report::{Report, ReportOptions};
use std::path::PathBuf;

/// Analyze `args.project_dir` and write the report, returning the report path.
///
/// # Errors
/// Fails if the argument is not a directory or the report cannot be written.
pub fn run(args: &Args, options: &ReportOptions) -> Result<PathBuf> {
    if !args.project_dir.is_dir() {
        return Err(AppError::NotADirectory(args.project_dir.clone()));
    }

    let started = Local::now();
    let config = ConfigBuilder::default()
        .root(args.project_dir.clone())
        .build()
        .map_err(|e| EngineError::Config(e.to_string()))?;

    let stats = project_analyzer_engine::analyze(&config)?;
    let path = Report::new(&stats).write(&args.project_dir, &started, options)?;
    Ok(std::path::absolute(&path).unwrap_or(path))
}
