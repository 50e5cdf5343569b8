// src/error.rs
use project_analyzer_engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Project directory does not exist")]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl AppError {
    /// Invocation problems are reported on stdout; everything else is a failure.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::NotADirectory(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
