// src/error.rs

use thiserror::Error;

/// Which pipeline stage failed. Every variant is fatal for the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fetching dataset failed: {0:#}")]
    Fetch(anyhow::Error),
    #[error("parsing dataset failed: {0:#}")]
    Parse(anyhow::Error),
    #[error("splitting date column failed: {0:#}")]
    Transform(anyhow::Error),
    #[error("writing spreadsheet failed: {0:#}")]
    Write(anyhow::Error),
}

impl PipelineError {
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Fetch(_) => "fetch",
            PipelineError::Parse(_) => "parse",
            PipelineError::Transform(_) => "transform",
            PipelineError::Write(_) => "write",
        }
    }

    /// Process exit status; all stages map to 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
