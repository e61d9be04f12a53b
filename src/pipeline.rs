// src/pipeline.rs

use crate::{
    config::PipelineConfig,
    error::PipelineError,
    fetch::{build_client, fetch_dataset},
    jsonstat,
    output::write_xlsx,
    process::{has_column, split_date},
};
use reqwest::blocking::Client;
use std::path::PathBuf;
use tracing::{error, info, instrument, warn};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    /// Whether the date column was found and split.
    pub date_split: bool,
}

/// Build a client and run the pipeline once.
pub fn execute(config: &PipelineConfig) -> Result<RunSummary, PipelineError> {
    let client = build_client().map_err(|e| failed(PipelineError::Fetch(e)))?;
    run(&client, config)
}

/// fetch → parse → (split date) → write. Any error stops the run before
/// the output file is touched, unless it is the write itself that failed.
#[instrument(level = "info", skip(client, config), fields(endpoint = %config.endpoint))]
pub fn run(client: &Client, config: &PipelineConfig) -> Result<RunSummary, PipelineError> {
    // ─── 1) fetch ────────────────────────────────────────────────────
    let raw = fetch_dataset(client, &config.endpoint, &config.query)
        .map_err(|e| failed(PipelineError::Fetch(e)))?;

    // ─── 2) parse ────────────────────────────────────────────────────
    let mut table = jsonstat::parse(&raw).map_err(|e| failed(PipelineError::Parse(e)))?;

    // ─── 3) split date column, if present ────────────────────────────
    let date_split = has_column(&table, &config.date_column);
    if date_split {
        table = split_date(&table, &config.date_column)
            .map_err(|e| failed(PipelineError::Transform(e)))?;
    } else {
        warn!(column = %config.date_column, "date column not in data; skipping year/month split");
    }

    // ─── 4) write ────────────────────────────────────────────────────
    write_xlsx(&table, &config.output_path).map_err(|e| failed(PipelineError::Write(e)))?;

    info!(path = %config.output_path.display(), "all done");
    Ok(RunSummary {
        output_path: config.output_path.clone(),
        rows: table.num_rows(),
        columns: table.num_columns(),
        date_split,
    })
}

fn failed(err: PipelineError) -> PipelineError {
    error!(stage = err.stage(), "{}", err);
    err
}
