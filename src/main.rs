use ssbscraper::{
    config::PipelineConfig,
    error::PipelineError,
    logging,
    pipeline::{self, RunSummary},
};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    // ─── 1) init logging ─────────────────────────────────────────────
    logging::init();
    info!("startup");

    // ─── 2) compiled-in job ──────────────────────────────────────────
    let config = PipelineConfig::default();
    info!(
        endpoint = %config.endpoint,
        output = %config.output_path.display(),
        "running pipeline"
    );

    // ─── 3) run; stage errors are already logged ─────────────────────
    let result = pipeline::execute(&config);
    if let Ok(summary) = &result {
        info!(
            rows = summary.rows,
            columns = summary.columns,
            date_split = summary.date_split,
            "finished"
        );
    }
    ExitCode::from(exit_status(&result))
}

/// 0 on success, the stage's code otherwise.
fn exit_status(result: &Result<RunSummary, PipelineError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(err) => err.exit_code(),
    }
}
