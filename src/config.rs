// src/config.rs

use crate::fetch::query::Query;
use std::path::PathBuf;

/// Table 09654: production of petroleum products, monthly.
pub const SSB_ENDPOINT: &str = "https://data.ssb.no/api/v0/no/table/09654/";

/// Written relative to the working directory, overwritten on every run.
pub const OUTPUT_FILE: &str = "output.xlsx";

/// Label SSB gives the monthly time dimension (`Tid`), values like `2023M04`.
pub const DATE_COLUMN: &str = "måned";

pub const USER_AGENT: &str = concat!("ssbscraper/", env!("CARGO_PKG_VERSION"));

/// Everything one run needs. `Default` is the compiled-in job.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub endpoint: String,
    pub query: Query,
    pub output_path: PathBuf,
    pub date_column: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            endpoint: SSB_ENDPOINT.to_string(),
            query: Query::petroleum_production(),
            output_path: PathBuf::from(OUTPUT_FILE),
            date_column: DATE_COLUMN.to_string(),
        }
    }
}
