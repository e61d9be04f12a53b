// src/fetch/mod.rs

pub mod query;

use crate::config::USER_AGENT;
use anyhow::{Context, Result};
use query::Query;
use reqwest::blocking::Client;
use tracing::{debug, info};
use url::Url;

/// Blocking client with our user agent; timeouts are reqwest's defaults.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("building HTTP client")
}

/// POST `query` as JSON to `endpoint` and return the response body.
///
/// One attempt only: transport errors and non-2xx statuses are returned as-is.
pub fn fetch_dataset(client: &Client, endpoint: &str, query: &Query) -> Result<String> {
    let url = Url::parse(endpoint).with_context(|| format!("parsing endpoint {}", endpoint))?;
    debug!(%url, filters = query.query.len(), format = %query.response.format, "POST query");

    let body = client
        .post(url.clone())
        .json(query)
        .send()
        .with_context(|| format!("POST {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status from {}", url))?
        .text()
        .with_context(|| format!("Reading text from {}", url))?;

    info!(%url, bytes = body.len(), "fetched dataset");
    Ok(body)
}
