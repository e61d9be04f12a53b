// src/logging.rs

use std::io;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    util::SubscriberInitExt,
    EnvFilter,
};

/// Used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,ssbscraper=debug";

/// Install the process-wide subscriber: timestamp, level, target, message.
/// Call once from a binary; the library only emits events.
pub fn init() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    subscriber(env, io::stdout).init();
}

/// The fmt subscriber `init` installs, writing to `writer`. Closed spans
/// report their busy/idle time.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(writer)
        .finish()
}
