pub mod config;
pub mod error;
pub mod fetch;
pub mod jsonstat;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod process;
