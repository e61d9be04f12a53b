// src/jsonstat/mod.rs
//! Decoding of JSON-stat 2 datasets into flat Arrow tables.

pub mod parse;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use parse::{parse, to_record_batch, VALUE_COLUMN};
