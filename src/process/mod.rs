// src/process/mod.rs
//! Column-level transforms applied to a parsed table before it is written.

pub mod date_split;
pub mod utils;

pub use date_split::{split_date, MONTH_COLUMN, YEAR_COLUMN};
pub use utils::has_column;
