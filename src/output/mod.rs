// src/output/mod.rs

pub mod xlsx;

pub use xlsx::{read_xlsx_summary, write_xlsx, SheetSummary, SHEET_NAME};
