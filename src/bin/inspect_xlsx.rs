use ssbscraper::{config::OUTPUT_FILE, output::read_xlsx_summary};
use std::{env, path::Path, process::exit};

const PREVIEW_ROWS: usize = 10;

fn main() {
    // Optional CLI argument: path to the workbook, defaults to the pipeline output.
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [XLSX_FILE]", args[0]);
        exit(1);
    }
    let file_path = args.get(1).map(String::as_str).unwrap_or(OUTPUT_FILE);
    if let Err(e) = inspect_xlsx(Path::new(file_path)) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

/// Print sheet names, header and the first rows of the first sheet.
fn inspect_xlsx(path: &Path) -> anyhow::Result<()> {
    let sheet = read_xlsx_summary(path)?;

    println!("=== Workbook: {} ===", path.display());
    println!("Sheets:  {}", sheet.sheet_names.join(", "));
    println!("Columns: {}", sheet.header.len());
    println!("Rows:    {}", sheet.rows.len());
    println!();

    println!("=== Header ===");
    println!("{}", sheet.header.join(" | "));
    println!();

    println!("=== First {} rows ===", PREVIEW_ROWS.min(sheet.rows.len()));
    for row in sheet.rows.iter().take(PREVIEW_ROWS) {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        println!("{}", cells.join(" | "));
    }
    Ok(())
}
