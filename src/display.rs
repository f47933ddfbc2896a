use crate::types::FileRecord;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, Table};

/// MIME type for a download link, by lowercase dotted extension.
#[must_use]
pub fn mime_for_ext(ext: &str) -> &'static str {
    match ext {
        ".txt" => "text/plain",
        ".csv" => "text/csv",
        ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".xls" => "application/vnd.ms-excel",
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

fn record_table(records: &[FileRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["Name", "Type", "Size", "Modified", "MIME"]);

    for rec in records {
        let ext = if rec.ext.is_empty() { "-" } else { &rec.ext };
        table.add_row(vec![
            Cell::new(&rec.name).add_attribute(Attribute::Bold),
            Cell::new(ext),
            Cell::new(human_bytes::human_bytes(rec.size_kb * 1024.0)),
            Cell::new(&rec.modified_iso),
            Cell::new(mime_for_ext(&rec.ext)).fg(Color::DarkGrey),
        ]);
    }
    table
}

/// Print a ranked result set, best match first.
pub fn print_results(results: &[FileRecord]) {
    if results.is_empty() {
        println!("{}", "No related documents found.".yellow());
        return;
    }

    println!("{}", "=== Related Documents ===".cyan());
    println!("{}", record_table(results));
}

/// Print the full scanned record list.
pub fn print_records(records: &[FileRecord]) {
    if records.is_empty() {
        println!("{}", "No files found under the data root.".yellow());
        return;
    }

    println!(
        "{}",
        format!("=== Scanned Files ({}) ===", records.len()).cyan()
    );
    println!("{}", record_table(records));
}
