// src/csv.rs
use std::io::{self, Write};

use crate::config::options::ExportFormat;
use crate::data::DataSet;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{}", sep)?;
        } else {
            first = false;
        }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write the full dataset: header row first, then one line per data row.
pub fn write_dataset<W: Write>(
    mut w: W,
    data: &DataSet,
    format: ExportFormat,
) -> io::Result<()> {
    let sep = format.delim();
    write_row(&mut w, data.headers(), sep)?;
    for i in 0..data.len() {
        write_row(&mut w, &data.render_row(i), sep)?;
    }
    Ok(())
}
