//! Result persistence.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use fenceline_core::constants::RESULT_SUFFIX;
use fenceline_core::errors::TableError;
use fenceline_core::types::{Cell, Sheet};
use tracing::info;

/// Derive the default output path: `quotes.csv` → `quotes_result.csv`.
/// Extensionless inputs get the bare suffix.
pub fn result_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table");
    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{RESULT_SUFFIX}.{ext}"),
        None => format!("{stem}{RESULT_SUFFIX}"),
    };
    input.with_file_name(name)
}

/// Write the sheet back as delimited text, wrapping flagged cells in
/// `marker`. Values themselves are never altered; the marker is the
/// presentation of the flag bit.
pub fn save_sheet(sheet: &Sheet, path: &Path, marker: &str) -> Result<(), TableError> {
    let io_err = |source| TableError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);

    for row in &sheet.rows {
        let mut first = true;
        for cell in &row.cells {
            if !first {
                write!(out, ",").map_err(io_err)?;
            }
            write!(out, "{}", render_cell(cell, marker)).map_err(io_err)?;
            first = false;
        }
        writeln!(out).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    info!(path = %path.display(), "result written");
    Ok(())
}

fn render_cell(cell: &Cell, marker: &str) -> String {
    let text = cell.value.to_string();
    let text = if cell.flagged {
        format!("{marker}{text}{marker}")
    } else {
        text
    };
    quote_if_needed(text)
}

/// Quote a field when it contains the delimiter or quotes.
fn quote_if_needed(text: String) -> String {
    if text.contains(',') || text.contains('"') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use fenceline_core::types::CellValue;

    use super::*;

    #[test]
    fn derives_the_result_path() {
        assert_eq!(
            result_path(Path::new("quotes.csv")),
            PathBuf::from("quotes_result.csv")
        );
        assert_eq!(
            result_path(Path::new("/data/2024/bids.csv")),
            PathBuf::from("/data/2024/bids_result.csv")
        );
        assert_eq!(
            result_path(Path::new("noext")),
            PathBuf::from("noext_result")
        );
    }

    #[test]
    fn marks_flagged_cells_only() {
        let mut cell = Cell::new(1, 1, CellValue::Number(100.0));
        assert_eq!(render_cell(&cell, "**"), "100");
        cell.flagged = true;
        assert_eq!(render_cell(&cell, "**"), "**100**");
    }

    #[test]
    fn quotes_fields_with_delimiters() {
        let cell = Cell::new(1, 1, CellValue::Text("a,b".into()));
        assert_eq!(render_cell(&cell, "**"), "\"a,b\"");

        let cell = Cell::new(1, 1, CellValue::Text("say \"hi\"".into()));
        assert_eq!(render_cell(&cell, "**"), "\"say \"\"hi\"\"\"");
    }
}
