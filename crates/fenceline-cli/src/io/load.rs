//! Table loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fenceline_core::errors::TableError;
use fenceline_core::types::{CellValue, Row, Sheet, Workbook};
use tracing::info;

/// Spreadsheet error codes recognized as `Other` values.
const ERROR_CODES: [&str; 7] = [
    "#NULL!", "#DIV/0!", "#VALUE!", "#REF!", "#NAME?", "#NUM!", "#N/A",
];

/// Load a delimited table file into a single-sheet workbook.
///
/// The sheet is named after the file stem. Rows keep their 1-based file
/// line numbers and cells their 1-based column positions, so flags map
/// back to the exact source coordinates.
pub fn load_workbook(path: &Path) -> Result<Workbook, TableError> {
    let file = File::open(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sheet")
        .to_string();
    let mut sheet = Sheet::new(name);

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = i as u32 + 1;
        let values = split_fields(&line, path, index)?
            .into_iter()
            .map(|field| parse_cell(&field))
            .collect();
        sheet.rows.push(Row::from_values(index, values));
    }

    if sheet.rows.is_empty() {
        return Err(TableError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    info!(rows = sheet.rows.len(), sheet = %sheet.name, "table loaded");

    let mut workbook = Workbook::new();
    workbook.push(sheet);
    Ok(workbook)
}

/// Type a raw field per spreadsheet conventions.
///
/// Empty → `Empty`; TRUE/FALSE (any case) → `Bool`; parseable floats →
/// `Number` (NaN and infinities parse as numbers here and are excluded
/// later, at sample extraction); spreadsheet error codes → `Other`;
/// everything else → `Text`.
pub fn parse_cell(field: &str) -> CellValue {
    if field.is_empty() {
        return CellValue::Empty;
    }

    let upper = field.to_ascii_uppercase();
    match upper.as_str() {
        "TRUE" => return CellValue::Bool(true),
        "FALSE" => return CellValue::Bool(false),
        _ => {}
    }

    if ERROR_CODES.contains(&upper.as_str()) {
        return CellValue::Other(upper);
    }

    if let Ok(number) = field.parse::<f64>() {
        return CellValue::Number(number);
    }

    CellValue::Text(field.to_string())
}

/// Split one line into fields, honoring double-quoted fields with
/// embedded delimiters and doubled quotes.
///
/// TODO: quoted fields spanning multiple lines are not recognized; the
/// row loop would need to carry the open-quote state across lines.
fn split_fields(line: &str, path: &Path, row: u32) -> Result<Vec<String>, TableError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;
    let mut quoted_field = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() && !quoted_field => {
                in_quotes = true;
                quoted_field = true;
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
                quoted_field = false;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(TableError::UnbalancedQuote {
            path: path.to_path_buf(),
            line: row,
        });
    }

    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_fields_per_spreadsheet_conventions() {
        assert_eq!(parse_cell(""), CellValue::Empty);
        assert_eq!(parse_cell("TRUE"), CellValue::Bool(true));
        assert_eq!(parse_cell("false"), CellValue::Bool(false));
        assert_eq!(parse_cell("12"), CellValue::Number(12.0));
        assert_eq!(parse_cell("-3.5"), CellValue::Number(-3.5));
        assert_eq!(parse_cell("1e3"), CellValue::Number(1000.0));
        assert_eq!(parse_cell("#DIV/0!"), CellValue::Other("#DIV/0!".into()));
        assert_eq!(parse_cell("#n/a"), CellValue::Other("#N/A".into()));
        assert_eq!(parse_cell("acme"), CellValue::Text("acme".into()));
    }

    #[test]
    fn nan_parses_as_number_for_later_exclusion() {
        match parse_cell("NaN") {
            CellValue::Number(n) => assert!(n.is_nan()),
            other => panic!("expected Number, got {other:?}"),
        }
    }

    #[test]
    fn splits_plain_and_quoted_fields() {
        let path = Path::new("t.csv");
        assert_eq!(
            split_fields("a,b,,d", path, 1).unwrap(),
            vec!["a", "b", "", "d"]
        );
        assert_eq!(
            split_fields(r#""a,b",c"#, path, 1).unwrap(),
            vec!["a,b", "c"]
        );
        assert_eq!(
            split_fields(r#""say ""hi""",2"#, path, 1).unwrap(),
            vec![r#"say "hi""#, "2"]
        );
    }

    #[test]
    fn unbalanced_quote_is_an_error() {
        let path = Path::new("t.csv");
        assert!(matches!(
            split_fields(r#""open,2"#, path, 7),
            Err(TableError::UnbalancedQuote { line: 7, .. })
        ));
    }
}
