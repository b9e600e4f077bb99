//! Rows, sheets, and workbooks.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellValue};

/// An ordered sequence of cells, identified by its 1-based row index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// 1-based index in the source table.
    pub index: u32,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            cells: Vec::new(),
        }
    }

    /// Build a row from raw values, assigning 1-based column positions
    /// in order.
    pub fn from_values(index: u32, values: Vec<CellValue>) -> Self {
        let cells = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Cell::new(index, i as u32 + 1, value))
            .collect();
        Self { index, cells }
    }
}

/// A named grid of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// The widest column index used by any row (0 for an empty sheet).
    pub fn max_column(&self) -> u32 {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter().map(|cell| cell.column))
            .max()
            .unwrap_or(0)
    }

    /// All flagged cells, in row then column order.
    pub fn flagged_cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter().filter(|cell| cell.flagged))
    }
}

/// An ordered collection of sheets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Sheet by 0-based position.
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Mutable sheet by 0-based position.
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_assigns_columns_in_order() {
        let row = Row::from_values(
            3,
            vec![
                CellValue::Number(1.0),
                CellValue::Empty,
                CellValue::Text("x".into()),
            ],
        );
        assert_eq!(row.cells.len(), 3);
        assert_eq!(row.cells[0].column, 1);
        assert_eq!(row.cells[2].column, 3);
        assert!(row.cells.iter().all(|c| c.row == 3 && !c.flagged));
    }

    #[test]
    fn max_column_spans_ragged_rows() {
        let mut sheet = Sheet::new("s");
        sheet.rows.push(Row::from_values(1, vec![CellValue::Empty]));
        sheet.rows.push(Row::from_values(
            2,
            vec![CellValue::Empty, CellValue::Empty, CellValue::Empty],
        ));
        assert_eq!(sheet.max_column(), 3);
        assert_eq!(Sheet::new("empty").max_column(), 0);
    }

    #[test]
    fn workbook_access_by_index_and_name() {
        let mut workbook = Workbook::new();
        workbook.push(Sheet::new("quotes"));
        workbook.push(Sheet::new("archive"));
        assert_eq!(workbook.len(), 2);
        assert_eq!(workbook.sheet_names(), vec!["quotes", "archive"]);
        assert_eq!(workbook.sheet(1).map(|s| s.name.as_str()), Some("archive"));
        assert!(workbook.sheet(2).is_none());
    }
}
