//! Numeric sample extraction.

use fenceline_core::types::Row;

/// The numeric sample set of one row.
///
/// `values[i]` is the numeric value of `row.cells[cells[i]]`; the two
/// vectors stay index-aligned so flags can be written back to the exact
/// source cells after classification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericSamples {
    pub values: Vec<f64>,
    pub cells: Vec<usize>,
}

impl NumericSamples {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Extract the numeric sample set from a whole row, in column order.
///
/// Booleans are excluded even though spreadsheets render them as 0/1;
/// NaN and infinities are excluded like non-numeric values. Pure; no
/// cell is touched.
pub fn extract(row: &Row) -> NumericSamples {
    extract_window(row, 1, u32::MAX)
}

/// Extract the numeric sample set from the cells of `row` whose column
/// lies in the inclusive `[start_col, end_col]` window.
pub fn extract_window(row: &Row, start_col: u32, end_col: u32) -> NumericSamples {
    let mut samples = NumericSamples::default();
    for (idx, cell) in row.cells.iter().enumerate() {
        if cell.column < start_col || cell.column > end_col {
            continue;
        }
        if let Some(value) = cell.value.as_sample() {
            samples.values.push(value);
            samples.cells.push(idx);
        }
    }
    samples
}

#[cfg(test)]
mod tests {
    use fenceline_core::types::{CellValue, Row};

    use super::*;

    #[test]
    fn keeps_numbers_and_skips_everything_else() {
        // Mixed row: text and booleans never enter the sample set.
        let row = Row::from_values(
            1,
            vec![
                CellValue::Number(1.0),
                CellValue::Text("abc".into()),
                CellValue::Bool(true),
                CellValue::Number(4.0),
                CellValue::Number(5.0),
                CellValue::Number(6.0),
            ],
        );
        let samples = extract(&row);
        assert_eq!(samples.values, vec![1.0, 4.0, 5.0, 6.0]);
        assert_eq!(samples.cells, vec![0, 3, 4, 5]);
    }

    #[test]
    fn empty_and_non_numeric_rows_yield_empty_samples() {
        assert!(extract(&Row::new(1)).is_empty());

        let row = Row::from_values(
            2,
            vec![CellValue::Text("a".into()), CellValue::Empty, CellValue::Bool(false)],
        );
        assert!(extract(&row).is_empty());
    }

    #[test]
    fn non_finite_numbers_are_excluded() {
        let row = Row::from_values(
            1,
            vec![
                CellValue::Number(f64::NAN),
                CellValue::Number(f64::INFINITY),
                CellValue::Number(2.0),
            ],
        );
        let samples = extract(&row);
        assert_eq!(samples.values, vec![2.0]);
        assert_eq!(samples.cells, vec![2]);
    }

    #[test]
    fn window_restricts_by_column() {
        let row = Row::from_values(
            1,
            vec![
                CellValue::Number(1.0),
                CellValue::Number(2.0),
                CellValue::Number(3.0),
                CellValue::Number(4.0),
            ],
        );
        let samples = extract_window(&row, 2, 3);
        assert_eq!(samples.values, vec![2.0, 3.0]);
        assert_eq!(samples.cells, vec![1, 2]);
    }

    #[test]
    fn extraction_has_no_side_effects() {
        let row = Row::from_values(1, vec![CellValue::Number(1.0)]);
        let before = row.clone();
        let _ = extract(&row);
        assert_eq!(row, before);
    }
}
