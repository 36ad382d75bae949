// src/data.rs
//
// Tabular model output. Columns are named, keep first-seen header order,
// and every row must match the header's cardinality. A misaligned row is
// rejected, never padded.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One table cell. Numeric columns hold `Num`, everything else `Text`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Num(f64),
    Text(String),
}

impl Cell {
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Cell::Num(n) => Some(*n),
            Cell::Text(_) => None,
        }
    }

    /// Cell text for export. Scientific notation for the extremes,
    /// plain decimal otherwise.
    pub fn render(&self) -> String {
        match self {
            Cell::Text(t) => t.clone(),
            Cell::Num(n) => {
                let a = n.abs();
                if a != 0.0 && (a < 1e-4 || a >= 1e15) {
                    format!("{n:e}")
                } else {
                    format!("{n}")
                }
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    headers: Vec<String>,
    columns: Vec<Vec<Cell>>, // parallel to headers
}

impl DataSet {
    pub fn new(headers: Vec<String>) -> Self {
        let columns = headers.iter().map(|_| Vec::new()).collect();
        Self { headers, columns }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append one row. The cell count must match the header row.
    pub fn push_row(&mut self, cells: Vec<Cell>) -> Result<(), Error> {
        if cells.len() != self.headers.len() {
            return Err(Error::Scrape(format!(
                "row/column mismatch: row has {} cells, header has {} columns",
                cells.len(),
                self.headers.len()
            )));
        }
        for (col, cell) in self.columns.iter_mut().zip(cells) {
            col.push(cell);
        }
        Ok(())
    }

    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(&self.columns[idx])
    }

    /// Column as f64s; `None` if the column is absent or holds any text cell.
    pub fn numbers(&self, name: &str) -> Option<Vec<f64>> {
        self.column(name)?.iter().map(Cell::as_num).collect()
    }

    /// Row cells rendered as text, in header order.
    pub fn render_row(&self, idx: usize) -> Vec<String> {
        self.columns.iter().map(|col| col[idx].render()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataSet {
        let mut d = DataSet::new(vec![s!("alt"), s!("temp"), s!("species")]);
        d.push_row(vec![Cell::Num(100.0), Cell::Num(192.2), Cell::Text(s!("O"))])
            .unwrap();
        d.push_row(vec![Cell::Num(200.0), Cell::Num(854.9), Cell::Text(s!("N2"))])
            .unwrap();
        d
    }

    #[test]
    fn columns_keep_header_order_and_values() {
        let d = sample();
        assert_eq!(d.headers(), ["alt", "temp", "species"]);
        assert_eq!(d.len(), 2);
        assert_eq!(d.numbers("alt"), Some(vec![100.0, 200.0]));
        assert_eq!(d.numbers("temp"), Some(vec![192.2, 854.9]));
    }

    #[test]
    fn text_column_yields_no_numbers() {
        let d = sample();
        assert_eq!(d.numbers("species"), None);
        assert_eq!(d.column("species").unwrap().len(), 2);
    }

    #[test]
    fn short_row_is_rejected() {
        let mut d = sample();
        let err = d.push_row(vec![Cell::Num(300.0)]).unwrap_err();
        assert!(err.to_string().contains("row/column mismatch"));
        assert_eq!(d.len(), 2); // unchanged
    }

    #[test]
    fn render_row_matches_header_order() {
        let d = sample();
        assert_eq!(d.render_row(0), vec!["100", "192.2", "O"]);
    }

    #[test]
    fn render_keeps_scientific_extremes() {
        assert_eq!(Cell::Num(1.2e-9).render(), "1.2e-9");
        assert_eq!(Cell::Num(4.6e11).render(), "460000000000");
        assert_eq!(Cell::Num(0.0).render(), "0");
    }
}
