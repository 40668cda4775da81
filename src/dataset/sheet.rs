// src/dataset/sheet.rs

use calamine::{Data, Range};

use crate::dataset::cells::{cell_to_string, is_blank};
use crate::dataset::LoadError;

/// A worksheet reduced to a header row and its non-empty data rows.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    headers: Vec<String>,
    rows: Vec<Vec<Data>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<Data>>) -> Self {
        let rows = rows
            .into_iter()
            .filter(|row| !row.iter().all(is_blank))
            .collect();

        Self {
            name: name.into(),
            headers: headers.iter().map(|h| h.trim().to_string()).collect(),
            rows,
        }
    }

    /// First row of the range is the header.
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|r| r.iter().map(cell_to_string).collect())
            .unwrap_or_default();

        Self::new(name, headers, rows.map(|r| r.to_vec()).collect())
    }

    pub fn rows(&self) -> &[Vec<Data>] {
        &self.rows
    }

    pub fn column(&self, header: &str) -> Result<usize, LoadError> {
        self.optional_column(header)
            .ok_or_else(|| LoadError::MissingColumn {
                sheet: self.name.clone(),
                column: header.to_string(),
            })
    }

    pub fn optional_column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

/// Cell at `idx`, or `Empty` past the end of a short row.
pub fn cell(row: &[Data], idx: usize) -> &Data {
    static EMPTY: Data = Data::Empty;
    row.get(idx).unwrap_or(&EMPTY)
}
