// src/workbook.rs
//
// Canonical, read-only workbook data as handed over by the loader.
// Sheets are immutable once built; every search re-reads them from scratch.

use std::borrow::Cow;
use std::fmt;

/// One spreadsheet cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Text content, only for string cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Absent, or a string that is empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Coerce to text the way the search and display paths see it.
    /// `Empty` becomes `""`; whole numbers print without a fraction.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Cell::Text(s) => Cow::Borrowed(s),
            Cell::Number(n) => Cow::Owned(n.to_string()),
            Cell::Empty => Cow::Borrowed(""),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self { Cell::Text(s!(s)) }
}

impl From<String> for Cell {
    fn from(s: String) -> Self { Cell::Text(s) }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self { Cell::Number(n) }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self { v.map_or(Cell::Empty, Into::into) }
}

pub type Row = Vec<Cell>;

/// Build a row from anything convertible into cells.
pub fn row<I, T>(cells: I) -> Row
where
    I: IntoIterator<Item = T>,
    T: Into<Cell>,
{
    cells.into_iter().map(Into::into).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self { name: name.into(), rows }
    }
    pub fn row_count(&self) -> usize { self.rows.len() }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self { Self { sheets } }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name.as_str())
    }

    pub fn row_count(&self) -> usize {
        self.sheets.iter().map(Sheet::row_count).sum()
    }

    pub fn is_empty(&self) -> bool { self.sheets.is_empty() }
}
