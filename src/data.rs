// src/data.rs
//
// View-layer row data derived from a workbook.
//
// - EnrichedRow: one sheet row plus the court/state context that was current
//                when the scan reached it. Rebuilt on every search, never
//                mutated afterwards.
// - RowKey:      stable identity of a row across searches of the same
//                workbook ("<sheet>-<zero-based index>").

use std::fmt;

use crate::config::consts::{EXTRA_CELLS_SEP, ROW_KEY_SEP};
use crate::workbook::{Cell, Row};

/// Stable row identity, independent of any particular result set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(String);

impl RowKey {
    pub fn new(sheet: &str, row_index: usize) -> Self {
        Self(format!("{sheet}{ROW_KEY_SEP}{row_index}"))
    }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedRow {
    pub sheet: String,
    /// 1-based position in the sheet, as shown to users
    pub row_number: usize,
    pub cells: Row,
    /// Court label current at this row; empty if none seen yet
    pub org_context: String,
    /// State/date label current at this row; empty if none seen yet
    pub state_context: String,
}

impl EnrichedRow {
    pub fn new(
        sheet: &str,
        row_index: usize,
        cells: &[Cell],
        org_context: &str,
        state_context: &str,
    ) -> Self {
        Self {
            sheet: s!(sheet),
            row_number: row_index + 1,
            cells: cells.to_vec(),
            org_context: s!(org_context),
            state_context: s!(state_context),
        }
    }

    /// Zero-based position in the sheet.
    pub fn row_index(&self) -> usize { self.row_number - 1 }

    pub fn key(&self) -> RowKey {
        RowKey::new(&self.sheet, self.row_index())
    }

    pub fn cell(&self, ix: usize) -> Option<&Cell> { self.cells.get(ix) }

    /// Cells past the fixed four columns, blanks dropped, for on-screen display.
    pub fn extra_cells(&self) -> String {
        self.cells
            .iter()
            .skip(4)
            .map(|c| c.to_text())
            .filter(|t| !t.trim().is_empty())
            .collect::<Vec<_>>()
            .join(EXTRA_CELLS_SEP)
    }
}
