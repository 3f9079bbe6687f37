// src/engine/engine.rs
//
// Context propagation: one left-to-right pass per sheet carrying two
// registers, the current court label and the current state/date label.
//
// Transitions per row:
//   court header  → org   := reconstructed label (even if empty)
//   state header  → state := uppercased, trimmed text
//   data row      → emitted with the current (org, state)
//   ambiguous     → nothing
//
// Visitors see the registers *before* the row's own transition. For data
// rows that makes no difference; for a header row it means the context shown
// alongside it is the one from the previous header.

use crate::core::sanitize::upper_trim;
use crate::data::EnrichedRow;
use crate::workbook::{Cell, Sheet, Workbook};

use super::classify::{classify, Classification};
use super::reconstruct::reconstruct;

/// The two context registers. Starts empty for every sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextState {
    pub org: String,
    pub state: String,
}

impl ContextState {
    /// Apply a row's header transition.
    pub fn step(&mut self, class: &Classification<'_>) {
        match *class {
            Classification::OrganizationalHeader(raw) => self.org = reconstruct(raw),
            Classification::StateHeader(raw) => self.state = upper_trim(raw),
            Classification::NotHeader | Classification::Ambiguous => {}
        }
    }

    /// Snapshot the registers onto a row.
    pub fn enrich(&self, sheet: &str, row_index: usize, cells: &[Cell]) -> EnrichedRow {
        EnrichedRow::new(sheet, row_index, cells, &self.org, &self.state)
    }
}

/// What a visitor gets for each row of a sheet walk.
pub struct RowVisit<'a> {
    pub index: usize,
    pub cells: &'a [Cell],
    pub class: Classification<'a>,
    /// Registers as they were before this row's transition.
    pub context: &'a ContextState,
}

/// Walk a sheet in row order, calling `visit` on each row before applying its
/// transition. Returns the registers as they stand after the last row.
pub fn walk_sheet<F>(sheet: &Sheet, mut visit: F) -> ContextState
where
    F: FnMut(RowVisit<'_>),
{
    sheet.rows.iter().enumerate().fold(ContextState::default(), |mut ctx, (index, cells)| {
        let class = classify(cells);
        visit(RowVisit { index, cells, class, context: &ctx });
        ctx.step(&class);
        ctx
    })
}

/// Data rows of one sheet, each carrying the context current at that row.
pub fn propagate_sheet(sheet: &Sheet) -> Vec<EnrichedRow> {
    let mut out = Vec::new();
    let end = walk_sheet(sheet, |v| {
        if !v.class.is_header() {
            out.push(v.context.enrich(&sheet.name, v.index, v.cells));
        }
    });
    logd!(
        "Propagate: sheet={:?} rows={} data_rows={} last_org={:?} last_state={:?}",
        sheet.name, sheet.row_count(), out.len(), end.org, end.state
    );
    out
}

/// Data rows of every sheet, in workbook order.
pub fn propagate(workbook: &Workbook) -> Vec<EnrichedRow> {
    workbook.sheets.iter().flat_map(propagate_sheet).collect()
}
