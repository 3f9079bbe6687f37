// src/report.rs
//
// Fixed-column projection of selected rows for export/rendering.
// Column count and order are a contract with whatever renders the table.

use crate::config::consts::PLACEHOLDER;
use crate::config::options::ExportOptions;
use crate::data::EnrichedRow;
use crate::selection::SelectionLedger;
use crate::workbook::Cell;

pub const REPORT_HEADERS: [&str; 7] = [
    "Organizational unit",
    "State/Date",
    "Case ID",
    "Party 1",
    "Party 2",
    "Status/Action",
    "Sheet",
];

/// Number of leading row cells copied into the report.
const CELL_COLUMNS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn row_count(&self) -> usize { self.rows.len() }
}

/// One report row: court, state, the first four cells, sheet name.
pub fn project_row(row: &EnrichedRow, org_placeholder: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(REPORT_HEADERS.len());
    out.push(or_placeholder(&row.org_context, org_placeholder));
    out.push(or_placeholder(&row.state_context, PLACEHOLDER));
    for ix in 0..CELL_COLUMNS {
        let cell = match row.cell(ix) {
            None | Some(Cell::Empty) => s!(PLACEHOLDER),
            Some(c) => c.to_text().into_owned(),
        };
        out.push(cell);
    }
    out.push(row.sheet.clone());
    out
}

pub fn project<'a, I>(rows: I, org_placeholder: &str) -> ReportTable
where
    I: IntoIterator<Item = &'a EnrichedRow>,
{
    ReportTable {
        headers: REPORT_HEADERS.iter().map(|h| s!(*h)).collect(),
        rows: rows.into_iter().map(|r| project_row(r, org_placeholder)).collect(),
    }
}

/// The ledger's rows, in selection order, with the configured placeholder.
pub fn project_selection(ledger: &SelectionLedger, export: &ExportOptions) -> ReportTable {
    project(ledger.rows(), &export.org_placeholder)
}

fn or_placeholder(label: &str, placeholder: &str) -> String {
    if label.trim().is_empty() { s!(placeholder) } else { s!(label) }
}
