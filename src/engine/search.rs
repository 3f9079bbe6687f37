// src/engine/search.rs
//
// Case-insensitive substring search over whole rows. Every row of every
// sheet is tested, header rows included; a matching header row carries the
// context from before its own transition (see engine.rs).

use crate::data::EnrichedRow;
use crate::progress::{NullProgress, Progress};
use crate::workbook::{Cell, Sheet, Workbook};

use super::engine::walk_sheet;

/// Trimmed term, or `None` when it is blank. Blank terms never run a search.
pub fn accept_term(term: &str) -> Option<&str> {
    let t = term.trim();
    (!t.is_empty()).then_some(t)
}

/// Lowercased text of a row: every cell as text (empty for missing), joined by one space.
pub fn row_text(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|c| c.to_text())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// `needle` must already be lowercased.
pub fn row_matches(cells: &[Cell], needle: &str) -> bool {
    row_text(cells).contains(needle)
}

/// Matching rows of one sheet. `needle` must already be lowercased.
pub fn search_sheet(sheet: &Sheet, needle: &str) -> Vec<EnrichedRow> {
    let mut hits = Vec::new();
    walk_sheet(sheet, |v| {
        if row_matches(v.cells, needle) {
            hits.push(v.context.enrich(&sheet.name, v.index, v.cells));
        }
    });
    hits
}

/// Every matching row across the workbook, in sheet then row order.
/// Callers reject blank terms; an empty needle matches every row.
pub fn search(workbook: &Workbook, term: &str) -> Vec<EnrichedRow> {
    search_with_progress(workbook, term, &mut NullProgress)
}

pub fn search_with_progress(
    workbook: &Workbook,
    term: &str,
    progress: &mut dyn Progress,
) -> Vec<EnrichedRow> {
    let needle = term.trim().to_lowercase();
    progress.begin(workbook.sheets.len());

    let mut results = Vec::new();
    for sheet in &workbook.sheets {
        let hits = search_sheet(sheet, &needle);
        logd!("Search: sheet={:?} term={:?} hits={}", sheet.name, needle, hits.len());
        progress.sheet_done(&sheet.name, hits.len());
        results.extend(hits);
    }

    progress.finish();
    results
}
