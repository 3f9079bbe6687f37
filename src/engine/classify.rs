// src/engine/classify.rs
//
// Header detection for a single row. A heuristic, not a grammar: litigant
// names that happen to contain a court keyword or a month will be taken for
// headers when the row has the header shape. That is accepted.

use crate::core::sanitize::{compact_upper, upper_trim};
use crate::workbook::Cell;

use super::types::{HeaderRules, HEADER_RULES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Ordinary record row.
    NotHeader,
    /// Court/organizational header; carries the raw cell text.
    OrganizationalHeader(&'a str),
    /// State/date notice header; carries the raw cell text.
    StateHeader(&'a str),
    /// Header-shaped row that matched neither table. Leaves context alone.
    Ambiguous,
}

impl Classification<'_> {
    pub fn is_header(&self) -> bool {
        !matches!(self, Classification::NotHeader)
    }
}

/// Text of cell 0 if the row has the header shape: a non-empty string first
/// cell and a blank or missing second cell.
pub fn header_text(row: &[Cell]) -> Option<&str> {
    let first = row.first()?.as_text().filter(|t| !t.is_empty())?;
    let second_blank = row.get(1).is_none_or(Cell::is_blank);
    second_blank.then_some(first)
}

pub fn classify(row: &[Cell]) -> Classification<'_> {
    classify_with(&HEADER_RULES, row)
}

pub fn classify_with<'a>(rules: &HeaderRules, row: &'a [Cell]) -> Classification<'a> {
    let Some(text) = header_text(row) else {
        return Classification::NotHeader;
    };

    if is_org_header(rules, text) {
        Classification::OrganizationalHeader(text)
    } else if is_state_header(rules, text) {
        Classification::StateHeader(text)
    } else {
        Classification::Ambiguous
    }
}

fn is_org_header(rules: &HeaderRules, text: &str) -> bool {
    let compact = compact_upper(text);
    compact.chars().count() > rules.org_min_len && rules.org_keywords.any_in(&compact)
}

fn is_state_header(rules: &HeaderRules, text: &str) -> bool {
    let upper = upper_trim(text);
    upper.starts_with(rules.state_prefix)
        || rules.months.any_in(&upper)
        || rules.pending_markers.any_in(&upper)
}
