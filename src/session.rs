// src/session.rs
//
// One editing session: the loaded workbook, the latest result set, and the
// selection ledger.
//
// - Loading a workbook replaces everything, ledger included. A failed load
//   leaves the session exactly as it was.
// - Searching replaces the result set wholesale. It never touches the ledger.
// - Only toggle/select-all/clear mutate the ledger.

use std::path::{Path, PathBuf};

use crate::config::options::ExportOptions;
use crate::data::EnrichedRow;
use crate::engine::{accept_term, search_with_progress};
use crate::error::{DecodeError, ExportError};
use crate::file;
use crate::load::load_workbook;
use crate::progress::Progress;
use crate::report::{project_selection, ReportTable};
use crate::selection::SelectionLedger;
use crate::workbook::Workbook;

#[derive(Debug, Default)]
pub struct Session {
    workbook: Option<Workbook>,
    /// Where the workbook came from, for status lines and logs
    source: String,
    results: Vec<EnrichedRow>,
    has_searched: bool,
    term: String,
    ledger: SelectionLedger,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    /// Start over with a new workbook. Results and selection are discarded.
    pub fn replace_workbook(&mut self, workbook: Workbook, source: impl Into<String>) {
        *self = Self {
            workbook: Some(workbook),
            source: source.into(),
            ..Self::default()
        };
        logf!("Session: workbook set source={:?}", self.source);
    }

    /// Decode `path` and, only if that succeeds, replace the session with it.
    pub fn load(&mut self, path: &Path, progress: &mut dyn Progress) -> Result<(), DecodeError> {
        match load_workbook(path, progress) {
            Ok(wb) => {
                self.replace_workbook(wb, path.display().to_string());
                Ok(())
            }
            Err(e) => {
                loge!("Session: load failed {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    pub fn workbook(&self) -> Option<&Workbook> { self.workbook.as_ref() }
    pub fn source(&self) -> &str { &self.source }

    /// Run a search. Returns the hit count, or `None` when nothing ran: no
    /// workbook yet, or the term is blank. In that case the previous
    /// results and `has_searched` stay as they were.
    pub fn search(&mut self, term: &str, progress: &mut dyn Progress) -> Option<usize> {
        let wb = self.workbook.as_ref()?;
        let Some(term) = accept_term(term) else {
            logd!("Session: search skipped for blank term {:?}", term);
            return None;
        };

        self.results = search_with_progress(wb, term, progress);
        self.term = s!(term);
        self.has_searched = true;

        logf!("Session: search term={:?} hits={} selected={}",
            self.term, self.results.len(), self.ledger.len());
        Some(self.results.len())
    }

    pub fn results(&self) -> &[EnrichedRow] { &self.results }
    pub fn has_searched(&self) -> bool { self.has_searched }
    pub fn term(&self) -> &str { &self.term }

    /* ---------- selection ---------- */

    pub fn selection(&self) -> &SelectionLedger { &self.ledger }

    pub fn is_selected(&self, row: &EnrichedRow) -> bool { self.ledger.is_selected(row) }

    /// Toggle the result at `ix`. Returns the new state, `None` if out of range.
    pub fn toggle_result(&mut self, ix: usize) -> Option<bool> {
        let row = self.results.get(ix)?;
        Some(self.ledger.toggle(row))
    }

    pub fn toggle(&mut self, row: &EnrichedRow) -> bool { self.ledger.toggle(row) }

    pub fn all_visible_selected(&self) -> bool {
        self.ledger.all_visible_selected(&self.results)
    }

    pub fn select_all_visible(&mut self) {
        self.ledger.select_all_visible(&self.results);
    }

    pub fn clear_selection(&mut self) {
        self.ledger.clear();
    }

    /* ---------- export ---------- */

    pub fn report(&self, export: &ExportOptions) -> ReportTable {
        project_selection(&self.ledger, export)
    }

    /// Write the selection. Nothing selected is a no-op (`Ok(None)`).
    pub fn export(&self, export: &ExportOptions) -> Result<Option<PathBuf>, ExportError> {
        file::write_report(export, &self.report(export))
    }
}
