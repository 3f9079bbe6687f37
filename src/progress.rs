// src/progress.rs
/// Per-sheet progress reporting for workbook loads and searches.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sheets to go through.
    fn begin(&mut self, _sheets: usize) {}

    /// Called when one sheet has been read or scanned.
    fn sheet_done(&mut self, _name: &str, _rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
