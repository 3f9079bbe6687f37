// src/selection.rs
//
// Selection ledger: rows the user picked, kept as owned copies keyed by
// their stable RowKey. Result sets are rebuilt on every search, so nothing
// here points into them; a row picked in one search is still picked when a
// later search shows it again.
//
// Only explicit actions mutate the ledger. Searching never does.

use std::collections::HashSet;

use crate::data::{EnrichedRow, RowKey};

#[derive(Clone, Debug, Default)]
pub struct SelectionLedger {
    /// Insertion order; drives export order.
    entries: Vec<(RowKey, EnrichedRow)>,
    keys: HashSet<RowKey>,
}

impl SelectionLedger {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn is_selected(&self, row: &EnrichedRow) -> bool {
        self.keys.contains(&row.key())
    }

    /// Insert if absent. Returns true if the row was added.
    pub fn insert(&mut self, row: &EnrichedRow) -> bool {
        let key = row.key();
        if !self.keys.insert(key.clone()) {
            return false;
        }
        self.entries.push((key, row.clone()));
        true
    }

    /// Remove by key. Returns true if something was removed.
    pub fn remove(&mut self, key: &RowKey) -> bool {
        if !self.keys.remove(key) {
            return false;
        }
        self.entries.retain(|(k, _)| k != key);
        true
    }

    /// Insert if absent, remove if present. Returns the new state.
    pub fn toggle(&mut self, row: &EnrichedRow) -> bool {
        let key = row.key();
        if self.remove(&key) {
            false
        } else {
            self.insert(row)
        }
    }

    /// True if there is at least one visible row and all of them are selected.
    pub fn all_visible_selected(&self, visible: &[EnrichedRow]) -> bool {
        !visible.is_empty() && visible.iter().all(|r| self.is_selected(r))
    }

    /// If every visible row is already selected, deselect exactly those;
    /// otherwise select all visible rows. Rows not visible are untouched.
    /// Empty `visible` is a no-op.
    pub fn select_all_visible(&mut self, visible: &[EnrichedRow]) {
        if visible.is_empty() {
            return;
        }
        if self.all_visible_selected(visible) {
            let drop: HashSet<RowKey> = visible.iter().map(EnrichedRow::key).collect();
            self.entries.retain(|(k, _)| !drop.contains(k));
            self.keys.retain(|k| !drop.contains(k));
        } else {
            for row in visible {
                self.insert(row);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.keys.clear();
    }

    /// Selected rows in the order they were picked.
    pub fn rows(&self) -> impl Iterator<Item = &EnrichedRow> {
        self.entries.iter().map(|(_, row)| row)
    }

    pub fn keys(&self) -> impl Iterator<Item = &RowKey> {
        self.entries.iter().map(|(key, _)| key)
    }
}
