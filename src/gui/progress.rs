// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

/// Mirrors per-sheet progress into the status line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    verb: &'static str,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, verb: &'static str) -> Self {
        Self { status, verb, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("{}…", self.verb));
    }
    fn sheet_done(&mut self, name: &str, _rows: usize) {
        self.done += 1;
        self.set_status(format!("{} {} ({}/{})", self.verb, name, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(format!("{} done", self.verb));
        } else {
            self.set_status(format!("{} done ({}/{})", self.verb, self.done, self.total));
        }
    }
}
