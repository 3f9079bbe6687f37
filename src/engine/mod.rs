// src/engine/mod.rs
//! Row-context classification engine.
//!
//! `classify` decides what a row is, `reconstruct` repairs court labels,
//! `engine` carries context down each sheet, `search` filters rows by term.
//! `types` holds the keyword tables all of them read from.

pub mod classify;
pub mod engine;
pub mod reconstruct;
pub mod search;
pub mod types;

pub use classify::{classify, Classification};
pub use engine::{propagate, propagate_sheet, walk_sheet, ContextState};
pub use reconstruct::{reconstruct, Strategy};
pub use search::{accept_term, search, search_with_progress};
