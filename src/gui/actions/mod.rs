// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Components draw; these functions mutate `App` and report through its status.

mod copy;
mod export;
mod load;
mod search;

pub use copy::copy;
pub use export::export;
pub use load::{open_dropped, open_path};
pub use search::search;
