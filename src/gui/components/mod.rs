// src/gui/components/mod.rs
pub mod export_bar;
pub mod open_bar;
pub mod results_table;
pub mod search_bar;
pub mod selection_panel;
