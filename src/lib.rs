// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod log;

pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod load;
pub mod progress;
pub mod report;
pub mod selection;
pub mod session;
pub mod workbook;
