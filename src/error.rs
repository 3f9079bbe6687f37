// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// The input is not a workbook we can read. Shown to the user as-is;
/// nothing from the failed file is kept.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unsupported file type: {0:?} (expected xlsx, xlsm, xlsb, xls, ods, csv or tsv)")]
    UnsupportedFormat(String),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a readable workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("sheet '{sheet}' could not be read: {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("workbook contains no sheets")]
    NoSheets,
}

/// Header label repair failed for one row. Always recovered by the caller
/// (raw trimmed text is used instead); never leaves the engine.
#[derive(Debug, Clone, Error)]
pub enum ReconstructionFailure {
    #[error("header pattern table failed to build: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
