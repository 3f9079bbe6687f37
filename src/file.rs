// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_table;
use crate::error::ExportError;
use crate::report::ReportTable;

/// Write the report to `export.out_path()` as CSV/TSV.
/// An empty table is a no-op: nothing is created and `Ok(None)` comes back.
pub fn write_report(
    export: &ExportOptions,
    table: &ReportTable,
) -> Result<Option<PathBuf>, ExportError> {
    if table.is_empty() {
        logd!("Export: nothing selected, skipping write");
        return Ok(None);
    }

    let path = export.out_path();
    if path.is_dir() {
        return Err(ExportError::NotAFile(path));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let io_err = |source| ExportError::Io { path: path.clone(), source };
    let file = File::create(&path).map_err(io_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_table(&mut out, table, export.include_headers, export.delimiter()).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    logf!("Export: wrote rows={} → {}", table.row_count(), path.display());
    Ok(Some(path))
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })
}
