// src/load.rs
//
// Decode boundary: file or bytes in, `Workbook` out. Spreadsheet formats go
// through calamine; delimited text goes through our own parser and becomes a
// single sheet named after the file.
//
// Row positions must match the source sheet, since identity keys and
// 1-based row numbers shown to users are derived from them. calamine ranges
// start at the first used cell, so leading empty rows/columns are padded back.

use std::{
    ffi::OsStr,
    fs,
    io::{Cursor, Read, Seek},
    path::Path,
};

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};

use crate::csv::parse_rows;
use crate::error::DecodeError;
use crate::progress::Progress;
use crate::workbook::{Cell, Row, Sheet, Workbook};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Spreadsheet,
    Delimited(char),
}

impl SourceKind {
    pub fn from_ext(ext: &str) -> Result<Self, DecodeError> {
        match ext.to_ascii_lowercase().as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "xla" | "ods" => Ok(SourceKind::Spreadsheet),
            "csv" => Ok(SourceKind::Delimited(',')),
            "tsv" | "tab" => Ok(SourceKind::Delimited('\t')),
            other => Err(DecodeError::UnsupportedFormat(s!(other))),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, DecodeError> {
        let ext = path.extension().and_then(OsStr::to_str).unwrap_or("");
        Self::from_ext(ext)
    }
}

/// Load a workbook from disk.
pub fn load_workbook(path: &Path, progress: &mut dyn Progress) -> Result<Workbook, DecodeError> {
    let kind = SourceKind::from_path(path)?;
    logf!("Load: {} as {:?}", path.display(), kind);

    let wb = match kind {
        SourceKind::Spreadsheet => {
            let mut sheets = open_workbook_auto(path)?;
            read_sheets(&mut sheets, progress)?
        }
        SourceKind::Delimited(sep) => {
            let bytes = fs::read(path)
                .map_err(|source| DecodeError::Io { path: path.to_path_buf(), source })?;
            let name = path.file_stem().and_then(OsStr::to_str).unwrap_or("Sheet1");
            decode_delimited(name, &bytes, sep, progress)
        }
    };

    logf!("Load: OK sheets={} rows={}", wb.sheets.len(), wb.row_count());
    Ok(wb)
}

/// Load a workbook from in-memory bytes (e.g. a file dropped on the window).
/// `name` is used as the sheet name for delimited text.
pub fn load_workbook_from_bytes(
    bytes: Vec<u8>,
    ext: &str,
    name: &str,
    progress: &mut dyn Progress,
) -> Result<Workbook, DecodeError> {
    match SourceKind::from_ext(ext)? {
        SourceKind::Spreadsheet => {
            let mut sheets = open_workbook_auto_from_rs(Cursor::new(bytes))?;
            read_sheets(&mut sheets, progress)
        }
        SourceKind::Delimited(sep) => Ok(decode_delimited(name, &bytes, sep, progress)),
    }
}

fn read_sheets<RS: Read + Seek>(
    wb: &mut Sheets<RS>,
    progress: &mut dyn Progress,
) -> Result<Workbook, DecodeError> {
    let names = wb.sheet_names();
    if names.is_empty() {
        return Err(DecodeError::NoSheets);
    }
    progress.begin(names.len());

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = wb
            .worksheet_range(&name)
            .map_err(|source| DecodeError::Sheet { sheet: name.clone(), source })?;
        let rows = rows_from_range(&range);
        logd!("Load: sheet={:?} rows={}", name, rows.len());
        progress.sheet_done(&name, rows.len());
        sheets.push(Sheet::new(name, rows));
    }

    progress.finish();
    Ok(Workbook::new(sheets))
}

fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let Some((row0, col0)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Row> = (0..row0).map(|_| Vec::new()).collect();
    for r in range.rows() {
        let mut row: Row = vec![Cell::Empty; col0 as usize];
        row.extend(r.iter().map(cell_from));
        trim_trailing_empty(&mut row);
        rows.push(row);
    }
    rows
}

fn cell_from(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::from(if *b { "TRUE" } else { "FALSE" }),
        // Dates and durations: keep calamine's own text rendering
        other => Cell::Text(other.to_string()),
    }
}

fn decode_delimited(name: &str, bytes: &[u8], sep: char, progress: &mut dyn Progress) -> Workbook {
    progress.begin(1);
    let text = String::from_utf8_lossy(bytes);
    let rows: Vec<Row> = parse_rows(&text, sep)
        .into_iter()
        .map(|fields| {
            let mut row: Row = fields
                .into_iter()
                .map(|f| if f.is_empty() { Cell::Empty } else { Cell::Text(f) })
                .collect();
            trim_trailing_empty(&mut row);
            row
        })
        .collect();
    progress.sheet_done(name, rows.len());
    progress.finish();
    Workbook::new(vec![Sheet::new(name, rows)])
}

fn trim_trailing_empty(row: &mut Row) {
    while matches!(row.last(), Some(Cell::Empty)) {
        row.pop();
    }
}
