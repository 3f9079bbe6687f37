// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
    /// Shown in the "Organizational unit" column when a row has no court context.
    pub org_placeholder: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
            org_placeholder: s!(PLACEHOLDER),
        }
    }
}

impl ExportOptions {
    /// Final file path: `<dir>/<stem>.<ext>`. A user-typed extension wins;
    /// otherwise the format decides.
    pub fn out_path(&self) -> PathBuf {
        let mut file_name = self.out_path.file_stem.clone();
        file_name.push(".");
        match &self.out_path.ext {
            Some(ext) => file_name.push(ext),
            None => file_name.push(self.format.ext()),
        }
        self.out_path.dir.join(file_name)
    }

    /// Parse GUI/CLI text into dir + stem (+ explicit extension, if any).
    /// A trailing separator or an existing directory keeps the current stem.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }

        let p = Path::new(s);
        if s.ends_with('/') || s.ends_with('\\') || p.is_dir() {
            self.out_path.dir = p.to_path_buf();
            return;
        }

        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    /// True while the user hasn't picked a path of their own.
    pub fn is_default_path(&self) -> bool {
        self.out_path == OutputPath::default()
    }

    pub fn delimiter(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
