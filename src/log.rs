// src/log.rs
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{fmt, fmt::writer::MakeWriterExt, prelude::*, EnvFilter};

// Re-exported so the logging macros resolve from any crate in the package.
pub use tracing;

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_FILE};

static INIT: OnceLock<()> = OnceLock::new();

/// Where log lines go besides the debug log file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    /// GUI: file only, the window has its own status line.
    FileOnly,
    /// CLI: file, plus warnings and errors on stderr.
    FileAndStderr,
}

/// Install the global subscriber. Safe to call more than once; only the
/// first call has any effect. Never fails: if the log file can't be opened
/// the file layer is simply left out.
pub fn init(sink: Sink) {
    INIT.get_or_init(|| install(sink));
}

fn install(sink: Sink) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let file_layer = open_log_file(Path::new(LOG_FILE)).map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
    });

    let stderr_layer = (sink == Sink::FileAndStderr).then(|| {
        fmt::layer()
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr.with_max_level(tracing::Level::WARN))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).ok()?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
