// src/config/consts.rs

// Local debug log
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "selection";
pub const PLACEHOLDER: &str = "-";

// Display
pub const EXTRA_CELLS_SEP: &str = " | ";

// Identity key: "<sheet><sep><zero-based row>"
pub const ROW_KEY_SEP: &str = "-";
