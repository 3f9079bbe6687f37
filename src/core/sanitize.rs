// src/core/sanitize.rs

/// Collapse every whitespace run to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop all whitespace, keeping every other character in order.
pub fn strip_ws(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Trimmed, uppercased copy. Unicode-aware (`ñ` → `Ñ`).
pub fn upper_trim(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Uppercase with all whitespace removed; the form header keywords are tested on.
pub fn compact_upper(s: &str) -> String {
    strip_ws(s).to_uppercase()
}
