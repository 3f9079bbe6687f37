// src/engine/reconstruct.rs
//
// Repair court header labels mangled by letter-spacing in the source sheet.
//
// Three strategies, first match wins. They are picked on the trimmed text, so
// leading/trailing padding never counts as a wide gap.
//   1. Wide gaps ("J U Z G A D O   S E X T O"): split on runs of 2+ spaces,
//      squeeze each chunk, join chunks with one space.
//   2. Spaced letters ("S E X T O D E F A M I L I A"): squeeze everything
//      into one token, then pad known vocabulary words back out with spaces,
//      longest word first.
//   3. Anything else: the trimmed text as-is.
//
// Strategy 2 only reinserts words longer than three letters. Connectors like
// DE/DEL/LA are left fused to whatever non-keyword sits next to them
// ("CIRCUITODEBOGOTA" → "CIRCUITO DEBOGOTA"); splitting them out would cut
// through longer words that merely contain them.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::sanitize::{normalize_ws, strip_ws};
use crate::error::ReconstructionFailure;

use super::types::{ReconstructRules, RECONSTRUCT_RULES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    WideGaps,
    SpacedLetters,
    Fallback,
}

struct Patterns {
    wide_gap: Regex,
    spaced_letter: Regex,
    letters_only: Regex,
    /// Reinsertable vocabulary, longest first.
    words: Vec<&'static str>,
}

impl Patterns {
    fn build(rules: &ReconstructRules) -> Result<Self, regex::Error> {
        let mut words: Vec<&'static str> = rules
            .vocabulary
            .iter()
            .flat_map(|t| t.words().iter().copied())
            .filter(|w| w.chars().count() > rules.min_reinsert_len)
            .collect();
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        words.dedup();

        Ok(Self {
            wide_gap: Regex::new(rules.wide_gap)?,
            spaced_letter: Regex::new(rules.spaced_letter)?,
            letters_only: Regex::new(rules.letters_only)?,
            words,
        })
    }
}

static PATTERNS: OnceLock<Result<Patterns, regex::Error>> = OnceLock::new();

fn patterns() -> Result<&'static Patterns, ReconstructionFailure> {
    PATTERNS
        .get_or_init(|| Patterns::build(&RECONSTRUCT_RULES))
        .as_ref()
        .map_err(|e| ReconstructionFailure::Pattern(e.clone()))
}

/// Best-effort label for a court header. Never fails: on any reconstruction
/// error the raw trimmed text comes back.
pub fn reconstruct(raw: &str) -> String {
    or_raw(raw, try_reconstruct(raw))
}

/// `reconstruct` against a custom rule table.
pub fn reconstruct_with(rules: &ReconstructRules, raw: &str) -> String {
    or_raw(raw, try_reconstruct_with(rules, raw))
}

pub fn try_reconstruct(raw: &str) -> Result<String, ReconstructionFailure> {
    Ok(apply(patterns()?, &RECONSTRUCT_RULES, raw))
}

/// Builds the patterns from `rules` on every call; the default table is cached.
pub fn try_reconstruct_with(
    rules: &ReconstructRules,
    raw: &str,
) -> Result<String, ReconstructionFailure> {
    let p = Patterns::build(rules)?;
    Ok(apply(&p, rules, raw))
}

fn or_raw(raw: &str, res: Result<String, ReconstructionFailure>) -> String {
    match res {
        Ok(label) => label,
        Err(e) => {
            logd!("Reconstruct: falling back to raw text for {:?}: {}", raw, e);
            s!(raw.trim())
        }
    }
}

fn apply(p: &Patterns, rules: &ReconstructRules, raw: &str) -> String {
    let text = raw.trim();

    let label = match pick(p, text) {
        Strategy::WideGaps => join_wide_gaps(p, text),
        Strategy::SpacedLetters => split_vocabulary(p, text),
        Strategy::Fallback => s!(text),
    };

    if label.is_empty() {
        return label;
    }
    post_process(rules, &label)
}

/// Which strategy `raw` would go through.
pub fn strategy_for(raw: &str) -> Result<Strategy, ReconstructionFailure> {
    Ok(pick(patterns()?, raw.trim()))
}

fn pick(p: &Patterns, text: &str) -> Strategy {
    if p.wide_gap.is_match(text) {
        Strategy::WideGaps
    } else if p.spaced_letter.is_match(text) || p.letters_only.is_match(text) {
        Strategy::SpacedLetters
    } else {
        Strategy::Fallback
    }
}

fn join_wide_gaps(p: &Patterns, text: &str) -> String {
    p.wide_gap
        .split(text)
        .map(strip_ws)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_vocabulary(p: &Patterns, text: &str) -> String {
    let mut token = strip_ws(text).to_uppercase();
    for word in &p.words {
        if token.contains(word) {
            token = token.replace(word, &join!(" ", word, " "));
        }
    }
    normalize_ws(&token)
}

fn post_process(rules: &ReconstructRules, label: &str) -> String {
    let mut out = label.to_uppercase();

    for &(abbr, full) in rules.abbreviations {
        if let Some(rest) = out.strip_prefix(abbr) {
            out = normalize_ws(&join!(full, " ", rest));
            break;
        }
    }

    if out.starts_with(|c: char| c.is_ascii_digit()) && !out.starts_with(rules.numbered_prefix) {
        out = join!(rules.numbered_prefix, " ", &out);
    }
    out
}
