// src/engine/types.rs
//
// Heuristic pattern tables for bulletin headers. Everything here is plain
// data; the classifier and reconstructor only walk these tables, so adding
// a keyword never touches control flow.

/// Ordered keyword list. Matching is plain substring on already-uppercased text.
#[derive(Clone, Copy, Debug)]
pub struct KeywordTable {
    words: &'static [&'static str],
}

impl KeywordTable {
    pub const fn new(words: &'static [&'static str]) -> Self { Self { words } }

    pub fn words(&self) -> &'static [&'static str] { self.words }

    /// True if any keyword occurs inside `text`.
    pub fn any_in(&self, text: &str) -> bool {
        self.words.iter().any(|w| text.contains(w))
    }
}

/// Court/organizational vocabulary, ordinals included.
pub const ORG_KEYWORDS: KeywordTable = KeywordTable::new(&[
    "JUZGADO", "TRIBUNAL", "CORTE", "CONSEJO", "SUPREMA", "SUPERIOR", "SALA",
    "CIRCUITO", "MUNICIPAL", "FAMILIA", "LABORAL", "ADMINISTRATIVO", "CIVIL",
    "PENAL", "PROMISCUO", "EJECUCION", "EJECUCIÓN", "PEQUEÑAS", "CAUSAS",
    "COMPETENCIA", "MULTIPLE", "MÚLTIPLE", "DISTRITO", "JUDICIAL",
    "PRIMERO", "SEGUNDO", "TERCERO", "CUARTO", "QUINTO", "SEXTO",
    "SEPTIMO", "SÉPTIMO", "OCTAVO", "NOVENO", "DECIMO", "DÉCIMO",
]);

/// Short joiners. Part of the reconstruction vocabulary, never header evidence.
pub const CONNECTORS: KeywordTable = KeywordTable::new(&[
    "DE", "DEL", "EL", "LA", "LOS", "LAS", "Y", "EN",
]);

pub const MONTHS: KeywordTable = KeywordTable::new(&[
    "ENERO", "FEBRERO", "MARZO", "ABRIL", "MAYO", "JUNIO", "JULIO", "AGOSTO",
    "SEPTIEMBRE", "SETIEMBRE", "OCTUBRE", "NOVIEMBRE", "DICIEMBRE",
]);

/// "Not yet posted" markers that announce a state notice without a date.
pub const PENDING_MARKERS: KeywordTable = KeywordTable::new(&[
    "SIN PUBLICAR", "NO PUBLICADO",
]);

/// Header classification rules.
#[derive(Clone, Copy, Debug)]
pub struct HeaderRules {
    pub org_keywords: KeywordTable,
    /// Compacted text must be strictly longer than this to count as a court header.
    pub org_min_len: usize,
    pub state_prefix: &'static str,
    pub months: KeywordTable,
    pub pending_markers: KeywordTable,
}

pub const HEADER_RULES: HeaderRules = HeaderRules {
    org_keywords: ORG_KEYWORDS,
    org_min_len: 5,
    state_prefix: "ESTADO",
    months: MONTHS,
    pending_markers: PENDING_MARKERS,
};

/// Letter-spacing repair rules.
#[derive(Clone, Copy, Debug)]
pub struct ReconstructRules {
    /// Two or more whitespace characters in a row: words separated by wide gaps.
    pub wide_gap: &'static str,
    /// A lone uppercase letter with whitespace on both sides.
    pub spaced_letter: &'static str,
    /// The whole text is single letters joined by single spaces.
    pub letters_only: &'static str,
    /// Words that get split back out of a compressed token, longest first.
    pub vocabulary: &'static [KeywordTable],
    /// Only words strictly longer than this are reinserted.
    pub min_reinsert_len: usize,
    /// Prefix abbreviations and their expansion.
    pub abbreviations: &'static [(&'static str, &'static str)],
    /// Prepended to labels that start with a digit.
    pub numbered_prefix: &'static str,
}

pub const RECONSTRUCT_RULES: ReconstructRules = ReconstructRules {
    wide_gap: r"\s{2,}",
    spaced_letter: r"\s\p{Lu}\s",
    letters_only: r"^(?:\p{Lu} )+\p{Lu}$",
    vocabulary: &[ORG_KEYWORDS, CONNECTORS],
    min_reinsert_len: 3,
    abbreviations: &[("JDO.", "JUZGADO"), ("J. ", "JUZGADO")],
    numbered_prefix: "JUZGADO",
};
