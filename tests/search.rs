// tests/search.rs
use bulletin_scan::engine::search::{row_matches, row_text};
use bulletin_scan::engine::{accept_term, search, search_with_progress};
use bulletin_scan::progress::Progress;
use bulletin_scan::workbook::{row, Cell, Sheet, Workbook};

fn bulletin() -> Workbook {
    Workbook::new(vec![
        Sheet::new("Civil", vec![
            row(["JUZGADO SEXTO CIVIL MUNICIPAL"]),
            row(["ESTADO 18 DEL 10 FEBRERO 2026"]),
            row(["2025-00123", "Banco Agrario", "Nancy Gómez", "Auto admite"]),
            row(["2025-00124", "Luis Pérez", "Marta Ruiz", "Sentencia"]),
        ]),
        Sheet::new("Familia", vec![
            row(["JUZGADO PRIMERO DE FAMILIA"]),
            row(["2025-00900", "NANCY GOMEZ", "Pedro Díaz", "Traslado"]),
        ]),
    ])
}

#[test]
fn case_insensitive_in_any_column() {
    let wb = bulletin();
    let hits = search(&wb, "nancy");

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].sheet, "Civil");
    assert_eq!(hits[0].row_number, 3);
    assert_eq!(hits[0].org_context, "JUZGADO SEXTO CIVIL MUNICIPAL");
    assert_eq!(hits[0].state_context, "ESTADO 18 DEL 10 FEBRERO 2026");
    assert_eq!(hits[1].sheet, "Familia");
    assert_eq!(hits[1].org_context, "JUZGADO PRIMERO DE FAMILIA");
    assert_eq!(hits[1].state_context, "");
}

#[test]
fn substring_not_token() {
    let wb = bulletin();
    assert_eq!(search(&wb, "gómez").len(), 1);
    assert_eq!(search(&wb, "00124").len(), 1);
    assert_eq!(search(&wb, "  SENTENCIA ").len(), 1);
    assert!(search(&wb, "zzz").is_empty());
}

#[test]
fn term_can_span_adjacent_cells() {
    // cells are joined with a single space before matching
    let wb = bulletin();
    let hits = search(&wb, "luis pérez marta");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].row_number, 4);
}

#[test]
fn matching_header_rows_carry_previous_context() {
    let wb = bulletin();
    let hits = search(&wb, "juzgado sexto");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].row_number, 1);
    assert_eq!(hits[0].org_context, "");

    let hits = search(&wb, "febrero");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].org_context, "JUZGADO SEXTO CIVIL MUNICIPAL");
    assert_eq!(hits[0].state_context, "");
}

#[test]
fn only_blank_terms_are_rejected() {
    assert_eq!(accept_term("  x "), Some("x"));
    assert_eq!(accept_term("ñ"), Some("ñ"));
    assert_eq!(accept_term(" \t "), None);
    assert_eq!(accept_term(""), None);
}

#[test]
fn numbers_and_empties_flatten_to_text() {
    let r = vec![Cell::from("a"), Cell::Empty, Cell::Number(12.0), Cell::from("B")];
    assert_eq!(row_text(&r), "a  12 b");
    assert!(row_matches(&r, "12 b"));
}

#[derive(Default)]
struct Counting {
    begun: usize,
    sheets: Vec<(String, usize)>,
    finished: bool,
}

impl Progress for Counting {
    fn begin(&mut self, sheets: usize) { self.begun = sheets; }
    fn sheet_done(&mut self, name: &str, rows: usize) { self.sheets.push((name.to_string(), rows)); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn progress_reports_hits_per_sheet() {
    let wb = bulletin();
    let mut prog = Counting::default();
    let hits = search_with_progress(&wb, "2025", &mut prog);

    assert_eq!(hits.len(), 3);
    assert_eq!(prog.begun, 2);
    assert_eq!(prog.sheets, vec![("Civil".to_string(), 2), ("Familia".to_string(), 1)]);
    assert!(prog.finished);
}
