// tests/selection.rs
//
// Selection survives searches; only explicit actions change it.
//
use bulletin_scan::progress::NullProgress;
use bulletin_scan::selection::SelectionLedger;
use bulletin_scan::session::Session;
use bulletin_scan::workbook::{row, Sheet, Workbook};

fn session() -> Session {
    let wb = Workbook::new(vec![Sheet::new("Hoja1", vec![
        row(["JUZGADO SEXTO CIVIL MUNICIPAL"]),
        row(["001", "Nancy Gómez", "Banco", "Auto"]),
        row(["002", "Luis Pérez", "Nancy Ruiz", "Auto"]),
        row(["003", "Marta Díaz", "Pedro Gil", "Sentencia"]),
    ])]);
    let mut s = Session::new();
    s.replace_workbook(wb, "test");
    s
}

fn run(s: &mut Session, term: &str) -> Option<usize> {
    s.search(term, &mut NullProgress)
}

#[test]
fn selection_persists_across_searches() {
    let mut s = session();

    assert_eq!(run(&mut s, "nancy"), Some(2));
    assert_eq!(s.toggle_result(0), Some(true));

    assert_eq!(run(&mut s, "sentencia"), Some(1));
    assert!(!s.is_selected(&s.results()[0]));
    assert_eq!(s.selection().len(), 1);

    assert_eq!(run(&mut s, "nancy"), Some(2));
    assert!(s.is_selected(&s.results()[0]));
    assert!(!s.is_selected(&s.results()[1]));
}

#[test]
fn blank_terms_leave_results_alone() {
    let mut s = session();
    assert!(!s.has_searched());
    assert_eq!(run(&mut s, "   "), None);
    assert!(!s.has_searched());

    run(&mut s, "auto");
    assert_eq!(run(&mut s, ""), None);
    assert_eq!(s.results().len(), 2);
    assert_eq!(s.term(), "auto");
}

#[test]
fn single_character_terms_search() {
    let mut s = session();
    assert_eq!(run(&mut s, " 3 "), Some(1));
    assert_eq!(s.term(), "3");
    assert_eq!(s.results()[0].row_number, 4);
}

#[test]
fn search_without_workbook_is_a_no_op() {
    let mut s = Session::new();
    assert_eq!(run(&mut s, "nancy"), None);
    assert!(!s.has_searched());
}

#[test]
fn select_all_visible_toggles_only_visible_rows() {
    let mut s = session();

    run(&mut s, "sentencia");
    s.select_all_visible();
    assert_eq!(s.selection().len(), 1);

    run(&mut s, "nancy");
    assert!(!s.all_visible_selected());
    s.select_all_visible();
    assert!(s.all_visible_selected());
    assert_eq!(s.selection().len(), 3);

    // second call on the same view drops exactly those two
    s.select_all_visible();
    assert_eq!(s.selection().len(), 1);
    let keys: Vec<String> = s.selection().keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["Hoja1-3"]);
}

#[test]
fn select_all_visible_on_empty_results_does_nothing() {
    let mut s = session();
    run(&mut s, "nancy");
    s.toggle_result(1);

    run(&mut s, "no such thing");
    assert!(s.results().is_empty());
    assert!(!s.all_visible_selected());
    s.select_all_visible();
    assert_eq!(s.selection().len(), 1);

    let mut ledger = SelectionLedger::new();
    ledger.select_all_visible(&[]);
    assert!(ledger.is_empty());
}

#[test]
fn ledger_keeps_pick_order_and_distinct_keys() {
    let mut s = session();
    run(&mut s, "auto");
    s.toggle_result(1);
    s.toggle_result(0);
    s.select_all_visible(); // both already in; this removes them
    assert!(s.selection().is_empty());

    s.toggle_result(1);
    s.toggle_result(0);
    s.select_all_visible(); // toggles off again
    s.toggle_result(1);
    s.toggle_result(0);
    let order: Vec<u32> = s.selection().rows().map(|r| r.row_number as u32).collect();
    assert_eq!(order, vec![3, 2]);

    assert_eq!(s.toggle_result(99), None);
    assert_eq!(s.selection().len(), 2);
}

#[test]
fn clear_and_reload_empty_the_ledger() {
    let mut s = session();
    run(&mut s, "auto");
    s.select_all_visible();
    s.clear_selection();
    assert!(s.selection().is_empty());

    run(&mut s, "auto");
    s.select_all_visible();
    assert_eq!(s.selection().len(), 2);

    let again = Workbook::new(vec![Sheet::new("Hoja1", vec![row(["001", "x"])])]);
    s.replace_workbook(again, "other");
    assert!(s.selection().is_empty());
    assert!(s.results().is_empty());
    assert!(!s.has_searched());
}
