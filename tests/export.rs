// tests/export.rs
//
// Report projection, CSV/TSV text, output path logic and file writes.
//
use std::fs;
use std::path::{Path, PathBuf};

use bulletin_scan::config::options::{ExportFormat, ExportOptions};
use bulletin_scan::csv::{parse_rows, to_export_string};
use bulletin_scan::data::EnrichedRow;
use bulletin_scan::error::ExportError;
use bulletin_scan::file::write_report;
use bulletin_scan::progress::NullProgress;
use bulletin_scan::report::{project, project_row, REPORT_HEADERS};
use bulletin_scan::session::Session;
use bulletin_scan::workbook::{row, Cell, Sheet, Workbook};

fn tmp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bulletin_scan_{}_{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn norm(p: &Path) -> PathBuf { p.components().collect() }

fn enriched(cells: Vec<Cell>, org: &str, state: &str) -> EnrichedRow {
    EnrichedRow::new("Hoja1", 4, &cells, org, state)
}

#[test]
fn report_columns_are_fixed() {
    assert_eq!(REPORT_HEADERS, [
        "Organizational unit", "State/Date", "Case ID", "Party 1", "Party 2", "Status/Action", "Sheet",
    ]);

    let r = enriched(
        row(["001", "Nancy Gómez", "Banco", "Auto", "extra", "more"]),
        "JUZGADO SEXTO CIVIL MUNICIPAL",
        "ESTADO 3 DE MARZO",
    );
    assert_eq!(project_row(&r, "-"), vec![
        "JUZGADO SEXTO CIVIL MUNICIPAL", "ESTADO 3 DE MARZO", "001", "Nancy Gómez", "Banco", "Auto", "Hoja1",
    ]);
    assert_eq!(r.extra_cells(), "extra | more");
}

#[test]
fn missing_values_get_placeholders() {
    let r = enriched(vec![Cell::Number(7.0), Cell::Empty, Cell::from("  ")], "", "");
    assert_eq!(project_row(&r, "(sin juzgado)"), vec![
        "(sin juzgado)", "-", "7", "-", "  ", "-", "Hoja1",
    ]);

    let table = project([&r], "-");
    assert_eq!(table.headers.len(), 7);
    assert_eq!(table.rows[0][0], "-");
}

#[test]
fn export_text_quotes_when_needed() {
    let r = enriched(row(["001", "Gómez, Nancy", "say \"hi\"", "Auto"]), "JUZGADO", "");
    let table = project([&r], "-");

    let csv = to_export_string(&table, true, ',');
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Organizational unit,State/Date,Case ID,Party 1,Party 2,Status/Action,Sheet"));
    assert_eq!(lines.next(), Some("JUZGADO,-,001,\"Gómez, Nancy\",\"say \"\"hi\"\"\",Auto,Hoja1"));
    assert_eq!(lines.next(), None);

    // and it reads back to the same fields
    let parsed = parse_rows(&csv, ',');
    assert_eq!(parsed[1][3], "Gómez, Nancy");
    assert_eq!(parsed[1][4], "say \"hi\"");

    let tsv = to_export_string(&table, false, '\t');
    assert_eq!(tsv, "JUZGADO\t-\t001\tGómez, Nancy\t\"say \"\"hi\"\"\"\tAuto\tHoja1\n");
}

#[test]
fn default_path_follows_format() {
    let mut opts = ExportOptions::default();
    assert!(opts.is_default_path());
    assert_eq!(norm(&opts.out_path()), norm(Path::new("out/selection.csv")));

    opts.format = ExportFormat::Tsv;
    assert_eq!(norm(&opts.out_path()), norm(Path::new("out/selection.tsv")));
}

#[test]
fn typed_extension_wins_over_format() {
    let mut opts = ExportOptions::default();
    opts.set_path("reports/feb.txt");
    opts.format = ExportFormat::Tsv;
    assert_eq!(norm(&opts.out_path()), norm(Path::new("reports/feb.txt")));
    assert!(!opts.is_default_path());

    opts.set_path("reports/feb");
    assert_eq!(norm(&opts.out_path()), norm(Path::new("reports/feb.tsv")));

    // trailing separator: directory only, stem kept
    opts.set_path("archive/");
    assert_eq!(norm(&opts.out_path()), norm(Path::new("archive/feb.tsv")));

    opts.set_path("   ");
    assert!(opts.is_default_path());
}

#[test]
fn nothing_selected_writes_nothing() {
    let dir = tmp_dir("empty");
    let mut opts = ExportOptions::default();
    opts.set_path(&dir.join("sel.csv").to_string_lossy());

    let table = project(std::iter::empty::<&EnrichedRow>(), "-");
    assert!(matches!(write_report(&opts, &table), Ok(None)));
    assert!(!dir.exists());

    let session = Session::new();
    assert!(matches!(session.export(&opts), Ok(None)));
    assert!(!dir.exists());
}

#[test]
fn session_export_writes_selection_in_pick_order() {
    let dir = tmp_dir("write");
    let wb = Workbook::new(vec![Sheet::new("Hoja1", vec![
        row(["JUZGADO SEXTO CIVIL MUNICIPAL"]),
        row(["001", "Nancy Gómez", "Banco", "Auto"]),
        row(["002", "Luis Pérez", "Nancy Ruiz", "Auto"]),
    ])]);
    let mut s = Session::new();
    s.replace_workbook(wb, "test");
    s.search("nancy", &mut NullProgress);
    s.toggle_result(1);
    s.toggle_result(0);

    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;
    opts.set_path(&dir.join("nested").join("sel").to_string_lossy());

    let path = s.export(&opts).expect("export").expect("a file");
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("tsv"));

    let text = fs::read_to_string(&path).unwrap();
    let rows = parse_rows(&text, '\t');
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][2], "002");
    assert_eq!(rows[1][2], "001");
    assert_eq!(rows[1][0], "JUZGADO SEXTO CIVIL MUNICIPAL");

    // overwrite, now with headers
    opts.include_headers = true;
    s.export(&opts).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("Organizational unit\t"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn directory_in_place_of_file_is_an_error() {
    let dir = tmp_dir("notafile");
    let target = dir.join("taken.csv");

    let mut opts = ExportOptions::default();
    opts.set_path(&target.to_string_lossy());
    // a directory shows up at the file path after the path was chosen
    fs::create_dir_all(&target).unwrap();

    let r = enriched(row(["001", "x"]), "", "");
    let res = write_report(&opts, &project([&r], "-"));
    assert!(matches!(res, Err(ExportError::NotAFile(_))), "{res:?}");

    let _ = fs::remove_dir_all(&dir);
}
