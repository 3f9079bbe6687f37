// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, WrapErr};

use crate::config::options::{AppOptions, ExportFormat};
use crate::csv::write_row;
use crate::data::EnrichedRow;
use crate::engine::propagate;
use crate::log::{self, Sink};
use crate::progress::Progress;
use crate::report;
use crate::session::Session;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f { Format::Csv => ExportFormat::Csv, Format::Tsv => ExportFormat::Tsv }
    }
}

/// Search a court bulletin workbook and export the rows you pick, with the
/// court and state notice each row falls under.
#[derive(Debug, Parser)]
#[command(name = "cli", version)]
pub struct Args {
    /// Workbook to load (xlsx, xlsm, xlsb, xls, ods, csv, tsv)
    pub workbook: PathBuf,

    /// Search term; repeat to run several searches in order
    #[arg(short = 's', long = "search", value_name = "TERM")]
    pub terms: Vec<String>,

    /// Add every row each search finds to the selection
    #[arg(short = 'a', long)]
    pub select_all: bool,

    /// Print each search's results to stdout (tab separated)
    #[arg(short, long)]
    pub list: bool,

    /// Print every data row with its court/state context, no search needed
    #[arg(long)]
    pub dump: bool,

    /// Export path (file); extension follows --format unless given
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Leave the column header line out of the export
    #[arg(long)]
    pub no_headers: bool,

    /// Per-sheet progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

struct CliProgress {
    verbose: bool,
}

impl Progress for CliProgress {
    fn sheet_done(&mut self, name: &str, rows: usize) {
        if self.verbose {
            eprintln!("  {name}: {rows}");
        }
    }
}

pub fn run() -> color_eyre::Result<()> {
    log::init(Sink::FileAndStderr);
    let args = Args::parse();

    let mut opts = AppOptions::default();
    opts.export.format = args.format.into();
    opts.export.include_headers = !args.no_headers;
    if let Some(out) = &args.out {
        opts.export.set_path(out);
    }

    let mut progress = CliProgress { verbose: args.verbose };
    let mut session = Session::new();
    session
        .load(&args.workbook, &mut progress)
        .wrap_err_with(|| format!("loading {}", args.workbook.display()))?;

    let wb = session.workbook().ok_or_else(|| eyre!("no workbook loaded"))?;
    eprintln!("Loaded {} sheet(s), {} row(s)", wb.sheets.len(), wb.row_count());

    if args.dump {
        let rows = propagate(wb);
        print_rows(&rows)?;
    }

    for term in &args.terms {
        let Some(hits) = session.search(term, &mut progress) else {
            eprintln!("Skipping blank search term {term:?}");
            continue;
        };
        eprintln!("{:?}: {} row(s)", session.term(), hits);

        if args.list {
            print_rows(session.results())?;
        }
        if args.select_all && !session.all_visible_selected() {
            session.select_all_visible();
        }
    }

    let table = report::project_selection(session.selection(), &opts.export);
    match crate::file::write_report(&opts.export, &table)? {
        Some(path) => eprintln!("Wrote {} row(s) to {}", table.row_count(), path.display()),
        None => eprintln!("Nothing selected; no file written"),
    }
    Ok(())
}

fn print_rows(rows: &[EnrichedRow]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for r in rows {
        let mut line = vec![r.key().to_string(), r.org_context.clone(), r.state_context.clone()];
        line.extend(r.cells.iter().map(|c| c.to_text().into_owned()));
        write_row(&mut out, &line, '\t')?;
    }
    out.flush()
}
