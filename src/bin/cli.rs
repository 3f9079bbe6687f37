// src/bin/cli.rs
use bulletin_scan::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
