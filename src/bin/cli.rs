// src/bin/cli.rs
use color_eyre::eyre::{Result, eyre};
use screener_dash::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run_from_args().map_err(|e| eyre!("{e}"))
}
