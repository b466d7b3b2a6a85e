//! practice-sheet: Copperplate calligraphy practice sheets
//!
//! Writes a single page of guidelines to PDF or SVG.
//!
//! # Usage
//!
//! ```bash
//! # A4 with the default 3:2:3 ratio and a 55 degree slant
//! practice-sheet my_practice_sheet.pdf
//!
//! # ANSI Letter in inches
//! practice-sheet -u in -p 8.5 11 my_practice_sheet.pdf
//!
//! # Inspect the resolved geometry
//! practice-sheet --print-config -f my_practice_sheet.svg
//! ```

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use sheet_io::save_sheet;
use sheet_layout::layout_sheet;
use tracing::info;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    let params = cli.to_params();
    let config = params.resolve().context("Invalid sheet parameters")?;

    if cli.print_config {
        let json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize the configuration")?;
        println!("{json}");
    }

    let sheet = layout_sheet(&config).context("Failed to lay out the sheet")?;
    let format = save_sheet(&sheet, &params.output)
        .with_context(|| format!("Failed to write {}", params.output.display()))?;

    info!(
        output = %params.output.display(),
        format = format.extension(),
        line_sets = sheet.line_set_count,
        "Done"
    );
    Ok(())
}
