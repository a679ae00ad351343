#![forbid(unsafe_code)]

//! # Datatable CLI
//!
//! Renders a searchable, sortable, paginated table from JSON records.
//!
//! ## Usage
//!
//! ```bash
//! datatable --config table.toml --data people.json            # Print page 1
//! datatable --data people.json --column city --search york    # Ad-hoc columns
//! datatable --config table.toml --data people.json --json     # Page as JSON
//! datatable --config table.toml --data people.json -i         # Browse
//! ```

mod cli;
mod interactive;
mod load;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    let mut table = load::build_table(&cli)?;

    if cli.interactive {
        table = table.show_help(true);
        return interactive::run(&mut table);
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&table.snapshot())
            .context("failed to serialize page")?;
        println!("{json}");
    } else {
        println!("{}", table.view());
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
