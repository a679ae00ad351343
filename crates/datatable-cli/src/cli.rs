//! Command-line interface for `datatable`.
//!
//! # Examples
//!
//! ```bash
//! # Render page 1 of a data set with the columns from a config file
//! datatable --config table.toml --data people.json
//!
//! # Search, sort descending, and print the page as JSON
//! datatable --config table.toml --data people.json --search york --sort lastName --desc --json
//!
//! # Ad-hoc columns, no config file
//! datatable --data people.json --column firstName:First --column city
//!
//! # Browse interactively
//! datatable --config table.toml --data people.json --interactive
//! ```

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use clap::builder::FalseyValueParser;
use datatable::column::Column;

/// Render a searchable, sortable, paginated table from JSON records.
#[derive(Parser, Debug, Clone)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI flags are naturally bools"
)]
#[command(name = "datatable", author, version, about)]
pub struct Cli {
    /// Table configuration file (`.toml` or `.json`)
    #[arg(long, short = 'c', env = "DATATABLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file holding the array of records
    ///
    /// Replaces any `data` given in the configuration file
    #[arg(long, short = 'd')]
    pub data: Option<PathBuf>,

    /// Column to render, as PROPERTY or PROPERTY:TITLE (repeatable)
    ///
    /// Replaces the configured columns when given
    #[arg(long = "column", value_name = "PROP[:TITLE]", value_parser = parse_column)]
    pub columns: Vec<Column>,

    /// Initial search term
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Property to sort by
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to show (1-indexed, clamped to the last page)
    #[arg(long, short = 'p')]
    pub page: Option<usize>,

    /// Rows per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<NonZeroUsize>,

    /// TOML stylesheet
    #[arg(long, env = "DATATABLE_STYLE")]
    pub style: Option<PathBuf>,

    /// Force color output off
    ///
    /// Respects `NO_COLOR` environment variable
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Print the current page as JSON instead of a table
    #[arg(long, conflicts_with = "interactive")]
    pub json: bool,

    /// Browse the table interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Default log filter for the verbosity count.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Parses `PROP[:TITLE]`. The title defaults to the property name.
fn parse_column(s: &str) -> Result<Column, String> {
    let (property, title) = match s.split_once(':') {
        Some((property, title)) => (property.trim(), title.trim()),
        None => (s.trim(), s.trim()),
    };
    if property.is_empty() {
        return Err("column property must not be empty".to_string());
    }
    if title.is_empty() {
        return Err(format!("column `{property}` has an empty title"));
    }
    Ok(Column::new(title, property))
}
