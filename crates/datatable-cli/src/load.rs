//! Builds a [`DataTable`] from files and flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use datatable::config::RawConfig;
use datatable::record::load_records;
use datatable::style::{StyleSheet, Styles};
use datatable::table::DataTable;

use crate::cli::Cli;

/// Reads a configuration file, choosing the format by extension.
pub fn read_config(path: &Path) -> Result<RawConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let raw = match ext.as_deref() {
        Some("toml") => RawConfig::from_toml_str(&text),
        Some("json") => RawConfig::from_json_str(&text),
        _ => bail!(
            "unsupported config format for {} (expected .toml or .json)",
            path.display()
        ),
    };
    raw.with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Resolves the styles: `--no-color` wins over a stylesheet.
pub fn resolve_styles(cli: &Cli) -> Result<Styles> {
    if cli.no_color {
        return Ok(Styles::plain());
    }
    let Some(path) = &cli.style else {
        return Ok(Styles::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read stylesheet {}", path.display()))?;
    StyleSheet::from_toml_str(&text)
        .and_then(StyleSheet::into_styles)
        .with_context(|| format!("invalid stylesheet {}", path.display()))
}

/// Builds the table and applies the state flags.
///
/// Flags apply as search, page size, sort, then page, so an explicit
/// `--page` survives the resets the earlier steps cause.
pub fn build_table(cli: &Cli) -> Result<DataTable> {
    let mut raw = match &cli.config {
        Some(path) => read_config(path)?,
        None => RawConfig::default(),
    };

    if let Some(path) = &cli.data {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read data file {}", path.display()))?;
        let records = load_records(&text)
            .with_context(|| format!("failed to load records from {}", path.display()))?;
        tracing::info!(records = records.len(), path = %path.display(), "Loaded data");
        raw.merge_data(records);
    }

    if !cli.columns.is_empty() {
        raw.merge_columns(cli.columns.clone());
    }

    let config = raw.validate().context("invalid table configuration")?;
    let mut table = DataTable::new(config).with_styles(resolve_styles(cli)?);

    if let Some(term) = &cli.search {
        table.set_search(term);
    }
    if let Some(size) = cli.page_size {
        table.set_page_size(size);
    }
    if let Some(key) = &cli.sort {
        table.sort_by(key);
        if cli.desc {
            table.sort_by(key);
        }
    }
    if let Some(page) = cli.page {
        table.set_page(page);
    }

    tracing::debug!(
        filtered = table.filtered_len(),
        page = table.state().page(),
        "Applied command-line state"
    );
    Ok(table)
}
