//! Table configuration.
//!
//! Configuration comes in two layers:
//!
//! - [`RawConfig`] mirrors what a host supplies (a TOML/JSON file, or the
//!   builder). Every field is optional so that problems can be reported by
//!   name instead of surfacing as opaque parse errors.
//! - [`TableConfig`] is the validated form. Defaults are resolved once,
//!   here, and the rest of the crate never falls back on its own.
//!
//! # Example
//!
//! ```rust
//! use datatable::column::Column;
//! use datatable::config::TableConfig;
//! use datatable::record::Record;
//!
//! let config = TableConfig::builder()
//!     .data(vec![Record::new().with("name", "Alice")])
//!     .columns(vec![Column::new("Name", "name")])
//!     .entries_options(&[5, 10])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.title, "Data Table");
//! assert_eq!(config.page_size.get(), 5);
//! ```

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::{ConfigError, Result};
use crate::record::Record;

/// Default heading text.
pub const DEFAULT_TITLE: &str = "Data Table";
/// Default text shown when no record matches.
pub const DEFAULT_NO_DATA_TEXT: &str = "No data found.";
/// Default glyph rendered for absent values.
pub const DEFAULT_PLACEHOLDER: &str = "-";
/// Page size used when neither `page_size` nor `entries_options` is given.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// A column descriptor as supplied, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawColumn {
    /// Header label.
    #[serde(default)]
    pub title: Option<String>,
    /// Record field name.
    #[serde(default)]
    pub property: Option<String>,
    /// Optional fixed width.
    #[serde(default)]
    pub width: Option<usize>,
}

impl From<Column> for RawColumn {
    fn from(col: Column) -> Self {
        Self {
            title: Some(col.title),
            property: Some(col.property),
            width: col.width,
        }
    }
}

/// Unvalidated table configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Source rows.
    pub data: Option<Vec<Record>>,
    /// Columns to render, in order.
    pub columns: Option<Vec<RawColumn>>,
    /// Heading text.
    pub title: Option<String>,
    /// Text shown when the filtered set is empty.
    #[serde(alias = "noDataText")]
    pub no_data_text: Option<String>,
    /// Page sizes offered to the user.
    #[serde(alias = "entriesOptions")]
    pub entries_options: Option<Vec<i64>>,
    /// Initial page size.
    #[serde(alias = "pageSize")]
    pub page_size: Option<i64>,
    /// Glyph rendered for absent values.
    pub placeholder: Option<String>,
}

impl RawConfig {
    /// Parses a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`](crate::error::Error::Toml) on malformed input.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::error::Error::Json) on malformed input.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Replaces the data set.
    pub fn merge_data(&mut self, records: Vec<Record>) {
        self.data = Some(records);
    }

    /// Replaces the column set.
    pub fn merge_columns(&mut self, columns: Vec<Column>) {
        self.columns = Some(columns.into_iter().map(RawColumn::from).collect());
    }

    /// Validates the configuration and resolves defaults.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, naming the offending field.
    pub fn validate(self) -> Result<TableConfig, ConfigError> {
        let data = self
            .data
            .ok_or(ConfigError::MissingField { field: "data" })?;
        let raw_columns = self
            .columns
            .ok_or(ConfigError::MissingField { field: "columns" })?;
        if raw_columns.is_empty() {
            return Err(ConfigError::EmptyColumns);
        }

        let mut columns = Vec::with_capacity(raw_columns.len());
        for (index, raw) in raw_columns.into_iter().enumerate() {
            let property = non_empty(raw.property)
                .ok_or(ConfigError::ColumnMissingProperty { index })?;
            let title =
                non_empty(raw.title).ok_or(ConfigError::ColumnMissingTitle { index })?;
            columns.push(Column {
                title,
                property,
                width: raw.width,
            });
        }

        let mut entries_options = Vec::new();
        for (index, value) in self.entries_options.unwrap_or_default().into_iter().enumerate() {
            let option = positive(value)
                .ok_or(ConfigError::InvalidEntriesOption { index, value })?;
            entries_options.push(option);
        }

        let page_size = match self.page_size {
            Some(value) => positive(value).ok_or(ConfigError::InvalidPageSize { value })?,
            None => entries_options.first().copied().unwrap_or(DEFAULT_PAGE_SIZE),
        };

        Ok(TableConfig {
            data,
            columns,
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            no_data_text: self
                .no_data_text
                .unwrap_or_else(|| DEFAULT_NO_DATA_TEXT.to_string()),
            entries_options,
            page_size,
            placeholder: self
                .placeholder
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
        })
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

fn positive(value: i64) -> Option<NonZeroUsize> {
    usize::try_from(value).ok().and_then(NonZeroUsize::new)
}

/// Validated, immutable table configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Source rows.
    pub data: Vec<Record>,
    /// Columns to render, in order.
    pub columns: Vec<Column>,
    /// Heading text.
    pub title: String,
    /// Text shown when the filtered set is empty.
    pub no_data_text: String,
    /// Page sizes offered to the user. Empty hides the selector.
    pub entries_options: Vec<NonZeroUsize>,
    /// Initial page size.
    pub page_size: NonZeroUsize,
    /// Glyph rendered for absent values.
    pub placeholder: String,
}

impl TableConfig {
    /// Starts building a configuration.
    #[must_use]
    pub fn builder() -> TableConfigBuilder {
        TableConfigBuilder::default()
    }
}

/// Builder for [`TableConfig`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct TableConfigBuilder {
    raw: RawConfig,
}

impl TableConfigBuilder {
    /// Sets the source rows.
    #[must_use]
    pub fn data(mut self, data: Vec<Record>) -> Self {
        self.raw.data = Some(data);
        self
    }

    /// Sets the columns.
    #[must_use]
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.raw.merge_columns(columns);
        self
    }

    /// Sets the heading text.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.raw.title = Some(title.into());
        self
    }

    /// Sets the text shown when nothing matches.
    #[must_use]
    pub fn no_data_text(mut self, text: impl Into<String>) -> Self {
        self.raw.no_data_text = Some(text.into());
        self
    }

    /// Sets the selectable page sizes.
    #[must_use]
    pub fn entries_options(mut self, options: &[i64]) -> Self {
        self.raw.entries_options = Some(options.to_vec());
        self
    }

    /// Sets the initial page size.
    #[must_use]
    pub fn page_size(mut self, size: i64) -> Self {
        self.raw.page_size = Some(size);
        self
    }

    /// Sets the placeholder glyph for absent values.
    #[must_use]
    pub fn placeholder(mut self, glyph: impl Into<String>) -> Self {
        self.raw.placeholder = Some(glyph.into());
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// See [`RawConfig::validate`].
    pub fn build(self) -> Result<TableConfig, ConfigError> {
        self.raw.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> TableConfigBuilder {
        TableConfig::builder()
            .data(vec![Record::new().with("name", "Alice")])
            .columns(vec![Column::new("Name", "name")])
    }

    #[test]
    fn test_defaults() {
        let config = minimal().build().unwrap();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.no_data_text, DEFAULT_NO_DATA_TEXT);
        assert!(config.entries_options.is_empty());
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.placeholder, "-");
    }

    #[test]
    fn test_page_size_defaults_to_first_entries_option() {
        let config = minimal().entries_options(&[25, 50]).build().unwrap();
        assert_eq!(config.page_size.get(), 25);

        let config = minimal().entries_options(&[25, 50]).page_size(7).build().unwrap();
        assert_eq!(config.page_size.get(), 7);
    }

    #[test]
    fn test_missing_data() {
        let err = TableConfig::builder()
            .columns(vec![Column::new("Name", "name")])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingField { field: "data" });
    }

    #[test]
    fn test_missing_columns() {
        let err = TableConfig::builder().data(Vec::new()).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingField { field: "columns" });

        let err = TableConfig::builder()
            .data(Vec::new())
            .columns(Vec::new())
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyColumns);
    }

    #[test]
    fn test_column_missing_property_or_title() {
        let err = minimal()
            .columns(vec![Column::new("Name", "name"), Column::new("City", "")])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ColumnMissingProperty { index: 1 });

        let err = minimal()
            .columns(vec![Column::new("  ", "name")])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ColumnMissingTitle { index: 0 });
    }

    #[test]
    fn test_non_positive_page_size_rejected() {
        assert_eq!(
            minimal().page_size(0).build().unwrap_err(),
            ConfigError::InvalidPageSize { value: 0 }
        );
        assert_eq!(
            minimal().page_size(-3).build().unwrap_err(),
            ConfigError::InvalidPageSize { value: -3 }
        );
    }

    #[test]
    fn test_non_positive_entries_option_rejected() {
        let err = minimal().entries_options(&[5, 0, 10]).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidEntriesOption { index: 1, value: 0 });
    }

    #[test]
    fn test_from_toml() {
        let raw = RawConfig::from_toml_str(
            r#"
title = "People"
no_data_text = "Nobody here."
entries_options = [5, 10]

[[columns]]
title = "First Name"
property = "firstName"

[[columns]]
title = "City"
property = "city"
width = 12
"#,
        )
        .unwrap();

        assert!(raw.data.is_none());
        let mut raw = raw;
        raw.merge_data(vec![Record::new().with("firstName", "Ada")]);
        let config = raw.validate().unwrap();

        assert_eq!(config.title, "People");
        assert_eq!(config.no_data_text, "Nobody here.");
        assert_eq!(config.columns[1].width, Some(12));
        assert_eq!(config.page_size.get(), 5);
    }

    #[test]
    fn test_from_json_accepts_camel_case() {
        let raw = RawConfig::from_json_str(
            r#"{
                "data": [{"lastName": "Scott"}],
                "columns": [{"title": "Last Name", "property": "lastName"}],
                "noDataText": "Empty",
                "entriesOptions": [3]
            }"#,
        )
        .unwrap();
        let config = raw.validate().unwrap();
        assert_eq!(config.no_data_text, "Empty");
        assert_eq!(config.page_size.get(), 3);
        assert_eq!(config.data.len(), 1);
    }

    #[test]
    fn test_json_column_without_property() {
        let raw = RawConfig::from_json_str(
            r#"{"data": [], "columns": [{"title": "Name"}]}"#,
        )
        .unwrap();
        assert_eq!(
            raw.validate().unwrap_err(),
            ConfigError::ColumnMissingProperty { index: 0 }
        );
    }
}
