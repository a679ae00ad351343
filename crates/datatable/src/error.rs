//! Error types for table configuration and data loading.
//!
//! Configuration is validated once, when a [`TableConfig`](crate::config::TableConfig)
//! is built. Everything after that point (filtering, sorting, paging and
//! rendering) is total and cannot fail.
//!
//! # Example
//!
//! ```rust
//! use datatable::config::RawConfig;
//! use datatable::error::ConfigError;
//!
//! let raw = RawConfig::default();
//! match raw.validate() {
//!     Err(ConfigError::MissingField { field }) => assert_eq!(field, "data"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

/// A configuration that failed validation.
///
/// Each variant names the offending field so the host application can
/// report it directly.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field was not supplied.
    #[error("missing required field `{field}`")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// `columns` was supplied but contains no descriptors.
    #[error("`columns` must contain at least one column")]
    EmptyColumns,

    /// A column descriptor has no (or an empty) `property`.
    #[error("column {index} is missing `property`")]
    ColumnMissingProperty {
        /// Zero-based position of the column.
        index: usize,
    },

    /// A column descriptor has no (or an empty) `title`.
    #[error("column {index} is missing `title`")]
    ColumnMissingTitle {
        /// Zero-based position of the column.
        index: usize,
    },

    /// `page_size` is zero or negative.
    #[error("`page_size` must be a positive integer, got {value}")]
    InvalidPageSize {
        /// The rejected value.
        value: i64,
    },

    /// An entry in `entries_options` is zero or negative.
    #[error("`entries_options[{index}]` must be a positive integer, got {value}")]
    InvalidEntriesOption {
        /// Zero-based position of the option.
        index: usize,
        /// The rejected value.
        value: i64,
    },
}

/// Errors produced while loading records, configuration or stylesheets.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configuration failed validation.
    #[error("invalid table configuration: {0}")]
    Config(#[from] ConfigError),

    /// Input was not valid JSON, or had the wrong shape.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Input was not valid TOML, or had the wrong shape.
    #[error("invalid TOML input: {0}")]
    Toml(#[from] toml::de::Error),

    /// A stylesheet referenced a color that could not be parsed.
    #[error("invalid stylesheet: {0}")]
    Style(#[from] crate::style::StyleError),
}

/// A specialized [`Result`] type for datatable operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
