#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Datatable
//!
//! A searchable, sortable, paginated data table for terminal applications.
//!
//! The crate is organized around a pure presentation pipeline and a widget
//! that drives it:
//! - **record** - Rows as ordered field/value mappings
//! - **column** - Column descriptors
//! - **config** - Configuration, defaults and validation
//! - **pipeline** - Filter, sort, paginate and metadata stages
//! - **paginator** - 1-indexed page state and page indicator
//! - **state** - Search/sort/page state and its reset rules
//! - **search** - Single-line search input
//! - **key** - Key bindings and actions
//! - **style** - Styles and the TOML stylesheet
//! - **table** - The `DataTable` widget
//!
//! ## Example
//!
//! ```rust
//! use datatable::prelude::*;
//!
//! let config = TableConfig::builder()
//!     .data(vec![
//!         Record::new().with("city", "New York").with("name", "Ada"),
//!         Record::new().with("city", "Boston").with("name", "Bo"),
//!     ])
//!     .columns(vec![Column::new("Name", "name"), Column::new("City", "city")])
//!     .build()
//!     .unwrap();
//!
//! let mut table = DataTable::new(config);
//! table.set_search("new york");
//! assert_eq!(table.filtered_len(), 1);
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod key;
pub mod paginator;
pub mod pipeline;
pub mod record;
pub mod search;
pub mod state;
pub mod style;
pub mod table;

pub use error::{ConfigError, Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::column::Column;
    pub use crate::config::{RawConfig, TableConfig};
    pub use crate::error::{ConfigError, Error};
    pub use crate::key::{Action, Binding, KeyMap};
    pub use crate::paginator::{Paginator, Type as PaginatorType};
    pub use crate::pipeline::{PageMeta, SortDirection, SortSpec};
    pub use crate::record::{Record, Value, load_records};
    pub use crate::search::SearchInput;
    pub use crate::state::TableState;
    pub use crate::style::{Style, StyleSheet, Styles};
    pub use crate::table::{DataTable, PageSnapshot};
}
