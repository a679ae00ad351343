//! Column descriptors.

use serde::{Deserialize, Serialize};

/// Upper bound for auto-sized columns, in display cells.
pub const MAX_AUTO_WIDTH: usize = 40;

/// A column of the table: which record field it shows and under what label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column title displayed in the header.
    pub title: String,
    /// Record field rendered in this column.
    pub property: String,
    /// Fixed width in display cells. `None` sizes the column to its content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
}

impl Column {
    /// Creates a new auto-sized column.
    #[must_use]
    pub fn new(title: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            property: property.into(),
            width: None,
        }
    }

    /// Sets a fixed width (builder pattern).
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_new() {
        let col = Column::new("Last Name", "lastName");
        assert_eq!(col.title, "Last Name");
        assert_eq!(col.property, "lastName");
        assert_eq!(col.width, None);
    }

    #[test]
    fn test_column_width_builder() {
        let col = Column::new("City", "city").width(12);
        assert_eq!(col.width, Some(12));
    }
}
