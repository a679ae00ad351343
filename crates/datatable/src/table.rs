//! Data table widget with search, sorting and pagination.
//!
//! [`DataTable`] owns a validated [`TableConfig`] and the mutable
//! [`TableState`]. Every operation that changes state re-derives the
//! filtered and ordered row sets before returning, so the accessors and
//! [`DataTable::view`] always reflect the latest state.
//!
//! # Example
//!
//! ```rust
//! use datatable::column::Column;
//! use datatable::config::TableConfig;
//! use datatable::record::Record;
//! use datatable::style::Styles;
//! use datatable::table::DataTable;
//!
//! let config = TableConfig::builder()
//!     .data(vec![
//!         Record::new().with("lastName", "Smith"),
//!         Record::new().with("lastName", "Scott"),
//!     ])
//!     .columns(vec![Column::new("Last Name", "lastName")])
//!     .build()
//!     .unwrap();
//!
//! let mut table = DataTable::new(config).with_styles(Styles::plain());
//! table.sort_by("lastName");
//! let names: Vec<String> = table
//!     .visible_rows()
//!     .iter()
//!     .map(|r| r.get("lastName").to_string())
//!     .collect();
//! assert_eq!(names, vec!["Scott", "Smith"]);
//! assert!(table.view().contains("Showing 1 to 2 of 2 entries"));
//! ```

use std::num::NonZeroUsize;

use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::{Column, MAX_AUTO_WIDTH};
use crate::config::TableConfig;
use crate::key::{Action, KeyMap};
use crate::paginator::Type as PaginatorType;
use crate::pipeline::{PageMeta, SearchIndex, SortSpec, page_meta, paginate, sort_indices};
use crate::record::Record;
use crate::search::SearchInput;
use crate::state::TableState;
use crate::style::Styles;

/// Derived row sets, keyed on the inputs they were computed from.
#[derive(Debug, Clone)]
struct Derived {
    search: String,
    filtered: Vec<usize>,
    sort: SortSpec,
    ordered: Vec<usize>,
}

/// Machine-readable view of the current page.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot<'a> {
    /// Heading text.
    pub title: &'a str,
    /// Active search term.
    pub search: &'a str,
    /// Active sort.
    pub sort: &'a SortSpec,
    /// Rendered columns.
    pub columns: &'a [Column],
    /// Rows of the current page.
    pub rows: Vec<&'a Record>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Searchable, sortable, paginated table.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Styles for rendering.
    pub styles: Styles,
    /// Key bindings.
    pub key_map: KeyMap,
    config: TableConfig,
    state: TableState,
    index: SearchIndex,
    derived: Derived,
    input: SearchInput,
    show_help: bool,
    paginator_type: PaginatorType,
}

impl DataTable {
    /// Creates a table on page 1 with no search and no sort.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        let index = SearchIndex::new(&config.data);
        let filtered = index.matching("");
        let derived = Derived {
            search: String::new(),
            ordered: filtered.clone(),
            filtered,
            sort: SortSpec::none(),
        };
        let styles = Styles::default();
        let mut input = SearchInput::new();
        input.prompt_style = styles.prompt;
        input.cursor_style = styles.cursor;

        let mut table = Self {
            styles,
            key_map: KeyMap::default(),
            state: TableState::new(config.page_size),
            config,
            index,
            derived,
            input,
            show_help: false,
            paginator_type: PaginatorType::Arabic,
        };
        table.refresh();
        table
    }

    /// Sets the styles (builder pattern).
    #[must_use]
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.input.prompt_style = styles.prompt;
        self.input.cursor_style = styles.cursor;
        self.styles = styles;
        self
    }

    /// Sets the key map (builder pattern).
    #[must_use]
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Shows or hides the key help line (builder pattern).
    #[must_use]
    pub fn show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Sets the page indicator style (builder pattern).
    #[must_use]
    pub fn paginator_type(mut self, t: PaginatorType) -> Self {
        self.paginator_type = t;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the UI state.
    #[must_use]
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Returns whether the search box has focus.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.input.focused()
    }

    /// Re-derives row sets after a state change.
    fn refresh(&mut self) {
        let search_changed = self.derived.search != self.state.search();
        if search_changed {
            self.derived.search = self.state.search().to_string();
            self.derived.filtered = self.index.matching(&self.derived.search);
        }

        if search_changed || self.derived.sort != *self.state.sort() {
            self.derived.sort = self.state.sort().clone();
            self.derived.ordered =
                sort_indices(&self.config.data, &self.derived.filtered, &self.derived.sort);
            tracing::trace!(
                filtered = self.derived.filtered.len(),
                search_changed,
                "Recomputed row order"
            );
        } else {
            tracing::trace!("Row order unchanged, reusing cached order");
        }

        self.state.sync_total(self.derived.filtered.len());
    }

    /// Number of records matching the search.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.derived.filtered.len()
    }

    /// All matching records, in display order.
    #[must_use]
    pub fn ordered_rows(&self) -> Vec<&Record> {
        self.derived
            .ordered
            .iter()
            .map(|&i| &self.config.data[i])
            .collect()
    }

    /// Records on the current page.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&Record> {
        paginate(&self.derived.ordered, self.state.page_size(), self.state.page())
            .iter()
            .map(|&i| &self.config.data[i])
            .collect()
    }

    /// Pagination metadata for the current page.
    #[must_use]
    pub fn meta(&self) -> PageMeta {
        page_meta(self.filtered_len(), self.state.page_size(), self.state.page())
    }

    /// Machine-readable view of the current page.
    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot<'_> {
        PageSnapshot {
            title: &self.config.title,
            search: self.state.search(),
            sort: self.state.sort(),
            columns: &self.config.columns,
            rows: self.visible_rows(),
            meta: self.meta(),
        }
    }

    /// Sets the search term. A different term returns to page 1.
    pub fn set_search(&mut self, term: &str) {
        self.input.set_value(term);
        self.sync_search();
    }

    /// Types a character into the search box.
    pub fn push_search_char(&mut self, c: char) {
        if self.input.insert_char(c) {
            self.sync_search();
        }
    }

    /// Deletes the character before the search cursor.
    pub fn pop_search_char(&mut self) {
        if self.input.delete_backward() {
            self.sync_search();
        }
    }

    fn sync_search(&mut self) {
        if self.state.set_search(self.input.value()) {
            self.refresh();
        }
    }

    /// Sets the page size and returns to page 1.
    pub fn set_page_size(&mut self, size: NonZeroUsize) {
        self.state.set_page_size(size);
        self.refresh();
    }

    /// Switches to the entries option after the current page size.
    ///
    /// Wraps around; does nothing when no options are configured.
    pub fn cycle_page_size(&mut self) {
        let options = &self.config.entries_options;
        if options.is_empty() {
            return;
        }
        let current = self.state.page_size();
        let next = options
            .iter()
            .position(|&o| o == current)
            .map_or(0, |i| (i + 1) % options.len());
        let size = options[next];
        self.set_page_size(size);
    }

    /// Applies a header click on `key`.
    pub fn sort_by(&mut self, key: &str) {
        self.state.sort_by(key);
        self.refresh();
    }

    /// Applies a header click on the column at `index`.
    ///
    /// Returns false if there is no such column.
    pub fn sort_by_column(&mut self, index: usize) -> bool {
        let Some(property) = self.config.columns.get(index).map(|c| c.property.clone()) else {
            return false;
        };
        self.sort_by(&property);
        true
    }

    /// Moves to the next page, if any.
    pub fn next_page(&mut self) {
        self.state.next_page();
    }

    /// Moves to the previous page, if any.
    pub fn prev_page(&mut self) {
        self.state.prev_page();
    }

    /// Jumps to `page`, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
    }

    /// Handles a key press and returns the action it triggered.
    ///
    /// While the search box has focus, printable keys edit the search
    /// term. [`Action::Quit`] is returned for the caller to act on.
    pub fn handle_key(&mut self, key: &str) -> Option<Action> {
        if self.input.focused() {
            if let Some(action) = self.key_map.search_action(key) {
                self.apply(action);
                return Some(action);
            }
            self.edit_search(key);
            return None;
        }

        let action = self.key_map.action(key)?;
        self.apply(action);
        Some(action)
    }

    fn edit_search(&mut self, key: &str) {
        match key {
            "backspace" => self.pop_search_char(),
            "delete" => {
                if self.input.delete_forward() {
                    self.sync_search();
                }
            }
            "left" => self.input.cursor_left(),
            "right" => self.input.cursor_right(),
            "home" => self.input.cursor_start(),
            "end" => self.input.cursor_end(),
            "space" => self.push_search_char(' '),
            _ => {
                let mut chars = key.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    self.push_search_char(c);
                }
            }
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::PrevPage => self.prev_page(),
            Action::NextPage => self.next_page(),
            Action::FirstPage => self.state.paginator_mut().first_page(),
            Action::LastPage => self.state.paginator_mut().last_page(),
            Action::FocusSearch => self.input.focus(),
            Action::BlurSearch => self.input.blur(),
            Action::ClearSearch => self.set_search(""),
            Action::CyclePageSize => self.cycle_page_size(),
            Action::SortColumn(index) => {
                self.sort_by_column(index);
            }
            Action::Quit => {}
        }
    }

    /// Renders the table.
    #[must_use]
    pub fn view(&self) -> String {
        let mut lines = vec![self.styles.title.render(&self.config.title)];
        lines.push(self.controls_view());
        lines.push(String::new());

        let meta = self.meta();
        if meta.is_empty() {
            lines.push(self.styles.no_data.render(&self.config.no_data_text));
        } else {
            let rows = self.visible_rows();
            let widths = self.column_widths(&rows);
            lines.push(self.headers_view(&widths));
            lines.extend(rows.iter().map(|row| self.row_view(row, &widths)));
            lines.push(String::new());
            lines.push(self.footer_view(&meta));
        }

        if self.show_help {
            lines.push(String::new());
            lines.push(self.styles.help.render(&self.key_map.short_help_view()));
        }

        lines.join("\n")
    }

    /// Search box plus, when options exist, the page-size selector.
    fn controls_view(&self) -> String {
        let mut line = self.input.view();
        if self.config.entries_options.is_empty() {
            return line;
        }
        let current = self.state.page_size();
        let options: Vec<String> = self
            .config
            .entries_options
            .iter()
            .map(|&o| {
                if o == current {
                    self.styles.selected_entry.render(&format!("[{o}]"))
                } else {
                    o.to_string()
                }
            })
            .collect();
        line.push_str(&format!("   Show {} entries", options.join(" ")));
        line
    }

    fn column_widths(&self, rows: &[&Record]) -> Vec<usize> {
        let sort = self.state.sort();
        self.config
            .columns
            .iter()
            .map(|col| {
                if let Some(width) = col.width {
                    return width;
                }
                let indicator = usize::from(sort.direction_for(&col.property).is_some()) * 2;
                let cells = rows
                    .iter()
                    .map(|row| self.cell_text(row, col).width())
                    .max()
                    .unwrap_or(0);
                (col.title.width() + indicator).max(cells).clamp(1, MAX_AUTO_WIDTH)
            })
            .collect()
    }

    fn cell_text<'r>(&'r self, row: &'r Record, col: &Column) -> std::borrow::Cow<'r, str> {
        let value = row.get(&col.property);
        if value.is_absent() {
            std::borrow::Cow::Borrowed(self.config.placeholder.as_str())
        } else {
            value.display()
        }
    }

    fn headers_view(&self, widths: &[usize]) -> String {
        let sort = self.state.sort();
        self.config
            .columns
            .iter()
            .zip(widths)
            .map(|(col, &width)| {
                let (label, style) = match sort.direction_for(&col.property) {
                    Some(dir) => (
                        format!("{} {}", col.title, dir.indicator()),
                        &self.styles.active_header,
                    ),
                    None => (col.title.clone(), &self.styles.header),
                };
                format!(" {} ", style.render(&pad(&truncate(&label, width), width)))
            })
            .collect()
    }

    fn row_view(&self, row: &Record, widths: &[usize]) -> String {
        self.config
            .columns
            .iter()
            .zip(widths)
            .map(|(col, &width)| {
                let style = if row.get(&col.property).is_absent() {
                    &self.styles.placeholder
                } else {
                    &self.styles.cell
                };
                let text = self.cell_text(row, col);
                format!(" {} ", style.render(&pad(&truncate(&text, width), width)))
            })
            .collect()
    }

    fn footer_view(&self, meta: &PageMeta) -> String {
        let summary = meta.summary().unwrap_or_default();
        let nav = |label: &str, enabled: bool| {
            if enabled {
                self.styles.nav_enabled.render(label)
            } else {
                self.styles.nav_disabled.render(label)
            }
        };
        let mut paginator = self.state.paginator().clone().display_type(self.paginator_type);
        paginator.set_total_pages_from_items(meta.total);
        format!(
            "{}   {} {} {}",
            self.styles.footer.render(&summary),
            nav("‹ Prev", meta.has_prev),
            paginator.view(),
            nav("Next ›", meta.has_next),
        )
    }
}

/// Truncates `s` to `width` display cells, ending with `…` if cut.
fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pads `s` with spaces to `width` display cells.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SortDirection;
    use crate::record::Value;

    fn people(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                Record::new()
                    .with("id", i as i64)
                    .with("name", format!("Person {i:02}"))
            })
            .collect()
    }

    fn table(data: Vec<Record>, options: &[i64]) -> DataTable {
        let config = TableConfig::builder()
            .data(data)
            .columns(vec![Column::new("ID", "id"), Column::new("Name", "name")])
            .entries_options(options)
            .build()
            .unwrap();
        DataTable::new(config).with_styles(Styles::plain())
    }

    fn ids(rows: &[&Record]) -> Vec<String> {
        rows.iter().map(|r| r.get("id").to_string()).collect()
    }

    #[test]
    fn test_initial_state() {
        let t = table(people(23), &[10, 25]);
        assert_eq!(t.filtered_len(), 23);
        assert_eq!(t.state().page(), 1);
        assert_eq!(t.visible_rows().len(), 10);
        assert_eq!(t.meta().page_count, 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let mut t = table(people(23), &[10]);
        t.set_page(3);
        assert_eq!(ids(&t.visible_rows()), vec!["20", "21", "22"]);
        assert!(!t.meta().has_next);
    }

    #[test]
    fn test_search_resets_page() {
        let mut t = table(people(23), &[5]);
        t.set_page(3);
        t.push_search_char('1');
        assert_eq!(t.state().page(), 1);
        // "1", "10".."19", "21" by id, plus names containing 1
        assert!(t.filtered_len() > 0);
    }

    #[test]
    fn test_sort_keeps_page() {
        let mut t = table(people(23), &[5]);
        t.set_page(2);
        t.sort_by("id");
        t.sort_by("id");
        assert_eq!(t.state().page(), 2);
        assert_eq!(ids(&t.visible_rows()), vec!["17", "16", "15", "14", "13"]);
    }

    #[test]
    fn test_page_size_cycle_resets_page() {
        let mut t = table(people(23), &[5, 10]);
        t.set_page(3);
        t.cycle_page_size();
        assert_eq!(t.state().page_size().get(), 10);
        assert_eq!(t.state().page(), 1);
        t.cycle_page_size();
        assert_eq!(t.state().page_size().get(), 5);
    }

    #[test]
    fn test_cycle_without_options_is_noop() {
        let mut t = table(people(3), &[]);
        t.cycle_page_size();
        assert_eq!(t.state().page_size().get(), 10);
    }

    #[test]
    fn test_sort_by_column_out_of_range() {
        let mut t = table(people(3), &[]);
        assert!(!t.sort_by_column(5));
        assert!(t.sort_by_column(1));
        assert_eq!(t.state().sort(), &SortSpec::by("name", SortDirection::Ascending));
    }

    #[test]
    fn test_narrowing_search_clamps_page() {
        let mut t = table(people(23), &[5]);
        t.set_page(5);
        t.set_search("Person 2");
        assert_eq!(t.state().page(), 1);
        // "Person 20" through "Person 22"
        assert_eq!(t.filtered_len(), 3);
        t.next_page();
        assert_eq!(t.state().page(), 1);
    }

    #[test]
    fn test_handle_key_navigation() {
        let mut t = table(people(23), &[10]);
        assert_eq!(t.handle_key("right"), Some(Action::NextPage));
        assert_eq!(t.state().page(), 2);
        t.handle_key("G");
        assert_eq!(t.state().page(), 3);
        t.handle_key("g");
        assert_eq!(t.state().page(), 1);
        assert_eq!(t.handle_key("q"), Some(Action::Quit));
        assert_eq!(t.handle_key("z"), None);
    }

    #[test]
    fn test_handle_key_search_mode() {
        let mut t = table(people(23), &[10]);
        t.handle_key("right");
        t.handle_key("/");
        assert!(t.is_searching());
        for key in ["2", "2"] {
            assert_eq!(t.handle_key(key), None);
        }
        assert_eq!(t.state().search(), "22");
        assert_eq!(t.state().page(), 1);
        assert_eq!(ids(&t.visible_rows()), vec!["22"]);

        t.handle_key("backspace");
        assert_eq!(t.state().search(), "2");

        // "q" is text while searching
        assert_eq!(t.handle_key("q"), None);
        assert_eq!(t.state().search(), "2q");

        assert_eq!(t.handle_key("esc"), Some(Action::BlurSearch));
        assert!(!t.is_searching());
        t.handle_key("ctrl+u");
        assert_eq!(t.state().search(), "");
    }

    #[test]
    fn test_view_with_rows() {
        let mut t = table(people(3), &[5, 10]);
        t.sort_by("name");
        let view = t.view();
        assert!(view.starts_with("Data Table\n"));
        assert!(view.contains("Show [5] 10 entries"));
        assert!(view.contains("Name ▲"));
        assert!(view.contains("Person 00"));
        assert!(view.contains("Showing 1 to 3 of 3 entries"));
        assert!(view.contains("1/1"));
    }

    #[test]
    fn test_view_no_data() {
        let mut t = table(people(3), &[]);
        t.set_search("zzz");
        let view = t.view();
        assert!(view.contains("No data found."));
        assert!(!view.contains("Showing"));
        assert!(!view.contains("Show "));
    }

    #[test]
    fn test_view_placeholder_for_absent() {
        let data = vec![
            Record::new().with("id", 1).with("name", Value::Absent),
            Record::new().with("id", 0).with("name", ""),
        ];
        let t = table(data, &[]);
        let view = t.view();
        let body: Vec<&str> = view.lines().filter(|l| l.starts_with(" 1 ")).collect();
        assert_eq!(body.len(), 1);
        assert!(body[0].contains(" - "));
    }

    #[test]
    fn test_view_help_line() {
        let t = table(people(1), &[]).show_help(true);
        assert!(t.view().ends_with("q quit"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let t = table(people(12), &[5]);
        let json = serde_json::to_value(t.snapshot()).unwrap();
        assert_eq!(json["meta"]["page_count"], 3);
        assert_eq!(json["rows"].as_array().unwrap().len(), 5);
        assert_eq!(json["rows"][0]["name"], "Person 00");
    }

    #[test]
    fn test_truncate_and_pad() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 5), "Hell…");
        assert_eq!(truncate("", 5), "");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }
}
