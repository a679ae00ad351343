//! Key bindings for table navigation.
//!
//! Keys are plain strings in the terminal's usual naming (`"left"`,
//! `"ctrl+c"`, `"G"`), so any event source can drive the table.
//!
//! # Example
//!
//! ```rust
//! use datatable::key::{Action, KeyMap};
//!
//! let km = KeyMap::default();
//! assert_eq!(km.action("right"), Some(Action::NextPage));
//! assert_eq!(km.action("2"), Some(Action::SortColumn(1)));
//! assert_eq!(km.action("x"), None);
//! ```

use std::fmt;

/// Help information for a keybinding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key(s) to display in help text (e.g., "←/h").
    pub key: String,
    /// Description of what the binding does.
    pub desc: String,
}

/// A keybinding with associated help text.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<String>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Sets the help text for this binding.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the keys for this binding.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the help information for this binding.
    #[must_use]
    pub fn get_help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled if it's not disabled and has at least one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn enable(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Checks if `key` matches any enabled binding in `bindings`.
pub fn matches<K: fmt::Display>(key: K, bindings: &[&Binding]) -> bool {
    let key = key.to_string();
    bindings
        .iter()
        .filter(|b| b.enabled())
        .any(|b| b.keys.iter().any(|k| *k == key))
}

/// Something the user asked the table to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Go to the previous page.
    PrevPage,
    /// Go to the next page.
    NextPage,
    /// Go to the first page.
    FirstPage,
    /// Go to the last page.
    LastPage,
    /// Start typing in the search box.
    FocusSearch,
    /// Stop typing in the search box.
    BlurSearch,
    /// Empty the search box.
    ClearSearch,
    /// Switch to the next page-size option.
    CyclePageSize,
    /// Click the header of the column at this zero-based position.
    SortColumn(usize),
    /// Leave the table.
    Quit,
}

/// Key bindings for the table.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Previous page.
    pub prev_page: Binding,
    /// Next page.
    pub next_page: Binding,
    /// First page.
    pub first_page: Binding,
    /// Last page.
    pub last_page: Binding,
    /// Focus the search box.
    pub focus_search: Binding,
    /// Leave the search box.
    pub blur_search: Binding,
    /// Clear the search box.
    pub clear_search: Binding,
    /// Cycle page size.
    pub cycle_page_size: Binding,
    /// Sort by column N (keys are the digits 1-9).
    pub sort_column: Binding,
    /// Quit.
    pub quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            prev_page: Binding::new()
                .keys(&["left", "h", "pgup"])
                .help("←/h", "prev page"),
            next_page: Binding::new()
                .keys(&["right", "l", "pgdown"])
                .help("→/l", "next page"),
            first_page: Binding::new()
                .keys(&["home", "g"])
                .help("g/home", "first page"),
            last_page: Binding::new()
                .keys(&["end", "G"])
                .help("G/end", "last page"),
            focus_search: Binding::new().keys(&["/"]).help("/", "search"),
            blur_search: Binding::new()
                .keys(&["esc", "enter"])
                .help("esc", "done"),
            clear_search: Binding::new()
                .keys(&["ctrl+u"])
                .help("ctrl+u", "clear search"),
            cycle_page_size: Binding::new()
                .keys(&["e", "tab"])
                .help("e", "page size"),
            sort_column: Binding::new()
                .keys(&["1", "2", "3", "4", "5", "6", "7", "8", "9"])
                .help("1-9", "sort"),
            quit: Binding::new()
                .keys(&["q", "ctrl+c"])
                .help("q", "quit"),
        }
    }
}

impl KeyMap {
    /// Resolves a key pressed while browsing the table.
    #[must_use]
    pub fn action(&self, key: &str) -> Option<Action> {
        let action = if matches(key, &[&self.prev_page]) {
            Action::PrevPage
        } else if matches(key, &[&self.next_page]) {
            Action::NextPage
        } else if matches(key, &[&self.first_page]) {
            Action::FirstPage
        } else if matches(key, &[&self.last_page]) {
            Action::LastPage
        } else if matches(key, &[&self.focus_search]) {
            Action::FocusSearch
        } else if matches(key, &[&self.clear_search]) {
            Action::ClearSearch
        } else if matches(key, &[&self.cycle_page_size]) {
            Action::CyclePageSize
        } else if matches(key, &[&self.sort_column]) {
            let digit = key.parse::<usize>().ok()?;
            Action::SortColumn(digit.checked_sub(1)?)
        } else if matches(key, &[&self.quit]) {
            Action::Quit
        } else {
            return None;
        };
        Some(action)
    }

    /// Resolves a key pressed while typing in the search box.
    ///
    /// Only keys that leave or clear the box map to actions; everything
    /// else is text editing.
    #[must_use]
    pub fn search_action(&self, key: &str) -> Option<Action> {
        if matches(key, &[&self.blur_search]) {
            Some(Action::BlurSearch)
        } else if matches(key, &[&self.clear_search]) {
            Some(Action::ClearSearch)
        } else if key == "ctrl+c" && matches(key, &[&self.quit]) {
            Some(Action::Quit)
        } else {
            None
        }
    }

    /// Bindings shown in the short help line.
    #[must_use]
    pub fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.prev_page,
            &self.next_page,
            &self.focus_search,
            &self.sort_column,
            &self.cycle_page_size,
            &self.quit,
        ]
    }

    /// Renders the short help line: `"key desc • key desc"`.
    #[must_use]
    pub fn short_help_view(&self) -> String {
        self.short_help()
            .into_iter()
            .filter(|b| b.enabled())
            .map(|b| format!("{} {}", b.help.key, b.help.desc))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_enabled() {
        assert!(!Binding::new().enabled());
        let mut b = Binding::new().keys(&["q"]);
        assert!(b.enabled());
        b.enable(false);
        assert!(!b.enabled());
        assert!(!matches("q", &[&b]));
    }

    #[test]
    fn test_matches() {
        let up = Binding::new().keys(&["k", "up"]);
        let down = Binding::new().keys(&["j", "down"]);
        assert!(matches("k", &[&up, &down]));
        assert!(matches("down", &[&up, &down]));
        assert!(!matches("x", &[&up, &down]));
    }

    #[test]
    fn test_default_actions() {
        let km = KeyMap::default();
        assert_eq!(km.action("left"), Some(Action::PrevPage));
        assert_eq!(km.action("l"), Some(Action::NextPage));
        assert_eq!(km.action("G"), Some(Action::LastPage));
        assert_eq!(km.action("/"), Some(Action::FocusSearch));
        assert_eq!(km.action("tab"), Some(Action::CyclePageSize));
        assert_eq!(km.action("1"), Some(Action::SortColumn(0)));
        assert_eq!(km.action("9"), Some(Action::SortColumn(8)));
        assert_eq!(km.action("ctrl+c"), Some(Action::Quit));
        assert_eq!(km.action("0"), None);
    }

    #[test]
    fn test_search_actions() {
        let km = KeyMap::default();
        assert_eq!(km.search_action("esc"), Some(Action::BlurSearch));
        assert_eq!(km.search_action("ctrl+u"), Some(Action::ClearSearch));
        assert_eq!(km.search_action("ctrl+c"), Some(Action::Quit));
        // typed text, not commands
        assert_eq!(km.search_action("q"), None);
        assert_eq!(km.search_action("l"), None);
    }

    #[test]
    fn test_disabled_binding_is_skipped() {
        let mut km = KeyMap::default();
        km.cycle_page_size.enable(false);
        assert_eq!(km.action("e"), None);
        assert!(!km.short_help_view().contains("page size"));
    }

    #[test]
    fn test_short_help_view() {
        let km = KeyMap::default();
        let help = km.short_help_view();
        assert!(help.starts_with("←/h prev page • →/l next page"));
        assert!(help.ends_with("q quit"));
    }
}
