//! Single-line search input.
//!
//! # Example
//!
//! ```rust
//! use datatable::search::SearchInput;
//!
//! let mut input = SearchInput::new();
//! input.focus();
//! for c in "york".chars() {
//!     input.insert_char(c);
//! }
//! input.delete_backward();
//! assert_eq!(input.value(), "yor");
//! ```

use unicode_width::UnicodeWidthStr;

use crate::style::Style;

/// Search text field.
#[derive(Debug, Clone)]
pub struct SearchInput {
    value: Vec<char>,
    pos: usize,
    focus: bool,
    /// Text shown before the value.
    pub prompt: String,
    /// Text shown while the value is empty and the input is not focused.
    pub placeholder: String,
    /// Maximum number of characters; zero means unlimited.
    pub char_limit: usize,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the character under the cursor.
    pub cursor_style: Style,
    /// Style for the placeholder.
    pub placeholder_style: Style,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchInput {
    /// Creates an empty, unfocused input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Vec::new(),
            pos: 0,
            focus: false,
            prompt: "Search: ".to_string(),
            placeholder: String::new(),
            char_limit: 0,
            prompt_style: Style::new(),
            cursor_style: Style::new(),
            placeholder_style: Style::new(),
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the value and moves the cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = sanitize(s);
        if self.char_limit > 0 {
            self.value.truncate(self.char_limit);
        }
        self.pos = self.value.len();
    }

    /// Returns the cursor position in characters.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns whether the input has focus.
    #[must_use]
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the input focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Clears the value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Inserts `c` at the cursor. Control characters are ignored.
    ///
    /// Returns whether the value changed.
    pub fn insert_char(&mut self, c: char) -> bool {
        if c.is_control() || (self.char_limit > 0 && self.value.len() >= self.char_limit) {
            return false;
        }
        self.value.insert(self.pos, c);
        self.pos += 1;
        true
    }

    /// Deletes the character before the cursor.
    pub fn delete_backward(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos -= 1;
        self.value.remove(self.pos);
        true
    }

    /// Deletes the character under the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        self.value.remove(self.pos);
        true
    }

    /// Moves the cursor one character left.
    pub fn cursor_left(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Moves the cursor one character right.
    pub fn cursor_right(&mut self) {
        self.pos = (self.pos + 1).min(self.value.len());
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.pos = self.value.len();
    }

    /// Renders the input.
    #[must_use]
    pub fn view(&self) -> String {
        let mut out = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() && !self.focus {
            out.push_str(&self.placeholder_style.render(&self.placeholder));
            return out;
        }

        let before: String = self.value[..self.pos].iter().collect();
        out.push_str(&before);

        if self.focus {
            let under = self.value.get(self.pos).copied().unwrap_or(' ');
            out.push_str(&self.cursor_style.render(&under.to_string()));
            let after: String = self.value.get(self.pos + 1..).unwrap_or_default().iter().collect();
            out.push_str(&after);
        } else {
            let after: String = self.value[self.pos..].iter().collect();
            out.push_str(&after);
        }
        out
    }

    /// Display width of the rendered input, ignoring styling.
    #[must_use]
    pub fn width(&self) -> usize {
        let body = if self.value.is_empty() && !self.focus {
            self.placeholder.width()
        } else {
            self.value().width() + usize::from(self.focus && self.pos == self.value.len())
        };
        self.prompt.width() + body
    }
}

fn sanitize(s: &str) -> Vec<char> {
    s.chars()
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect()
}
