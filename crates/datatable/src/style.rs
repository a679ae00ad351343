//! Styles and the table stylesheet.
//!
//! [`Style`] is a small builder over `crossterm`'s ANSI styling. [`Styles`]
//! groups one style per table element. A [`StyleSheet`] is the on-disk
//! (TOML) form of [`Styles`]; it can be loaded and reused on its own,
//! without any table.
//!
//! # Example
//!
//! ```rust
//! use datatable::style::StyleSheet;
//!
//! let sheet = StyleSheet::from_toml_str(r##"
//! [header]
//! bold = true
//! fg = "212"
//!
//! [no_data]
//! fg = "#ff8800"
//! italic = true
//! "##).unwrap();
//!
//! let styles = sheet.into_styles().unwrap();
//! assert!(!styles.header.is_plain());
//! ```

use crossterm::style::{Attribute, Color, ContentStyle};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Stylesheet errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A color string was not a known name, ANSI index or hex triplet.
    #[error("unknown color `{value}` (expected a name, 0-255, or #rrggbb)")]
    InvalidColor {
        /// The rejected color string.
        value: String,
    },
}

/// Parses a color given as a name (`"red"`), an ANSI 256 index (`"212"`)
/// or a hex triplet (`"#ff00aa"`).
///
/// # Errors
///
/// Returns [`StyleError::InvalidColor`] for anything else.
pub fn parse_color(value: &str) -> Result<Color, StyleError> {
    let invalid = || StyleError::InvalidColor {
        value: value.to_string(),
    };
    let s = value.trim();

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        return Ok(Color::Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        });
    }

    if let Ok(index) = s.parse::<u8>() {
        return Ok(Color::AnsiValue(index));
    }

    let color = match s.to_ascii_lowercase().replace('-', "_").as_str() {
        "black" => Color::Black,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        _ => return Err(invalid()),
    };
    Ok(color)
}

/// Text style for one table element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    italic: bool,
    underline: bool,
    faint: bool,
    reverse: bool,
}

impl Style {
    /// Creates an empty style, which renders text unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn foreground(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Enables bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enables italics.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Enables underline.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Enables faint (dim) text.
    #[must_use]
    pub fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    /// Swaps foreground and background.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Returns true if rendering leaves text unchanged.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Renders `s` with this style.
    #[must_use]
    pub fn render(&self, s: &str) -> String {
        if self.is_plain() || s.is_empty() {
            return s.to_string();
        }
        let mut content = ContentStyle::new();
        content.foreground_color = self.fg;
        content.background_color = self.bg;
        for (on, attr) in [
            (self.bold, Attribute::Bold),
            (self.italic, Attribute::Italic),
            (self.underline, Attribute::Underlined),
            (self.faint, Attribute::Dim),
            (self.reverse, Attribute::Reverse),
        ] {
            if on {
                content.attributes.set(attr);
            }
        }
        content.apply(s).to_string()
    }
}

/// Styles for every table element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    /// Heading.
    pub title: Style,
    /// Column headers.
    pub header: Style,
    /// Header of the active sort column.
    pub active_header: Style,
    /// Body cells.
    pub cell: Style,
    /// Placeholder glyph for absent values.
    pub placeholder: Style,
    /// "Showing X to Y of Z entries" line.
    pub footer: Style,
    /// Enabled previous/next controls.
    pub nav_enabled: Style,
    /// Disabled previous/next controls.
    pub nav_disabled: Style,
    /// No-data text.
    pub no_data: Style,
    /// Key help line.
    pub help: Style,
    /// Search prompt.
    pub prompt: Style,
    /// Search cursor.
    pub cursor: Style,
    /// Current option of the page-size selector.
    pub selected_entry: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let accent = Color::AnsiValue(212);
        Self {
            title: Style::new().bold().underline(),
            header: Style::new().bold(),
            active_header: Style::new().bold().foreground(accent),
            cell: Style::new(),
            placeholder: Style::new().faint(),
            footer: Style::new().faint(),
            nav_enabled: Style::new().bold(),
            nav_disabled: Style::new().faint(),
            no_data: Style::new().italic(),
            help: Style::new().foreground(Color::AnsiValue(241)),
            prompt: Style::new().foreground(accent),
            cursor: Style::new().reverse(),
            selected_entry: Style::new().bold().foreground(accent),
        }
    }
}

impl Styles {
    /// Styles that render every element as plain text.
    #[must_use]
    pub fn plain() -> Self {
        let plain = Style::new();
        Self {
            title: plain,
            header: plain,
            active_header: plain,
            cell: plain,
            placeholder: plain,
            footer: plain,
            nav_enabled: plain,
            nav_disabled: plain,
            no_data: plain,
            help: plain,
            prompt: plain,
            cursor: plain,
            selected_entry: plain,
        }
    }
}

/// On-disk description of a single [`Style`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSpec {
    /// Foreground color.
    pub fg: Option<String>,
    /// Background color.
    pub bg: Option<String>,
    /// Bold text.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
    /// Faint text.
    pub faint: bool,
    /// Reversed colors.
    pub reverse: bool,
}

impl StyleSpec {
    /// Converts to a [`Style`].
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] for unparseable colors.
    pub fn to_style(&self) -> Result<Style, StyleError> {
        let mut style = Style::new();
        if let Some(fg) = &self.fg {
            style = style.foreground(parse_color(fg)?);
        }
        if let Some(bg) = &self.bg {
            style = style.background(parse_color(bg)?);
        }
        style.bold = self.bold;
        style.italic = self.italic;
        style.underline = self.underline;
        style.faint = self.faint;
        style.reverse = self.reverse;
        Ok(style)
    }
}

/// Table stylesheet. Elements left out keep their [`Styles::default`] (or,
/// with `plain = true`, [`Styles::plain`]) style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSheet {
    /// Start from unstyled text instead of the default colors.
    pub plain: bool,
    pub title: Option<StyleSpec>,
    pub header: Option<StyleSpec>,
    pub active_header: Option<StyleSpec>,
    pub cell: Option<StyleSpec>,
    pub placeholder: Option<StyleSpec>,
    pub footer: Option<StyleSpec>,
    pub nav_enabled: Option<StyleSpec>,
    pub nav_disabled: Option<StyleSpec>,
    pub no_data: Option<StyleSpec>,
    pub help: Option<StyleSpec>,
    pub prompt: Option<StyleSpec>,
    pub cursor: Option<StyleSpec>,
    pub selected_entry: Option<StyleSpec>,
}

impl StyleSheet {
    /// Parses a stylesheet from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`](crate::error::Error::Toml) on malformed input.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Resolves the sheet into concrete [`Styles`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Style`](crate::error::Error::Style) for bad colors.
    pub fn into_styles(self) -> Result<Styles> {
        let mut styles = if self.plain {
            Styles::plain()
        } else {
            Styles::default()
        };
        let overrides = [
            (self.title, &mut styles.title),
            (self.header, &mut styles.header),
            (self.active_header, &mut styles.active_header),
            (self.cell, &mut styles.cell),
            (self.placeholder, &mut styles.placeholder),
            (self.footer, &mut styles.footer),
            (self.nav_enabled, &mut styles.nav_enabled),
            (self.nav_disabled, &mut styles.nav_disabled),
            (self.no_data, &mut styles.no_data),
            (self.help, &mut styles.help),
            (self.prompt, &mut styles.prompt),
            (self.cursor, &mut styles.cursor),
            (self.selected_entry, &mut styles.selected_entry),
        ];
        for (spec, slot) in overrides {
            if let Some(spec) = spec {
                *slot = spec.to_style()?;
            }
        }
        Ok(styles)
    }
}
