//! Interactive terminal mode.
//!
//! Raw mode on the alternate screen, one redraw per key press. Keys are
//! translated to the names [`KeyMap`](datatable::key::KeyMap) binds
//! (`"left"`, `"ctrl+c"`, `"G"`) and handed to the table.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use datatable::key::Action;
use datatable::table::DataTable;

/// Runs the table until the user quits.
///
/// The terminal is restored before returning, whether the loop ended
/// normally or with an error.
pub fn run(table: &mut DataTable) -> Result<()> {
    let mut stdout = io::stdout();

    enable_raw_mode().context("failed to enable raw mode")?;
    let result = execute!(stdout, EnterAlternateScreen, Hide)
        .context("failed to set up terminal")
        .and_then(|()| event_loop(table, &mut stdout));

    let _ = execute!(stdout, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();

    result
}

fn event_loop<W: Write>(table: &mut DataTable, writer: &mut W) -> Result<()> {
    let mut last_view = String::new();
    loop {
        render(table, writer, &mut last_view)?;

        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(name) = key_name(key.code, key.modifiers) else {
                    continue;
                };
                tracing::trace!(key = %name, "Key press");
                if table.handle_key(&name) == Some(Action::Quit) {
                    tracing::debug!("Quit requested");
                    return Ok(());
                }
            }
            Event::Resize(..) => last_view.clear(),
            _ => {}
        }
    }
}

fn render<W: Write>(table: &DataTable, writer: &mut W, last_view: &mut String) -> Result<()> {
    let view = table.view();
    if view == *last_view {
        return Ok(());
    }

    execute!(writer, MoveTo(0, 0), Clear(ClearType::All))?;
    // raw mode: "\n" does not return the carriage
    write!(writer, "{}", view.replace('\n', "\r\n"))?;
    writer.flush()?;

    *last_view = view;
    Ok(())
}

/// Names a key the way key bindings spell it.
fn key_name(code: KeyCode, modifiers: KeyModifiers) -> Option<String> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let name = match code {
        KeyCode::Char(c) if ctrl => format!("ctrl+{}", c.to_ascii_lowercase()),
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) if alt => format!("alt+{c}"),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        let none = KeyModifiers::NONE;
        assert_eq!(key_name(KeyCode::Left, none).as_deref(), Some("left"));
        assert_eq!(key_name(KeyCode::PageDown, none).as_deref(), Some("pgdown"));
        assert_eq!(key_name(KeyCode::Esc, none).as_deref(), Some("esc"));
        assert_eq!(key_name(KeyCode::Char('q'), none).as_deref(), Some("q"));
        assert_eq!(key_name(KeyCode::Char(' '), none).as_deref(), Some("space"));
        assert_eq!(key_name(KeyCode::F(1), none), None);
    }

    #[test]
    fn test_modified_key_names() {
        assert_eq!(
            key_name(KeyCode::Char('C'), KeyModifiers::CONTROL).as_deref(),
            Some("ctrl+c")
        );
        assert_eq!(
            key_name(KeyCode::Char('G'), KeyModifiers::SHIFT).as_deref(),
            Some("G")
        );
        assert_eq!(
            key_name(KeyCode::Char('x'), KeyModifiers::ALT).as_deref(),
            Some("alt+x")
        );
    }

    #[test]
    fn test_render_skips_unchanged_view() {
        use datatable::column::Column;
        use datatable::config::TableConfig;
        use datatable::record::Record;
        use datatable::style::Styles;

        let config = TableConfig::builder()
            .data(vec![Record::new().with("name", "Ada")])
            .columns(vec![Column::new("Name", "name")])
            .build()
            .unwrap();
        let table = DataTable::new(config).with_styles(Styles::plain());

        let mut out = Vec::new();
        let mut last = String::new();
        render(&table, &mut out, &mut last).unwrap();
        let first = String::from_utf8(out.clone()).unwrap();
        assert!(first.contains("Data Table\r\n"));
        assert!(first.contains("Ada"));

        out.clear();
        render(&table, &mut out, &mut last).unwrap();
        assert!(out.is_empty());
    }
}
