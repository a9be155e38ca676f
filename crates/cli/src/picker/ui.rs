//! Terminal frontend for the picker session.
//!
//! All interactive output goes to stderr so stdout carries nothing but the
//! final artifact path. This module owns raw mode, the key-to-event
//! mapping, and row rendering; every decision about what a key *means* for
//! the session lives in [`PickerSession::step`].

use std::io::{stderr, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{queue, terminal, ExecutableCommand};

use mcp_picker_core::error::Result;
use mcp_picker_core::server_definitions::{Catalog, ServerEntry};

use super::session::PickerSession;
use super::theme::PickerTheme;
use super::types::{FilterMode, PickerEvent, SessionOutcome, ViewportState};

/// Rows reserved above/below the list: header and filter line.
const CHROME_ROWS: u16 = 2;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let _ = stderr().execute(LeaveAlternateScreen);
    }
}

/// Runs the interactive session until the user confirms or cancels.
pub fn run_picker(catalog: &Catalog, theme: &PickerTheme) -> Result<SessionOutcome> {
    let mut stderr = stderr();

    stderr.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled

    let (width, height) = terminal::size()?;
    let mut viewport = ViewportState {
        offset: 0,
        height: height.saturating_sub(CHROME_ROWS),
        width,
    };

    let mut session = PickerSession::new(catalog);
    redraw_ui(&session, &viewport, theme)?;

    loop {
        match event::read()? {
            Event::Key(key_event) => {
                let is_filtering = session.filter().mode() == FilterMode::Filtering;
                let Some(picker_event) = map_key_event(&key_event, is_filtering) else {
                    continue;
                };

                if let Some(outcome) = session.step(picker_event) {
                    return Ok(outcome);
                }

                viewport.offset = scroll_offset(
                    viewport.offset,
                    session.filter().cursor(),
                    viewport.height as usize,
                );
                redraw_ui(&session, &viewport, theme)?;
            }
            Event::Resize(width, height) => {
                viewport.width = width;
                viewport.height = height.saturating_sub(CHROME_ROWS);
                viewport.offset = scroll_offset(
                    viewport.offset,
                    session.filter().cursor(),
                    viewport.height as usize,
                );
                redraw_ui(&session, &viewport, theme)?;
            }
            _ => {}
        }
    }
}

/// Maps a raw key event onto a picker event.
///
/// While filter text is being composed, printable keys are query input;
/// the toggle, quit and begin-filter keys only carry their special meaning
/// outside composition. Ctrl-C cancels unconditionally.
fn map_key_event(key_event: &KeyEvent, is_filtering: bool) -> Option<PickerEvent> {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PickerEvent::Cancel)
        }
        KeyCode::Up => Some(PickerEvent::CursorUp),
        KeyCode::Down => Some(PickerEvent::CursorDown),
        KeyCode::Enter => Some(PickerEvent::Confirm),
        KeyCode::Esc => Some(PickerEvent::Escape),
        KeyCode::Backspace => Some(PickerEvent::Backspace),
        KeyCode::Char(c) if is_filtering => Some(PickerEvent::Input(c)),
        KeyCode::Char(' ') => Some(PickerEvent::Toggle),
        KeyCode::Char('q') => Some(PickerEvent::Cancel),
        KeyCode::Char('/') => Some(PickerEvent::BeginFilter),
        _ => None,
    }
}

/// Keeps the cursor row inside the viewport.
fn scroll_offset(offset: usize, cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }

    if cursor < offset {
        cursor
    } else if cursor >= offset + height {
        cursor + 1 - height
    } else {
        offset
    }
}

/// One rendered list row, without styling.
fn format_row(entry: &ServerEntry, is_cursor: bool, is_selected: bool) -> String {
    let cursor = if is_cursor { "> " } else { "  " };
    let checkbox = if is_selected { "[x]" } else { "[ ]" };
    format!("{cursor}{checkbox} {entry}")
}

/// Clips a row to the terminal width without splitting characters.
fn clip_to_width(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn redraw_ui(session: &PickerSession, viewport: &ViewportState, theme: &PickerTheme) -> Result<()> {
    let mut stderr = stderr();

    queue!(stderr, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(session, theme)?;

    if session.filter().visible_count() == 0 {
        queue!(
            stderr,
            SetForegroundColor(Color::Red),
            Print("No matching servers!".to_string()),
            SetAttribute(Attribute::Reset),
            cursor::MoveToNextLine(1)
        )?;
    } else {
        print_entries_with_cursor(session, viewport, theme)?;
    }

    let filter = session.filter();
    if filter.mode() == FilterMode::Filtering || !filter.query().is_empty() {
        queue!(
            stderr,
            SetForegroundColor(theme.help),
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", filter.query())),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::Reset),
        )?;
    }

    stderr.flush()?;
    Ok(())
}

fn print_header(session: &PickerSession, theme: &PickerTheme) -> Result<()> {
    let mut stderr = stderr();

    let instructions = if session.filter().mode() == FilterMode::Filtering {
        "<esc>: Clear Filter   |   <enter>: Commit".to_string()
    } else {
        format!(
            "space: Toggle   |   enter: Confirm   |   /: Filter   |   q: Quit   |   {} selected",
            session.selection().selected_count()
        )
    };

    queue!(
        stderr,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(theme.title),
        Print("Select MCP Servers".to_string()),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(theme.help),
        Print(format!("   {instructions}")),
        SetForegroundColor(Color::Reset),
        cursor::MoveToNextLine(1),
    )?;

    Ok(())
}

fn print_entries_with_cursor(
    session: &PickerSession,
    viewport: &ViewportState,
    theme: &PickerTheme,
) -> Result<()> {
    let mut stderr = stderr();

    let filter = session.filter();
    let visible_rows = filter
        .visible_entries()
        .enumerate()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (index, entry) in visible_rows {
        let is_cursor = index == filter.cursor();
        let is_selected = session.selection().is_selected(&entry.name);

        if is_cursor {
            queue!(
                stderr,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(theme.cursor),
            )?;
        } else if is_selected {
            queue!(stderr, SetForegroundColor(theme.selected))?;
        }

        let row = format_row(entry, is_cursor, is_selected);
        queue!(
            stderr,
            Print(clip_to_width(&row, viewport.width as usize)),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::Reset),
            cursor::MoveToNextLine(1),
        )?;
    }

    Ok(())
}
