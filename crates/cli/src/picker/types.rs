//! Type definitions for the picker session and UI state.
//!
//! This module defines the events the picker state machine consumes, the
//! filter modes it moves between, and the outcome it produces when the
//! session ends.

use mcp_picker_core::output::SelectionSnapshot;

/// An input event for the picker state machine.
///
/// The terminal layer maps raw key events onto these; the state machine
/// itself never sees a keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    CursorUp,
    CursorDown,
    /// Toggle the selection of the entry under the cursor.
    Toggle,
    /// Confirm the session, or commit the filter text while composing it.
    Confirm,
    /// Quit unconditionally.
    Cancel,
    /// Clear the active filter, or cancel when there is none to clear.
    Escape,
    /// Enter filter text composition.
    BeginFilter,
    /// A character of filter text.
    Input(char),
    Backspace,
}

/// Direction to move the cursor in the visible list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorDirection {
    Up,
    Down,
}

/// The filter's relationship to user input.
///
/// `Filtering` means text entry is in progress: printable keys go into the
/// query rather than being interpreted as picker commands. `Filtered` means
/// a committed, non-empty query is narrowing the list. An empty query is
/// always `Unfiltered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Unfiltered,
    Filtering,
    Filtered,
}

/// How the session ended. Produced exactly once, by the final event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Confirmed(SelectionSnapshot),
    Cancelled,
}

/// State for the UI viewport.
///
/// Tracks the visible portion of the server list when there are more
/// entries than can fit on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}
