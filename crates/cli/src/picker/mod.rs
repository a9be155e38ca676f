//! Interactive server selection.
//!
//! This module provides the terminal-based multi-select UI for mcp-picker.
//! The interactive machinery is split into a pure state machine and a thin
//! terminal frontend, so the selection semantics are testable without a
//! terminal.
//!
//! # Key Features
//!
//! - **Multi-Select List**: Toggle any subset of servers with a checkbox per row
//! - **Fuzzy Search**: Filter servers by typing to search; selection survives filtering
//! - **Keyboard Navigation**: Arrow keys, with escape clearing the filter before quitting
//! - **Injected Styling**: Colors arrive as a [`PickerTheme`] value, not global state
//!
//! # Layout
//!
//! - [`filter`]: visible subset and cursor (the filter engine)
//! - [`selection`]: name-keyed selection store
//! - [`session`]: the state machine composing the two
//! - [`ui`]: crossterm rendering and the blocking event loop, on stderr
//! - [`theme`]: color palette passed in at session start

pub mod filter;
pub mod selection;
pub mod session;
pub mod theme;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use session::PickerSession;
pub use theme::PickerTheme;
pub use types::{FilterMode, PickerEvent, SessionOutcome};
pub use ui::run_picker;
