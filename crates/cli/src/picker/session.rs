//! The picker state machine.
//!
//! [`PickerSession`] composes the filter engine and the selection store
//! into one interactive session. It is a pure synchronous step function
//! over [`PickerEvent`]s: each call fully processes one event and returns
//! `Some(outcome)` exactly once, when the session ends. No terminal is
//! involved, so the whole machine is testable as plain code.

use mcp_picker_core::server_definitions::Catalog;

use super::filter::FilterEngine;
use super::selection::SelectionStore;
use super::types::{CursorDirection, FilterMode, PickerEvent, SessionOutcome};

pub struct PickerSession<'a> {
    filter: FilterEngine<'a>,
    selection: SelectionStore,
}

impl<'a> PickerSession<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            filter: FilterEngine::new(catalog),
            selection: SelectionStore::for_catalog(catalog),
        }
    }

    #[must_use]
    pub fn filter(&self) -> &FilterEngine<'a> {
        &self.filter
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// Processes one event. Returns the session outcome when the event
    /// ends the session, `None` while it stays active.
    ///
    /// Escape clears an active filter before it ever cancels: only with an
    /// empty query and no composition in progress does it end the session.
    /// Confirm while composing commits the filter text instead of
    /// confirming, so enter never accidentally ends a search.
    pub fn step(&mut self, event: PickerEvent) -> Option<SessionOutcome> {
        match event {
            PickerEvent::Cancel => return Some(SessionOutcome::Cancelled),

            PickerEvent::Escape => {
                if self.has_active_filter() {
                    self.filter.clear_query();
                } else {
                    return Some(SessionOutcome::Cancelled);
                }
            }

            PickerEvent::Confirm => {
                if self.filter.mode() == FilterMode::Filtering {
                    self.filter.commit();
                } else {
                    return Some(SessionOutcome::Confirmed(self.selection.snapshot()));
                }
            }

            PickerEvent::Toggle => {
                if self.filter.mode() == FilterMode::Filtering {
                    // Filter text wins while composing: the toggle key is a
                    // literal space in the query.
                    self.filter.push_char(' ');
                } else if let Some(entry) = self.filter.cursor_entry() {
                    let name = entry.name.clone();
                    self.selection.toggle(&name);
                }
            }

            PickerEvent::BeginFilter => {
                if self.filter.mode() != FilterMode::Filtering {
                    self.filter.begin_filtering();
                }
            }

            PickerEvent::Input(c) => {
                if self.filter.mode() == FilterMode::Filtering {
                    self.filter.push_char(c);
                }
            }

            PickerEvent::Backspace => {
                if self.filter.mode() == FilterMode::Filtering {
                    self.filter.pop_char();
                }
            }

            PickerEvent::CursorUp => self.filter.move_cursor(CursorDirection::Up),
            PickerEvent::CursorDown => self.filter.move_cursor(CursorDirection::Down),
        }

        None
    }

    fn has_active_filter(&self) -> bool {
        self.filter.mode() == FilterMode::Filtering || !self.filter.query().is_empty()
    }
}
