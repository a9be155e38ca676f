//! The filter engine: reduces the catalog to a visible subset and owns the
//! cursor position within it.
//!
//! Matching is fuzzy and case-insensitive via [`SkimMatcherV2`], preserving
//! catalog order among matches. The visible subset is recomputed on every
//! query change; the cursor is re-clamped whenever the subset changes.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use mcp_picker_core::server_definitions::{Catalog, ServerEntry};

use super::types::{CursorDirection, FilterMode};

pub struct FilterEngine<'a> {
    catalog: &'a Catalog,
    matcher: SkimMatcherV2,
    query: String,
    mode: FilterMode,
    cursor: usize,
    visible: Vec<usize>,
}

impl<'a> FilterEngine<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        let mut engine = Self {
            catalog,
            matcher: SkimMatcherV2::default(),
            query: String::new(),
            mode: FilterMode::Unfiltered,
            cursor: 0,
            visible: Vec::new(),
        };
        engine.recompute_visible();
        engine
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Catalog indices of the entries matching the current query, in
    /// catalog order.
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &ServerEntry> {
        self.visible
            .iter()
            .filter_map(|&index| self.catalog.entry(index))
    }

    /// The entry under the cursor, if anything is visible.
    #[must_use]
    pub fn cursor_entry(&self) -> Option<&ServerEntry> {
        self.visible
            .get(self.cursor)
            .and_then(|&index| self.catalog.entry(index))
    }

    /// Replaces the query wholesale and recomputes the visible subset.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
        self.mode = if self.query.is_empty() {
            FilterMode::Unfiltered
        } else {
            FilterMode::Filtering
        };
        self.recompute_visible();
    }

    /// Enters text composition. The existing query is retained.
    pub fn begin_filtering(&mut self) {
        self.mode = FilterMode::Filtering;
    }

    /// Appends one character of filter text.
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.recompute_visible();
    }

    /// Removes the last character of filter text. No-op on an empty query.
    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.recompute_visible();
        }
    }

    /// Leaves text composition, keeping the query in effect.
    pub fn commit(&mut self) {
        self.mode = if self.query.is_empty() {
            FilterMode::Unfiltered
        } else {
            FilterMode::Filtered
        };
    }

    /// Empties the query and returns to `Unfiltered`.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.mode = FilterMode::Unfiltered;
        self.recompute_visible();
    }

    /// Moves the cursor within the visible subset. No wraparound: the
    /// cursor stops at either end. No-op when nothing is visible.
    pub fn move_cursor(&mut self, direction: CursorDirection) {
        if self.visible.is_empty() {
            return;
        }

        match direction {
            CursorDirection::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            CursorDirection::Down => {
                if self.cursor + 1 < self.visible.len() {
                    self.cursor += 1;
                }
            }
        }
    }

    fn recompute_visible(&mut self) {
        self.visible = self
            .catalog
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                if self.query.is_empty() {
                    return Some(index);
                }
                self.matcher
                    .fuzzy_match(&entry.name, &self.query)
                    .map(|_| index)
            })
            .collect();

        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        if self.visible.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len() - 1;
        }
    }
}
