//! Picker styling.
//!
//! Colors are carried in a [`PickerTheme`] value handed to the UI at
//! session start, rather than process-wide style state. The default
//! palette is gruvbox.

use crossterm::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerTheme {
    /// Title / header text.
    pub title: Color,
    /// The cursor marker on the highlighted row.
    pub cursor: Color,
    /// Rows whose entry is currently selected.
    pub selected: Color,
    /// Key help and the filter prompt.
    pub help: Color,
}

impl Default for PickerTheme {
    fn default() -> Self {
        Self {
            title: Color::Rgb {
                r: 0xfe,
                g: 0x80,
                b: 0x19,
            },
            cursor: Color::Rgb {
                r: 0xd3,
                g: 0x86,
                b: 0x9b,
            },
            selected: Color::Rgb {
                r: 0xb8,
                g: 0xbb,
                b: 0x26,
            },
            help: Color::Rgb {
                r: 0x92,
                g: 0x83,
                b: 0x74,
            },
        }
    }
}
