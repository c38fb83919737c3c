//! Display width measurement.
//!
//! Compositing is parametric over a [`WidthMeasurer`]. The only requirement is additivity over
//! plain-text runs: the width of a string is the sum of the widths of its characters, with
//! escape sequences contributing nothing.

use unicode_width::UnicodeWidthChar;

use super::ansi::{is_terminator, ESC};

/// Terminal column width oracle.
pub trait WidthMeasurer {
    /// Width of a single visible code point.
    fn char_width(&self, ch: char) -> usize;

    /// Width of `text`, ignoring escape sequences.
    fn str_width(&self, text: &str) -> usize {
        let mut width = 0;
        let mut in_escape = false;
        for ch in text.chars() {
            if in_escape {
                in_escape = !is_terminator(ch);
            } else if ch == ESC {
                in_escape = true;
            } else {
                width += self.char_width(ch);
            }
        }
        width
    }
}

impl<M: WidthMeasurer + ?Sized> WidthMeasurer for &M {
    fn char_width(&self, ch: char) -> usize {
        (**self).char_width(ch)
    }

    fn str_width(&self, text: &str) -> usize {
        (**self).str_width(text)
    }
}

/// Measurer backed by the Unicode East Asian Width tables.
///
/// Wide characters take two columns, combining marks and control characters take none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeWidth;

impl WidthMeasurer for UnicodeWidth {
    fn char_width(&self, ch: char) -> usize {
        UnicodeWidthChar::width(ch).unwrap_or(0)
    }
}

/// Visible width of `input` under [`UnicodeWidth`].
pub fn visible_width(input: &str) -> usize {
    if input.is_empty() {
        return 0;
    }
    UnicodeWidth.str_width(input)
}
