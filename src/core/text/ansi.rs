//! Escape-sequence boundaries.
//!
//! An escape sequence starts at `ESC` (0x1B) and ends at the first following character whose
//! code point falls in `0x40..=0x5A` or `0x61..=0x7A`. Width measurement and span parsing must
//! agree on these cut points.

/// Escape-sequence marker.
pub const ESC: char = '\x1b';

/// Resets all SGR attributes.
pub const SGR_RESET: &str = "\x1b[0m";

/// Returns whether `ch` terminates an escape sequence.
#[inline]
pub fn is_terminator(ch: char) -> bool {
    matches!(ch as u32, 0x40..=0x5a | 0x61..=0x7a)
}

/// Returns the byte length of the escape sequence starting at `pos`, if one starts there.
///
/// Unterminated sequences run to the end of `input`.
pub fn escape_len(input: &str, pos: usize) -> Option<usize> {
    let rest = input.get(pos..)?;
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, ESC)) => {}
        _ => return None,
    }
    for (offset, ch) in chars {
        if is_terminator(ch) {
            return Some(offset + ch.len_utf8());
        }
    }
    Some(rest.len())
}

/// Removes every escape sequence from `input`.
pub fn strip_escapes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_escape = false;
    for ch in input.chars() {
        if in_escape {
            in_escape = !is_terminator(ch);
        } else if ch == ESC {
            in_escape = true;
        } else {
            out.push(ch);
        }
    }
    out
}
