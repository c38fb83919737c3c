//! Width-aware slicing of plain (escape-free) text.

use super::width::WidthMeasurer;

/// Longest prefix of `text` that fits in `cols` columns, with its width.
///
/// Zero-width characters following a kept character stay attached to it.
pub fn take_width<M: WidthMeasurer + ?Sized>(measurer: &M, text: &str, cols: usize) -> (String, usize) {
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = measurer.char_width(ch);
        if width + ch_width > cols {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    (out, width)
}

/// Remainder of `text` after consuming at least `cols` columns, with its width.
///
/// A wide character straddling the cut is consumed whole, so the returned text may start one
/// column later than asked. Zero-width characters right after the cut go with the skipped part,
/// mirroring [`take_width`].
pub fn skip_width<M: WidthMeasurer + ?Sized>(measurer: &M, text: &str, cols: usize) -> (String, usize) {
    let mut consumed = 0;
    let mut rest_width = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices() {
        let ch_width = measurer.char_width(ch);
        let cut_pending = start == text.len();
        if cut_pending && (consumed < cols || (consumed > 0 && ch_width == 0)) {
            consumed += ch_width;
            continue;
        }
        if cut_pending {
            start = idx;
        }
        rest_width += ch_width;
    }
    (text[start..].to_string(), rest_width)
}

/// Right-pads `text` with spaces to `cols` columns.
pub fn pad_to_width<M: WidthMeasurer + ?Sized>(measurer: &M, text: &str, cols: usize) -> String {
    let width = measurer.str_width(text);
    if width >= cols {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + cols - width);
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(cols - width));
    out
}

/// Greedy word wrap of unstyled text.
///
/// Hard newlines are kept, words longer than `width` are broken by column, and runs of spaces at
/// a break are dropped.
pub fn wrap_plain<M: WidthMeasurer + ?Sized>(measurer: &M, text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split(' ') {
            let word_width = measurer.str_width(word);
            let gap = usize::from(!current.is_empty());

            if current_width + gap + word_width <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            let mut rest = word.to_string();
            while measurer.str_width(&rest) > width {
                let (head, head_width) = take_width(measurer, &rest, width);
                if head_width == 0 {
                    break;
                }
                rest = rest[head.len()..].to_string();
                lines.push(head);
            }
            current_width = measurer.str_width(&rest);
            current = rest;
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::{pad_to_width, skip_width, take_width, wrap_plain};
    use crate::core::text::width::UnicodeWidth;

    #[test]
    fn take_stops_before_wide_char_that_overflows() {
        assert_eq!(take_width(&UnicodeWidth, "a你b", 2), ("a".to_string(), 1));
        assert_eq!(take_width(&UnicodeWidth, "a你b", 3), ("a你".to_string(), 3));
    }

    #[test]
    fn skip_consumes_straddling_wide_char() {
        assert_eq!(skip_width(&UnicodeWidth, "a你b", 2), ("b".to_string(), 1));
        assert_eq!(skip_width(&UnicodeWidth, "hello", 0), ("hello".to_string(), 5));
        assert_eq!(skip_width(&UnicodeWidth, "hi", 5), (String::new(), 0));
    }

    #[test]
    fn combining_marks_stay_on_one_side_of_a_cut() {
        let (head, _) = take_width(&UnicodeWidth, "e\u{301}x", 1);
        let (tail, tail_width) = skip_width(&UnicodeWidth, "e\u{301}x", 1);
        assert_eq!(head, "e\u{301}");
        assert_eq!((tail.as_str(), tail_width), ("x", 1));
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad_to_width(&UnicodeWidth, "ab", 4), "ab  ");
        assert_eq!(pad_to_width(&UnicodeWidth, "abcdef", 4), "abcdef");
    }

    #[test]
    fn wrap_splits_on_spaces() {
        assert_eq!(wrap_plain(&UnicodeWidth, "word word", 4), vec!["word", "word"]);
        assert_eq!(wrap_plain(&UnicodeWidth, "a b c", 3), vec!["a b", "c"]);
    }

    #[test]
    fn wrap_breaks_long_words_and_keeps_newlines() {
        assert_eq!(
            wrap_plain(&UnicodeWidth, "abcdefg\nhi", 3),
            vec!["abc", "def", "g", "hi"]
        );
    }
}
