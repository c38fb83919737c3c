//! Property-based invariant tests for span parsing, splicing, and modal compositing.
//!
//! 1. Parsing then joining spans reproduces the input exactly.
//! 2. Splicing an empty chunk leaves the visible text unchanged (apart from padding).
//! 3. Spliced lines are exactly as wide as the wider of the padded line and the chunk's end.
//! 4. The chunk starts exactly at the requested column, no mark combines onto it, and the tail
//!    keeps its text.
//! 5. Compositing centers the box and never changes the background's row count.
//! 6. Zero screen dimensions return the background unchanged.

use modal_overlay::core::text::ansi::strip_escapes;
use modal_overlay::{
    composite_lines, composite_modal, join_spans, parse_spans, splice_chunk, visible_width, UnicodeWidth,
};

use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_open() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just("\x1b[31m"),
        Just("\x1b[1;4m"),
        Just("\x1b[38;5;200m"),
        Just("\x1b[38;2;137;180;250m"),
    ]
}

fn arb_segment(text: &'static str) -> impl Strategy<Value = String> {
    (arb_open(), text).prop_map(|(open, content)| {
        if open.is_empty() {
            content
        } else {
            format!("{open}{content}\x1b[0m")
        }
    })
}

/// Styled line made only of lowercase ASCII and spaces.
fn arb_ascii_line() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment("[a-z ]{0,8}"), 0..6).prop_map(|segments| segments.concat())
}

/// Styled line that may contain double-width characters and combining marks.
fn arb_wide_line() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment("[a-z 你好世\u{301}]{0,8}"), 0..6).prop_map(|segments| segments.concat())
}

/// Chunk made of characters that never occur in generated lines.
fn arb_chunk() -> impl Strategy<Value = String> {
    ("[X-Z]{1,6}", any::<bool>()).prop_map(|(text, styled)| {
        if styled {
            format!("\x1b[7m{text}\x1b[0m")
        } else {
            text
        }
    })
}

fn pad_plain(text: &str, cols: usize) -> String {
    let width = text.chars().count();
    let mut out = text.to_string();
    out.extend(std::iter::repeat(' ').take(cols.saturating_sub(width)));
    out
}

// ── Span parsing ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn parse_join_round_trips_escape_heavy_input(line in "[\x1b\\[0-9;mA-Za-z 你]{0,40}") {
        prop_assert_eq!(join_spans(&parse_spans(&line)), line);
    }

    #[test]
    fn parse_join_round_trips_arbitrary_text(line in any::<String>()) {
        prop_assert_eq!(join_spans(&parse_spans(&line)), line);
    }

    #[test]
    fn parsed_content_is_the_visible_text(line in arb_wide_line()) {
        let content: String = parse_spans(&line).iter().map(|span| span.content.as_str()).collect();
        prop_assert_eq!(content, strip_escapes(&line));
    }
}

// ── Splicing ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn empty_chunk_keeps_visible_text(line in arb_ascii_line(), col in 0usize..40) {
        let out = splice_chunk(&line, "", col);
        prop_assert_eq!(strip_escapes(&out), pad_plain(&strip_escapes(&line), col));
    }

    #[test]
    fn spliced_width_is_exact(line in arb_wide_line(), chunk in arb_chunk(), col in 0usize..40) {
        let out = splice_chunk(&line, &chunk, col);
        let expected = visible_width(&line).max(col).max(col + visible_width(&chunk));
        prop_assert_eq!(visible_width(&out), expected);
    }

    #[test]
    fn chunk_lands_at_requested_column(line in arb_wide_line(), chunk in arb_chunk(), col in 0usize..40) {
        let out = splice_chunk(&line, &chunk, col);
        let at = out.find(chunk.as_str());
        prop_assert!(at.is_some(), "chunk missing from {:?}", out);
        let at = at.unwrap_or_default();
        prop_assert_eq!(visible_width(&out[..at]), col);

        let tail = strip_escapes(&out[at + chunk.len()..]);
        prop_assert!(!tail.starts_with('\u{301}'), "mark combines onto the chunk in {:?}", out);
    }

    #[test]
    fn tail_text_survives(line in arb_ascii_line(), chunk in arb_chunk(), col in 0usize..40) {
        let out = splice_chunk(&line, &chunk, col);
        let chunk_width = visible_width(&chunk);
        let at = out.find(chunk.as_str()).unwrap_or_default();
        let tail = strip_escapes(&out[at + chunk.len()..]);

        let padded = pad_plain(&strip_escapes(&line), col);
        let expected: String = padded.chars().skip(col + chunk_width).collect();
        prop_assert_eq!(tail, expected);
    }

    #[test]
    fn tail_width_survives_marks(line in arb_wide_line(), chunk in arb_chunk(), col in 0usize..40) {
        let out = splice_chunk(&line, &chunk, col);
        let chunk_width = visible_width(&chunk);
        let at = out.find(chunk.as_str()).unwrap_or_default();
        let tail_width = visible_width(&out[at + chunk.len()..]);
        prop_assert_eq!(tail_width, visible_width(&line).max(col).saturating_sub(col + chunk_width));
    }

    #[test]
    fn chunk_appears_exactly_once(line in arb_wide_line(), chunk in arb_chunk(), col in 0usize..40) {
        let out = splice_chunk(&line, &chunk, col);
        let marker = strip_escapes(&chunk);
        prop_assert_eq!(strip_escapes(&out).matches(marker.as_str()).count(), 1);
    }
}

// ── Compositing ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn box_is_centered(
        (screen_width, modal_width) in (1usize..60).prop_flat_map(|w| (Just(w), 1..=w)),
        (screen_height, modal_height) in (1usize..30).prop_flat_map(|h| (Just(h), 1..=h)),
    ) {
        let background = vec![".".repeat(screen_width); screen_height];
        let modal = vec!["M".repeat(modal_width); modal_height];
        let rows = composite_lines(&UnicodeWidth, &background, &modal, screen_width, screen_height);

        let start_row = (screen_height - modal_height) / 2;
        let start_col = (screen_width - modal_width) / 2;
        prop_assert_eq!(rows.len(), screen_height);
        for (row, line) in rows.iter().enumerate() {
            let expected = if (start_row..start_row + modal_height).contains(&row) {
                format!(
                    "{}{}{}",
                    ".".repeat(start_col),
                    "M".repeat(modal_width),
                    ".".repeat(screen_width - start_col - modal_width)
                )
            } else {
                ".".repeat(screen_width)
            };
            prop_assert_eq!(line, &expected);
        }
    }

    #[test]
    fn row_count_is_preserved(
        rows in 1usize..20,
        modal_height in 1usize..40,
        screen_width in 1usize..40,
        screen_height in 1usize..40,
    ) {
        let background = vec!["bg"; rows].join("\n");
        let modal = vec!["box"; modal_height].join("\n");
        let out = composite_modal(&background, &modal, screen_width, screen_height);
        prop_assert_eq!(out.split('\n').count(), rows);
    }

    #[test]
    fn zero_screen_defers_layout(background in arb_ascii_line(), modal in arb_chunk(), other in 0usize..40) {
        prop_assert_eq!(composite_modal(&background, &modal, 0, other), background.clone());
        prop_assert_eq!(composite_modal(&background, &modal, other, 0), background);
    }
}
