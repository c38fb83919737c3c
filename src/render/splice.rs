//! Column-addressed splicing of styled lines.
//!
//! `splice_chunk` overwrites the columns `[start_col, start_col + width(replacement))` of a
//! styled line with `replacement`, keeping the styling of whatever the cut leaves behind on
//! either side. The line is walked once, span by span; each span's column interval is compared
//! with the insertion window and the span is copied, dropped, or trimmed accordingly.

use std::borrow::Cow;

use crate::core::text::slice::{skip_width, take_width};
use crate::core::text::span::{parse_spans, StyledSpan};
use crate::core::text::width::{UnicodeWidth, WidthMeasurer};

/// Half-open column interval replaced by the chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWindow {
    pub start: usize,
    pub end: usize,
}

/// Where a span sits relative to a [`ColumnWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanPlacement {
    /// Entirely left of the window.
    Before,
    /// Entirely covered by the window.
    Inside,
    /// Entirely right of the window.
    After,
    /// Partially covered. `keep_left` is the number of leading columns that survive left of the
    /// window, `skip_right` the number of leading columns to drop before the right remnant.
    Straddling {
        keep_left: Option<usize>,
        skip_right: Option<usize>,
    },
}

impl ColumnWindow {
    pub fn new(start: usize, width: usize) -> Self {
        Self {
            start,
            end: start.saturating_add(width),
        }
    }

    pub fn width(&self) -> usize {
        self.end - self.start
    }

    /// Classifies the span occupying `[span_start, span_start + span_width)`.
    ///
    /// Escape-only spans hold no columns and are never dropped: they count as `Before` left of
    /// the window start and as `After` anywhere else. Zero-width visible text (a separately
    /// styled combining mark) belongs to the glyph on its left, so it is `Inside` when that glyph
    /// is overwritten.
    pub fn classify(&self, span_start: usize, span_width: usize, escape_only: bool) -> SpanPlacement {
        let span_end = span_start + span_width;
        if span_width == 0 {
            if escape_only {
                return if span_start < self.start {
                    SpanPlacement::Before
                } else {
                    SpanPlacement::After
                };
            }
            return if span_start <= self.start {
                SpanPlacement::Before
            } else if span_start <= self.end {
                SpanPlacement::Inside
            } else {
                SpanPlacement::After
            };
        }
        if span_end <= self.start {
            return SpanPlacement::Before;
        }
        if span_start >= self.end {
            return SpanPlacement::After;
        }
        if span_start >= self.start && span_end <= self.end {
            return SpanPlacement::Inside;
        }
        SpanPlacement::Straddling {
            keep_left: (span_start < self.start).then(|| self.start - span_start),
            skip_right: (span_end > self.end).then(|| self.end - span_start),
        }
    }
}

/// Overwrites `line` at `start_col` with `replacement` using [`UnicodeWidth`].
pub fn splice_chunk(line: &str, replacement: &str, start_col: usize) -> String {
    splice_chunk_with(&UnicodeWidth, line, replacement, start_col)
}

/// Overwrites `line` at `start_col` with `replacement`.
///
/// Lines narrower than `start_col` are padded with plain spaces first. `replacement` is emitted
/// verbatim exactly once. A wide character cut by either window edge becomes a space inside its
/// original styling so that the columns on both sides stay aligned.
pub fn splice_chunk_with<M: WidthMeasurer + ?Sized>(
    measurer: &M,
    line: &str,
    replacement: &str,
    start_col: usize,
) -> String {
    let window = ColumnWindow::new(start_col, measurer.str_width(replacement));
    let target = pad_target(measurer, line, start_col);

    tracing::trace!(
        start_col = window.start,
        replacement_width = window.width(),
        line_len = line.len(),
        "splice"
    );

    let mut out = String::with_capacity(target.len() + replacement.len());
    let mut inserted = false;
    let mut col = 0;

    for span in parse_spans(&target) {
        let span_width = measurer.str_width(&span.content);
        match window.classify(col, span_width, span.content.is_empty()) {
            SpanPlacement::Before => span.push_to(&mut out),
            SpanPlacement::Inside => {
                insert_once(&mut out, replacement, &mut inserted);
            }
            SpanPlacement::After => {
                insert_once(&mut out, replacement, &mut inserted);
                if col == window.end && window.width() > 0 {
                    // Marks at the window end belonged to an overwritten glyph.
                    out.push_str(&span.rewrap(drop_leading_zero_width(measurer, &span.content)));
                } else {
                    span.push_to(&mut out);
                }
            }
            SpanPlacement::Straddling {
                keep_left,
                skip_right,
            } => {
                if let Some(cols) = keep_left {
                    out.push_str(&left_remnant(measurer, &span, cols));
                }
                insert_once(&mut out, replacement, &mut inserted);
                if let Some(cols) = skip_right {
                    out.push_str(&right_remnant(measurer, &span, cols, span_width - cols));
                }
            }
        }
        col += span_width;
    }

    insert_once(&mut out, replacement, &mut inserted);
    out
}

fn pad_target<'a, M: WidthMeasurer + ?Sized>(measurer: &M, line: &'a str, start_col: usize) -> Cow<'a, str> {
    let width = if line.is_empty() { 0 } else { measurer.str_width(line) };
    if width >= start_col {
        return Cow::Borrowed(line);
    }
    let mut padded = String::with_capacity(line.len() + start_col - width);
    padded.push_str(line);
    padded.extend(std::iter::repeat(' ').take(start_col - width));
    Cow::Owned(padded)
}

fn drop_leading_zero_width<'a, M: WidthMeasurer + ?Sized>(measurer: &M, text: &'a str) -> &'a str {
    let cut = text
        .char_indices()
        .find(|&(_, ch)| measurer.char_width(ch) > 0)
        .map_or(text.len(), |(idx, _)| idx);
    &text[cut..]
}

fn insert_once(out: &mut String, replacement: &str, inserted: &mut bool) {
    if !*inserted {
        out.push_str(replacement);
        *inserted = true;
    }
}

fn left_remnant<M: WidthMeasurer + ?Sized>(measurer: &M, span: &StyledSpan, cols: usize) -> String {
    let (mut kept, kept_width) = take_width(measurer, &span.content, cols);
    kept.extend(std::iter::repeat(' ').take(cols - kept_width));
    span.rewrap(&kept)
}

fn right_remnant<M: WidthMeasurer + ?Sized>(
    measurer: &M,
    span: &StyledSpan,
    skip: usize,
    remaining: usize,
) -> String {
    let (rest, rest_width) = skip_width(measurer, &span.content, skip);
    let mut kept = String::with_capacity(rest.len() + 1);
    kept.extend(std::iter::repeat(' ').take(remaining.saturating_sub(rest_width)));
    kept.push_str(&rest);
    span.rewrap(&kept)
}
