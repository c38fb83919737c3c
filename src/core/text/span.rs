//! Styled span parsing.
//!
//! A rendered line is split into spans of the shape `open + content + close`, where `open` and
//! `close` are escape sequences (possibly empty) and `content` is visible text. Concatenating
//! every span in order reproduces the input byte for byte.

use super::ansi::{is_terminator, ESC};

/// One styling envelope around a run of visible text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledSpan {
    pub open: String,
    pub content: String,
    pub close: String,
}

impl StyledSpan {
    /// Unstyled run of text.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.content.is_empty() && self.close.is_empty()
    }

    /// Wraps `content` in this span's envelope.
    pub fn rewrap(&self, content: &str) -> String {
        let mut out = String::with_capacity(self.open.len() + content.len() + self.close.len());
        out.push_str(&self.open);
        out.push_str(content);
        out.push_str(&self.close);
        out
    }

    pub fn push_to(&self, out: &mut String) {
        out.push_str(&self.open);
        out.push_str(&self.content);
        out.push_str(&self.close);
    }
}

/// Parser position relative to the current span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Collecting visible text.
    Plain,
    /// Inside the span's opening sequence.
    Opening,
    /// Inside the span's closing sequence.
    Closing,
}

#[derive(Debug, Default)]
struct SpanParser {
    spans: Vec<StyledSpan>,
    current: StyledSpan,
}

impl SpanParser {
    fn flush(&mut self) {
        let span = std::mem::take(&mut self.current);
        if !span.is_empty() {
            self.spans.push(span);
        }
    }

    fn step(&mut self, state: ParseState, ch: char) -> ParseState {
        match state {
            ParseState::Plain if ch == ESC => {
                if self.current.open.is_empty() {
                    if !self.current.content.is_empty() {
                        self.flush();
                    }
                    self.current.open.push(ch);
                    ParseState::Opening
                } else {
                    self.current.close.push(ch);
                    ParseState::Closing
                }
            }
            ParseState::Plain => {
                self.current.content.push(ch);
                ParseState::Plain
            }
            ParseState::Opening => {
                self.current.open.push(ch);
                if is_terminator(ch) {
                    ParseState::Plain
                } else {
                    ParseState::Opening
                }
            }
            ParseState::Closing => {
                self.current.close.push(ch);
                if is_terminator(ch) {
                    self.flush();
                    ParseState::Plain
                } else {
                    ParseState::Closing
                }
            }
        }
    }

    fn finish(mut self) -> Vec<StyledSpan> {
        self.flush();
        self.spans
    }
}

/// Splits `line` into styled spans.
///
/// Unterminated escape sequences at the end of input stay in the last span's `open` or `close`.
pub fn parse_spans(line: &str) -> Vec<StyledSpan> {
    let mut parser = SpanParser::default();
    line.chars()
        .fold(ParseState::Plain, |state, ch| parser.step(state, ch));
    parser.finish()
}

/// Concatenates spans back into a line.
pub fn join_spans(spans: &[StyledSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        span.push_to(&mut out);
    }
    out
}
