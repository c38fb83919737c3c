//! ANSI-aware modal compositor.
//!
//! Invariant: inputs are never mutated; every operation takes rendered strings and returns a new
//! string, so styling escape sequences already present in the background survive compositing.
//!
//! # Public API Overview
//! - Parse rendered lines into styled spans with [`parse_spans`].
//! - Overwrite a column range of a styled line with [`splice_chunk`].
//! - Center a rendered box over a rendered screen with [`composite_modal`].
//! - Build and draw bordered, optionally titled boxes with [`build_frame`] and [`BorderFrame`].
//! - Keep dialog state across redraws with [`Modal`], hosting any [`ModalContent`] such as
//!   [`Alert`].
//!
//! Width measurement is pluggable through [`WidthMeasurer`]; the `*_with` variants take a
//! measurer, the plain ones use [`UnicodeWidth`].

pub mod config;
pub mod logging;
pub mod theme;

pub mod core;
pub mod render;
pub mod runtime;
pub mod widgets;

/// Colors and color parsing.
pub use crate::core::color::{Color, ColorParseError};
/// Component traits.
pub use crate::core::component::{Component, ModalContent};
/// Span model and parser.
pub use crate::core::text::span::{join_spans, parse_spans, ParseState, StyledSpan};
/// Width measurement.
pub use crate::core::text::width::{visible_width, UnicodeWidth, WidthMeasurer};
/// Splicing and compositing.
pub use crate::render::overlay::{block_size, composite_lines, composite_modal, composite_modal_with, ModalPlacement};
pub use crate::render::splice::{splice_chunk, splice_chunk_with, ColumnWindow, SpanPlacement};
/// Modal runtime.
pub use crate::runtime::modal::{Modal, DEFAULT_BORDER_COLOR, MODAL_PADDING};
/// Host palette.
pub use crate::theme::Theme;
/// Built-in widgets and frames.
pub use crate::widgets::{build_frame, build_frame_with, Alert, AlertKind, BorderFrame, Junctions, Padding};

/// Environment configuration and logging setup.
pub use crate::config::EnvConfig;
pub use crate::logging::LoggingError;
