//! Modal compositing.
//!
//! A rendered modal box is centered over a rendered background and spliced in row by row. The
//! background's row count never changes: modal rows that would land past the last background
//! row are dropped.

use crate::core::text::width::{UnicodeWidth, WidthMeasurer};
use crate::render::splice::splice_chunk_with;

/// Top-left cell of a composited modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalPlacement {
    pub start_row: usize,
    pub start_col: usize,
}

impl ModalPlacement {
    /// Centers a `modal_width` x `modal_height` box on a `screen_width` x `screen_height` screen.
    ///
    /// Boxes larger than the screen are pinned to the top-left corner.
    pub fn centered(
        screen_width: usize,
        screen_height: usize,
        modal_width: usize,
        modal_height: usize,
    ) -> Self {
        Self {
            start_row: screen_height.saturating_sub(modal_height) / 2,
            start_col: screen_width.saturating_sub(modal_width) / 2,
        }
    }

    /// Index into the modal rows for background row `row`, if the modal covers it.
    pub fn modal_row(&self, row: usize, modal_height: usize) -> Option<usize> {
        let offset = row.checked_sub(self.start_row)?;
        (offset < modal_height).then_some(offset)
    }
}

/// Rendered size of a block of lines: widest row and row count.
pub fn block_size<M, L>(measurer: &M, lines: &[L]) -> (usize, usize)
where
    M: WidthMeasurer + ?Sized,
    L: AsRef<str>,
{
    let width = lines
        .iter()
        .map(|line| measurer.str_width(line.as_ref()))
        .max()
        .unwrap_or(0);
    (width, lines.len())
}

/// Composites `modal` over `background` using [`UnicodeWidth`].
pub fn composite_modal(
    background: &str,
    modal: &str,
    screen_width: usize,
    screen_height: usize,
) -> String {
    composite_modal_with(&UnicodeWidth, background, modal, screen_width, screen_height)
}

/// Composites `modal` centered over `background`.
///
/// A zero screen dimension means layout has not happened yet; the background is returned
/// unchanged.
pub fn composite_modal_with<M: WidthMeasurer + ?Sized>(
    measurer: &M,
    background: &str,
    modal: &str,
    screen_width: usize,
    screen_height: usize,
) -> String {
    if screen_width == 0 || screen_height == 0 {
        tracing::trace!(screen_width, screen_height, "modal composite deferred until layout");
        return background.to_string();
    }

    let background_lines: Vec<&str> = background.split('\n').collect();
    let modal_lines: Vec<&str> = modal.split('\n').collect();
    composite_lines(measurer, &background_lines, &modal_lines, screen_width, screen_height).join("\n")
}

/// Line-oriented form of [`composite_modal_with`].
pub fn composite_lines<M, B, L>(
    measurer: &M,
    background: &[B],
    modal: &[L],
    screen_width: usize,
    screen_height: usize,
) -> Vec<String>
where
    M: WidthMeasurer + ?Sized,
    B: AsRef<str>,
    L: AsRef<str>,
{
    if screen_width == 0 || screen_height == 0 {
        return background.iter().map(|line| line.as_ref().to_string()).collect();
    }

    let (modal_width, modal_height) = block_size(measurer, modal);
    let placement = ModalPlacement::centered(screen_width, screen_height, modal_width, modal_height);

    tracing::debug!(
        screen_width,
        screen_height,
        modal_width,
        modal_height,
        start_row = placement.start_row,
        start_col = placement.start_col,
        "compositing modal"
    );

    background
        .iter()
        .enumerate()
        .map(|(row, line)| match placement.modal_row(row, modal_height) {
            Some(idx) => splice_chunk_with(measurer, line.as_ref(), modal[idx].as_ref(), placement.start_col),
            None => line.as_ref().to_string(),
        })
        .collect()
}
