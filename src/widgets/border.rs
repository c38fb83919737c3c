//! Border frames for modal boxes.
//!
//! [`build_frame`] derives a [`BorderFrame`] from a color, an optional title and a width.
//! [`BorderFrame::render`] then draws the frame around a block of already-rendered lines.

use crate::core::color::Color;
use crate::core::text::slice::{pad_to_width, take_width};
use crate::core::text::width::{UnicodeWidth, WidthMeasurer};

const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

/// Glyphs where frames meet when callers merge them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Junctions {
    pub left: String,
    pub right: String,
    pub top: String,
    pub bottom: String,
    pub cross: String,
}

impl Junctions {
    fn single_line() -> Self {
        Self {
            left: "├".to_string(),
            right: "┤".to_string(),
            top: "┬".to_string(),
            bottom: "┴".to_string(),
            cross: "┼".to_string(),
        }
    }
}

/// Edge, corner, and junction glyphs of a box, plus the color they are drawn in.
///
/// Horizontal edges may hold more than one glyph (a titled top edge does); they are cycled or
/// cut to the interior width when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderFrame {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub junctions: Junctions,
    pub color: Color,
}

/// Blank cells between a frame and its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: usize) -> Self {
        Self::new(value, value, value, value)
    }
}

impl BorderFrame {
    /// Frame with no glyphs; renders content without a border.
    pub fn none() -> Self {
        Self::default()
    }

    /// Single-line border with square corners.
    pub fn uniform(color: Color) -> Self {
        Self {
            top: HORIZONTAL.to_string(),
            bottom: HORIZONTAL.to_string(),
            left: VERTICAL.to_string(),
            right: VERTICAL.to_string(),
            top_left: "┌".to_string(),
            top_right: "┐".to_string(),
            bottom_left: "└".to_string(),
            bottom_right: "┘".to_string(),
            junctions: Junctions::single_line(),
            color,
        }
    }

    /// Rounded single-line border whose top edge carries `title`.
    pub fn titled(color: Color, title: &str, width: usize) -> Self {
        Self::titled_with(&UnicodeWidth, color, title, width)
    }

    /// Like [`BorderFrame::titled`], measuring the title with `measurer`.
    ///
    /// The top edge is exactly `width + 2` columns: a dash, the title cut to at most
    /// `width + 1` columns, then dashes.
    pub fn titled_with<M: WidthMeasurer + ?Sized>(
        measurer: &M,
        color: Color,
        title: &str,
        width: usize,
    ) -> Self {
        let top_len = width + 2;
        let (title, title_width) = take_width(measurer, title, top_len - 1);

        let mut top = String::with_capacity(title.len() + top_len * HORIZONTAL.len());
        top.push_str(HORIZONTAL);
        top.push_str(&title);
        top.push_str(&HORIZONTAL.repeat(top_len - 1 - title_width));

        Self {
            top,
            bottom: HORIZONTAL.to_string(),
            left: VERTICAL.to_string(),
            right: VERTICAL.to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            junctions: Junctions::single_line(),
            color,
        }
    }

    /// Whether the frame draws nothing.
    pub fn is_none(&self) -> bool {
        self.top.is_empty()
            && self.bottom.is_empty()
            && self.left.is_empty()
            && self.right.is_empty()
            && self.top_left.is_empty()
            && self.top_right.is_empty()
            && self.bottom_left.is_empty()
            && self.bottom_right.is_empty()
    }

    /// Draws the frame around `lines` using [`UnicodeWidth`].
    pub fn render<S: AsRef<str>>(&self, lines: &[S], padding: Padding) -> Vec<String> {
        self.render_with(&UnicodeWidth, lines, padding)
    }

    /// Draws the frame around `lines`.
    ///
    /// Lines are padded to the widest one, then `padding` is applied, then the border.
    pub fn render_with<M: WidthMeasurer + ?Sized, S: AsRef<str>>(
        &self,
        measurer: &M,
        lines: &[S],
        padding: Padding,
    ) -> Vec<String> {
        let block_width = lines
            .iter()
            .map(|line| measurer.str_width(line.as_ref()))
            .max()
            .unwrap_or(0);
        let inner_width = padding.left + block_width + padding.right;
        let blank = " ".repeat(inner_width);
        let left_pad = " ".repeat(padding.left);
        let right_pad = " ".repeat(padding.right);

        let mut body = Vec::with_capacity(padding.top + lines.len() + padding.bottom);
        body.extend(std::iter::repeat(blank.clone()).take(padding.top));
        for line in lines {
            let mut row = String::with_capacity(inner_width + line.as_ref().len());
            row.push_str(&left_pad);
            row.push_str(&pad_to_width(measurer, line.as_ref(), block_width));
            row.push_str(&right_pad);
            body.push(row);
        }
        body.extend(std::iter::repeat(blank).take(padding.bottom));

        if self.is_none() {
            return body;
        }

        let left = self.color.paint(&self.left);
        let right = self.color.paint(&self.right);

        let mut out = Vec::with_capacity(body.len() + 2);
        out.push(self.color.paint(&format!(
            "{}{}{}",
            self.top_left,
            fit_edge(measurer, &self.top, inner_width),
            self.top_right
        )));
        for row in body {
            out.push(format!("{left}{row}{right}"));
        }
        out.push(self.color.paint(&format!(
            "{}{}{}",
            self.bottom_left,
            fit_edge(measurer, &self.bottom, inner_width),
            self.bottom_right
        )));
        out
    }
}

/// Builds the frame for a modal box using [`UnicodeWidth`].
///
/// Non-positive widths give [`BorderFrame::none`]; an empty title gives
/// [`BorderFrame::uniform`].
pub fn build_frame(color: Color, title: &str, width: isize) -> BorderFrame {
    build_frame_with(&UnicodeWidth, color, title, width)
}

pub fn build_frame_with<M: WidthMeasurer + ?Sized>(
    measurer: &M,
    color: Color,
    title: &str,
    width: isize,
) -> BorderFrame {
    let Ok(width) = usize::try_from(width) else {
        return BorderFrame::none();
    };
    if width == 0 {
        return BorderFrame::none();
    }
    if title.is_empty() {
        return BorderFrame::uniform(color);
    }
    BorderFrame::titled_with(measurer, color, title, width)
}

/// Repeats `edge`'s glyphs until `width` columns are filled, cutting whatever does not fit.
fn fit_edge<M: WidthMeasurer + ?Sized>(measurer: &M, edge: &str, width: usize) -> String {
    let mut out = String::new();
    let mut filled = 0;
    if measurer.str_width(edge) > 0 {
        'fill: loop {
            for ch in edge.chars() {
                let ch_width = measurer.char_width(ch);
                if filled + ch_width > width {
                    break 'fill;
                }
                out.push(ch);
                filled += ch_width;
            }
        }
    }
    out.extend(std::iter::repeat(' ').take(width - filled));
    out
}
