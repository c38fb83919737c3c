//! Modal dialog state and view.
//!
//! The host keeps one [`Modal`], feeds it the screen size on every resize, and on every redraw
//! passes its rendered background through [`Modal::view`].

use crate::core::color::Color;
use crate::core::component::ModalContent;
use crate::render::overlay::composite_modal;
use crate::widgets::border::{build_frame, Padding};

/// Border color used when the host does not supply one.
pub const DEFAULT_BORDER_COLOR: Color = Color::rgb(0x00, 0xff, 0x00);

/// Space between the modal border and its content.
pub const MODAL_PADDING: Padding = Padding::new(1, 1, 0, 1);

pub struct Modal {
    width: usize,
    height: usize,
    content: Box<dyn ModalContent>,
    visible: bool,
    title: String,
    border_color: Option<Color>,
}

impl Modal {
    /// Creates a hidden modal laid out for a `screen_width` x `screen_height` terminal.
    pub fn new(
        screen_width: usize,
        screen_height: usize,
        content: Box<dyn ModalContent>,
        title: impl Into<String>,
        border_color: Option<Color>,
    ) -> Self {
        let mut modal = Self {
            width: 0,
            height: 0,
            content,
            visible: false,
            title: title.into(),
            border_color,
        };
        modal.resize(screen_width, screen_height);
        modal
    }

    /// Recomputes the layout area for a new terminal size.
    ///
    /// The area is two columns narrower and four rows shorter than the screen; content gets the
    /// area minus two in each direction.
    pub fn resize(&mut self, screen_width: usize, screen_height: usize) {
        self.width = screen_width.saturating_sub(2);
        self.height = screen_height.saturating_sub(4);
        self.content
            .set_viewport_size(self.width.saturating_sub(2), self.height.saturating_sub(2));
    }

    /// Replaces the content and title, then shows the modal.
    pub fn open(&mut self, content: Box<dyn ModalContent>, title: impl Into<String>) {
        self.content = content;
        self.title = title.into();
        self.content
            .set_viewport_size(self.width.saturating_sub(2), self.height.saturating_sub(2));
        self.show();
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Layout area as `(width, height)`.
    pub fn area(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn border_color(&self) -> Color {
        self.border_color.unwrap_or(DEFAULT_BORDER_COLOR)
    }

    pub fn content_mut(&mut self) -> &mut dyn ModalContent {
        self.content.as_mut()
    }

    /// Hides the modal if its content allows it. Returns whether it closed.
    pub fn handle_escape(&mut self) -> bool {
        if !self.visible || !self.content.closes_on_escape() {
            return false;
        }
        tracing::debug!(title = %self.title, "modal closed on escape");
        self.visible = false;
        true
    }

    /// Renders the framed modal box on its own.
    pub fn render_box(&mut self) -> Vec<String> {
        let lines = self.content.render(self.width.saturating_sub(2));
        let width = isize::try_from(self.width).unwrap_or(isize::MAX);
        build_frame(self.border_color(), &self.title, width).render(&lines, MODAL_PADDING)
    }

    /// Composites the modal over `background`, or returns `background` when hidden or not
    /// laid out yet.
    pub fn view(&mut self, background: &str) -> String {
        if !self.visible || self.width == 0 || self.height == 0 {
            return background.to_string();
        }
        let modal = self.render_box().join("\n");
        composite_modal(background, &modal, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::{Modal, DEFAULT_BORDER_COLOR};
    use crate::core::color::Color;
    use crate::core::component::{Component, ModalContent};
    use crate::core::text::ansi::strip_escapes;
    use std::cell::Cell;
    use std::rc::Rc;

    struct StaticContent {
        lines: Vec<String>,
        closable: bool,
        viewport: Rc<Cell<(usize, usize)>>,
    }

    impl StaticContent {
        fn boxed(lines: &[&str], closable: bool) -> (Box<dyn ModalContent>, Rc<Cell<(usize, usize)>>) {
            let viewport = Rc::new(Cell::new((0, 0)));
            let content = Self {
                lines: lines.iter().map(|line| line.to_string()).collect(),
                closable,
                viewport: Rc::clone(&viewport),
            };
            (Box::new(content), viewport)
        }
    }

    impl Component for StaticContent {
        fn render(&mut self, _width: usize) -> Vec<String> {
            self.lines.clone()
        }

        fn set_viewport_size(&mut self, cols: usize, rows: usize) {
            self.viewport.set((cols, rows));
        }
    }

    impl ModalContent for StaticContent {
        fn closes_on_escape(&self) -> bool {
            self.closable
        }
    }

    fn blank(width: usize, height: usize) -> String {
        vec![".".repeat(width); height].join("\n")
    }

    #[test]
    fn layout_area_and_content_viewport() {
        let (content, viewport) = StaticContent::boxed(&["hi"], true);
        let modal = Modal::new(40, 20, content, "", None);
        assert_eq!(modal.area(), (38, 16));
        assert_eq!(viewport.get(), (36, 14));
        assert_eq!(modal.border_color(), DEFAULT_BORDER_COLOR);
    }

    #[test]
    fn tiny_screen_saturates_to_zero() {
        let (content, viewport) = StaticContent::boxed(&["hi"], true);
        let mut modal = Modal::new(1, 3, content, "", None);
        modal.show();
        assert_eq!(modal.area(), (0, 0));
        assert_eq!(viewport.get(), (0, 0));
        assert_eq!(modal.view("bg"), "bg");
    }

    #[test]
    fn hidden_modal_returns_background() {
        let (content, _) = StaticContent::boxed(&["hi"], true);
        let mut modal = Modal::new(20, 10, content, "", None);
        assert_eq!(modal.view("background"), "background");
    }

    #[test]
    fn visible_modal_is_composited() {
        let (content, _) = StaticContent::boxed(&["hi"], true);
        let mut modal = Modal::new(12, 10, content, "", Some(Color::Default));
        modal.show();
        let view = modal.view(&blank(10, 6));
        let rows: Vec<String> = view.split('\n').map(strip_escapes).collect();
        assert_eq!(
            rows,
            vec![
                "..........",
                "..┌────┐..",
                "..│    │..",
                "..│ hi │..",
                "..└────┘..",
                "..........",
            ]
        );
    }

    #[test]
    fn titled_modal_uses_rounded_frame() {
        let (content, _) = StaticContent::boxed(&["abcd"], true);
        let mut modal = Modal::new(8, 10, content, "Info", Some(Color::Default));
        let lines = modal.render_box();
        assert_eq!(lines[0], "╭─Info─╮");
        assert_eq!(lines.last().map(String::as_str), Some("╰──────╯"));
    }

    #[test]
    fn escape_respects_content() {
        let (content, _) = StaticContent::boxed(&["hi"], false);
        let mut modal = Modal::new(20, 10, content, "", None);
        modal.show();
        assert!(!modal.handle_escape());
        assert!(modal.is_visible());

        let (content, _) = StaticContent::boxed(&["bye"], true);
        modal.open(content, "Warning");
        assert_eq!(modal.title(), "Warning");
        assert!(modal.handle_escape());
        assert!(!modal.is_visible());
        assert!(!modal.handle_escape());
    }
}
