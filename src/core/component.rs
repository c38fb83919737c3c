//! Component and ModalContent traits.

/// Renderable component interface.
pub trait Component {
    /// Render to a list of lines at the given width.
    fn render(&mut self, width: usize) -> Vec<String>;

    /// Provide an allocated viewport size for this component (optional).
    ///
    /// This is a constraint/budget, not a promise about the number of lines that
    /// will be rendered.
    fn set_viewport_size(&mut self, _cols: usize, _rows: usize) {}
}

/// Content hosted inside a modal dialog.
pub trait ModalContent: Component {
    /// Whether pressing Escape dismisses the modal showing this content.
    fn closes_on_escape(&self) -> bool {
        true
    }
}
