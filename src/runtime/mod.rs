//! Runtime orchestration: modal state on top of the render pipeline.

pub mod modal;

pub use modal::{Modal, DEFAULT_BORDER_COLOR, MODAL_PADDING};
