//! Rendering pipeline: splicing styled lines and compositing modal boxes.

pub mod overlay;
pub mod splice;

pub use overlay::{composite_modal, composite_modal_with, ModalPlacement};
pub use splice::{splice_chunk, splice_chunk_with};
