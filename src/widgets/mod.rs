//! Widgets rendered into modal boxes. Widgets depend on `core` and the theme only.

pub mod alert;
pub mod border;

pub use alert::{Alert, AlertKind};
pub use border::{build_frame, build_frame_with, BorderFrame, Junctions, Padding};
