//! Text helpers (escape boundaries, width measurement, span parsing, slicing/wrapping).
//!
//! These helpers are pure (string in/string out) and live under `core` so widgets can depend on
//! them without importing anything from the render layer.

pub mod ansi;
pub mod slice;
pub mod span;
pub mod width;
