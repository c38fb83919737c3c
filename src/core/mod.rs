//! Core interfaces and types.

pub mod color;
pub mod component;
pub mod text;
