//! Host color palette.

use crate::core::color::Color;

/// Named colors shared by widgets and the modal runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub border: Color,
    pub primary: Color,
    pub title: Color,
    pub muted: Color,
    pub text: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub bg_dark: Color,
}

impl Theme {
    pub const DEFAULT: Self = Self {
        border: Color::rgb(0x89, 0xb4, 0xfa),
        primary: Color::rgb(0xf9, 0xb3, 0x87),
        title: Color::rgb(0xcb, 0xa6, 0xf7),
        muted: Color::rgb(0x92, 0x98, 0xb1),
        text: Color::rgb(0xc6, 0xcf, 0xec),
        success: Color::rgb(0xa7, 0xe2, 0xa1),
        error: Color::rgb(0xeb, 0xa0, 0xac),
        info: Color::rgb(0x81, 0xd1, 0xe0),
        bg_dark: Color::rgb(0x24, 0x3b, 0x40),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
