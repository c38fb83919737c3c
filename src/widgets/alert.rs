//! Alert widget: a short colored message shown inside a modal.

use crate::core::color::Color;
use crate::core::component::{Component, ModalContent};
use crate::core::text::slice::{pad_to_width, wrap_plain};
use crate::core::text::width::UnicodeWidth;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Warning,
    Error,
}

impl AlertKind {
    /// Modal title for this kind.
    pub fn title(self) -> &'static str {
        match self {
            AlertKind::Info => "Info",
            AlertKind::Warning => "Warning",
            AlertKind::Error => "Error",
        }
    }

    /// Nerd Font icon followed by its gap.
    pub fn icon(self) -> &'static str {
        match self {
            AlertKind::Info => "\u{f449}  ",
            AlertKind::Warning => "\u{ea6c}  ",
            AlertKind::Error => "\u{ea87}  ",
        }
    }
}

pub struct Alert {
    text: String,
    kind: AlertKind,
    theme: Theme,
}

impl Alert {
    pub fn new(text: impl Into<String>, kind: AlertKind) -> Self {
        Self {
            text: text.into(),
            kind,
            theme: Theme::DEFAULT,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    fn color(&self) -> Color {
        match self.kind {
            AlertKind::Info => self.theme.info,
            AlertKind::Warning => self.theme.primary,
            AlertKind::Error => self.theme.error,
        }
    }
}

impl Component for Alert {
    fn render(&mut self, width: usize) -> Vec<String> {
        let color = self.color();
        let message = format!("{}{}", self.kind.icon(), self.text);
        let mut lines: Vec<String> = wrap_plain(&UnicodeWidth, &message, width)
            .into_iter()
            .map(|line| color.paint(&pad_to_width(&UnicodeWidth, &line, width)))
            .collect();
        // Trailing blank row keeps the message off the bottom border.
        lines.push(color.paint(&" ".repeat(width)));
        lines
    }
}

impl ModalContent for Alert {}
