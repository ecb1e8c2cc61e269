//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }
}

/// One-line status bar with a message and right-aligned key hints.
#[derive(Debug, Clone)]
pub struct StatusBar {
    left: String,
    right: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            level: StatusLevel::Info,
        }
    }

    /// Sets left content.
    #[must_use]
    pub fn left(mut self, content: impl Into<String>) -> Self {
        self.left = content.into();
        self
    }

    /// Sets right content.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }

    /// Creates info status bar.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new().left(message)
    }

    /// Creates success status bar.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        let mut bar = Self::new().left(message);
        bar.level = StatusLevel::Success;
        bar
    }

    /// Creates error status bar.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        let mut bar = Self::new().left(message);
        bar.level = StatusLevel::Error;
        bar
    }

    /// Returns the status level.
    #[must_use]
    pub const fn level(&self) -> StatusLevel {
        self.level
    }

    /// Returns the status message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.left
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let message_style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);

        let width = area.width as usize;
        let left_len = self.left.chars().count();
        let right_len = self.right.chars().count();
        let padding = width.saturating_sub(left_len + right_len);

        let mut spans = vec![Span::styled(&self.left, message_style)];
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
        }
        if !self.right.is_empty() {
            spans.push(Span::styled(&self.right, Style::default().fg(Color::DarkGray)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_constructors() {
        assert_eq!(StatusBar::info("ok").level(), StatusLevel::Info);
        assert_eq!(StatusBar::success("ok").level(), StatusLevel::Success);
        assert_eq!(StatusBar::error("bad").level(), StatusLevel::Error);
    }

    #[test]
    fn test_message_accessor() {
        let bar = StatusBar::success("Encomenda criada");
        assert_eq!(bar.message(), "Encomenda criada");
    }
}
