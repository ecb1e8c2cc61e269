//! Stub page for routes without content.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::ui::Route;

/// Placeholder page rendered for routes that have no content yet.
pub struct StubScreen {
    route: Route,
}

impl StubScreen {
    /// Creates the stub page for a route.
    #[must_use]
    pub const fn new(route: Route) -> Self {
        Self { route }
    }
}

impl Widget for &StubScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let lines = vec![
            Line::from(Span::styled(
                self.route.label(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Ainda não há conteúdo em {}", self.route.path()),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(center, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_route_label_and_path() {
        let screen = StubScreen::new(Route::Blogs);
        let area = Rect::new(0, 0, 50, 9);
        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);

        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
        }

        assert!(text.contains("Blogs"));
        assert!(text.contains("/blogs"));
    }
}
