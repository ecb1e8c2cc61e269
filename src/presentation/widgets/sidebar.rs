//! Navigation sidebar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

use crate::presentation::ui::Route;

/// Sidebar listing the navigation links.
///
/// The sidebar is rendered for every route; only the content region of the
/// layout changes on navigation.
pub struct Sidebar {
    active: Route,
    cursor: Route,
    focused: bool,
    accent: Color,
}

impl Sidebar {
    /// Creates the sidebar for the given active route.
    #[must_use]
    pub const fn new(active: Route) -> Self {
        Self {
            active,
            cursor: active,
            focused: false,
            accent: Color::Cyan,
        }
    }

    /// Sets the route under the selection cursor.
    #[must_use]
    pub const fn cursor(mut self, cursor: Route) -> Self {
        self.cursor = cursor;
        self
    }

    /// Sets whether the sidebar has keyboard focus.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Sets the accent color.
    #[must_use]
    pub const fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    fn item(&self, route: Route) -> ListItem<'static> {
        let marker = if route == self.active { "› " } else { "  " };

        let mut style = Style::default().fg(Color::White);
        if route == self.active {
            style = style.fg(self.accent).add_modifier(Modifier::BOLD);
        }
        if self.focused && route == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        ListItem::new(Line::from(vec![
            Span::raw(marker),
            Span::styled(route.label().to_string(), style),
        ]))
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" encomendas ");

        let items: Vec<ListItem<'static>> =
            Route::ALL.into_iter().map(|route| self.item(route)).collect();

        let list = List::new(items).block(block);
        list.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render(sidebar: Sidebar) -> String {
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);
        sidebar.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_renders_every_navigation_link() {
        let text = render(Sidebar::new(Route::Home));

        assert!(text.contains("Home"));
        assert!(text.contains("Blogs"));
        assert!(text.contains("Contact"));
    }

    #[test]
    fn test_active_route_is_marked() {
        let text = render(Sidebar::new(Route::Blogs));
        assert!(text.contains("› Blogs"));
        assert!(!text.contains("› Home"));
    }
}
