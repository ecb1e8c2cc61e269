//! Order table widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use crate::domain::entities::Order;

const CAPTION: &str = "Uma lista das suas recentes encomendas.";

/// Renders the order list as a table with a caption.
///
/// Purely a function of the injected order sequence: zero orders renders
/// only the header and the caption.
pub struct OrderTable<'a> {
    orders: &'a [Order],
    currency: &'a str,
    accent: Color,
}

impl<'a> OrderTable<'a> {
    /// Creates a table over the given orders.
    #[must_use]
    pub const fn new(orders: &'a [Order]) -> Self {
        Self {
            orders,
            currency: "$",
            accent: Color::Cyan,
        }
    }

    /// Sets the currency symbol for the Amount column.
    #[must_use]
    pub const fn currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the accent color.
    #[must_use]
    pub const fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    fn header(&self) -> Row<'static> {
        Row::new(vec![
            Cell::from("Id"),
            Cell::from("Method"),
            Cell::from(Text::from("Amount").alignment(Alignment::Right)),
            Cell::from("Status"),
        ])
        .style(
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
        )
    }

    fn row(&self, order: &Order) -> Row<'static> {
        Row::new(vec![
            Cell::from(order.id().to_string()),
            Cell::from(order.method().to_string()),
            Cell::from(Text::from(order.formatted_amount(self.currency)).alignment(Alignment::Right)),
            Cell::from(order.status().to_string()),
        ])
    }
}

impl Widget for OrderTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [table_area, caption_area] = layout.areas(area);

        let widths = [
            Constraint::Length(10),
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Length(10),
        ];

        let rows: Vec<Row<'static>> = self.orders.iter().map(|order| self.row(order)).collect();

        let table = Table::new(rows, widths)
            .header(self.header())
            .column_spacing(2)
            .style(Style::default().fg(Color::White));
        table.render(table_area, buf);

        let caption = Paragraph::new(CAPTION)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
        caption.render(caption_area, buf);
    }
}
