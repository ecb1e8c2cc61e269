//! Home page with the orders table and the new-order dialog.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::dto::OrderDraft;
use crate::domain::entities::Order;
use crate::domain::errors::OrderError;
use crate::domain::validation::{FieldError, OrderField};
use crate::presentation::ui::{DialogAction, NewOrderDialog};
use crate::presentation::widgets::{OrderTable, StatusBar};

const KEY_HINTS: &str = "a: Nova encomenda | Tab: Navegação | q: Sair";

/// Result of a home screen key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeKeyResult {
    /// Key was not handled.
    None,
    /// Key was consumed by the screen.
    Consumed,
    /// The new-order form was submitted.
    Submit(OrderDraft),
}

/// Home page state.
pub struct HomeScreen {
    orders: Vec<Order>,
    dialog: Option<NewOrderDialog>,
    status: StatusBar,
    currency: String,
    accent: Color,
}

impl HomeScreen {
    /// Creates the home screen.
    #[must_use]
    pub fn new(currency: impl Into<String>, accent: Color) -> Self {
        Self {
            orders: Vec::new(),
            dialog: None,
            status: StatusBar::new().right(KEY_HINTS),
            currency: currency.into(),
            accent,
        }
    }

    /// Replaces the rendered order sequence.
    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    /// Returns the rendered order sequence.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Returns whether the new-order dialog is open.
    #[must_use]
    pub const fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// Opens the new-order dialog with a blank form.
    pub fn open_dialog(&mut self) {
        self.dialog = Some(NewOrderDialog::new(self.accent));
    }

    /// Closes the dialog, discarding any entered values.
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Returns the open dialog, if any.
    #[must_use]
    pub const fn dialog(&self) -> Option<&NewOrderDialog> {
        self.dialog.as_ref()
    }

    /// Records a successful order creation.
    pub fn order_created(&mut self, order: &Order) {
        self.close_dialog();
        self.status = StatusBar::success(format!("Encomenda {} criada", order.id()))
            .right(KEY_HINTS);
    }

    /// Records a rejected submission.
    ///
    /// Correctable errors keep the dialog open with the entered values so
    /// the user can fix them; store failures close it.
    pub fn submit_rejected(&mut self, error: &OrderError) {
        if let Some(dialog) = &mut self.dialog {
            match error {
                OrderError::Validation { errors } => {
                    dialog.apply_errors(errors);
                    self.status =
                        StatusBar::error("Corrija os campos assinalados").right(KEY_HINTS);
                    return;
                }
                OrderError::DuplicateId { .. } => {
                    dialog.apply_errors(&[FieldError::new(OrderField::Id, "already exists")]);
                    self.status = StatusBar::error(error.to_string()).right(KEY_HINTS);
                    return;
                }
                OrderError::StoreFailed { .. } => {}
            }
        }

        self.close_dialog();
        self.status = StatusBar::error(error.to_string()).right(KEY_HINTS);
    }

    /// Records a failed order fetch.
    pub fn load_failed(&mut self, error: &OrderError) {
        self.status = StatusBar::error(error.to_string()).right(KEY_HINTS);
    }

    /// Returns the status bar.
    #[must_use]
    pub const fn status(&self) -> &StatusBar {
        &self.status
    }

    /// Handles key event, returns result.
    pub fn handle_key(&mut self, key: KeyEvent) -> HomeKeyResult {
        if let Some(dialog) = &mut self.dialog {
            return match dialog.handle_key(key) {
                DialogAction::Close => {
                    self.close_dialog();
                    HomeKeyResult::Consumed
                }
                DialogAction::Submit(draft) => HomeKeyResult::Submit(draft),
                DialogAction::None => HomeKeyResult::Consumed,
            };
        }

        match key.code {
            KeyCode::Char('a') => {
                self.open_dialog();
                HomeKeyResult::Consumed
            }
            _ => HomeKeyResult::None,
        }
    }
}

impl Widget for &HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let [title_area, _, table_area, trigger_area, status_area] = layout.areas(area);

        let title = Paragraph::new(Span::styled(
            "Encomendas",
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
        ));
        title.render(title_area, buf);

        OrderTable::new(&self.orders)
            .currency(&self.currency)
            .accent(self.accent)
            .render(table_area, buf);

        let trigger = Line::from(vec![
            Span::styled(
                " Adicionar encomenda ",
                Style::default()
                    .fg(Color::Black)
                    .bg(self.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" [a]", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(trigger).render(trigger_area, buf);

        (&self.status).render(status_area, buf);

        if let Some(dialog) = &self.dialog {
            dialog.render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{OrderStatus, PaymentMethod};
    use crate::presentation::widgets::StatusLevel;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_screen() -> HomeScreen {
        HomeScreen::new("$", Color::Cyan)
    }

    fn demo_order() -> Order {
        Order::new(
            "INV001",
            "Camisola",
            PaymentMethod::CreditCard,
            250.0,
            OrderStatus::Paid,
            Utc::now(),
        )
    }

    fn buffer_text(screen: &HomeScreen) -> String {
        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);

        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_trigger_opens_dialog() {
        let mut screen = make_screen();
        assert!(!screen.dialog_open());

        assert_eq!(
            screen.handle_key(key(KeyCode::Char('a'))),
            HomeKeyResult::Consumed
        );
        assert!(screen.dialog_open());
    }

    #[test]
    fn test_close_discards_entered_values() {
        let mut screen = make_screen();
        screen.handle_key(key(KeyCode::Char('a')));
        screen.handle_key(key(KeyCode::Char('x')));
        screen.handle_key(key(KeyCode::Char('y')));

        screen.handle_key(key(KeyCode::Esc));
        assert!(!screen.dialog_open());

        screen.handle_key(key(KeyCode::Char('a')));
        let draft = screen.dialog().unwrap().form().draft();
        assert_eq!(draft, OrderDraft::new("", ""));
    }

    #[test]
    fn test_submit_passes_draft_through() {
        let mut screen = make_screen();
        screen.handle_key(key(KeyCode::Char('a')));
        for c in "A1".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
        screen.handle_key(key(KeyCode::Tab));
        for c in "Widget".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }

        let result = screen.handle_key(key(KeyCode::Enter));
        assert_eq!(
            result,
            HomeKeyResult::Submit(OrderDraft::new("A1", "Widget"))
        );
        assert!(screen.dialog_open());
    }

    #[test]
    fn test_order_created_closes_dialog() {
        let mut screen = make_screen();
        screen.open_dialog();

        screen.order_created(&demo_order());

        assert!(!screen.dialog_open());
        assert_eq!(screen.status().level(), StatusLevel::Success);
        assert_eq!(screen.status().message(), "Encomenda INV001 criada");
    }

    #[test]
    fn test_validation_rejection_keeps_dialog_open() {
        let mut screen = make_screen();
        screen.open_dialog();

        let error = OrderError::validation(vec![FieldError::new(
            OrderField::Id,
            "must be at least 2 characters",
        )]);
        screen.submit_rejected(&error);

        assert!(screen.dialog_open());
        assert_eq!(screen.status().level(), StatusLevel::Error);
    }

    #[test]
    fn test_store_failure_closes_dialog() {
        let mut screen = make_screen();
        screen.open_dialog();

        screen.submit_rejected(&OrderError::store_failed("unavailable"));

        assert!(!screen.dialog_open());
        assert_eq!(screen.status().level(), StatusLevel::Error);
    }

    #[test]
    fn test_render_shows_title_and_orders() {
        let mut screen = make_screen();
        screen.set_orders(vec![demo_order()]);

        let text = buffer_text(&screen);
        assert!(text.contains("Encomendas"));
        assert!(text.contains("INV001"));
        assert!(text.contains("Adicionar encomenda"));
    }

    #[test]
    fn test_render_overlays_dialog_when_open() {
        let mut screen = make_screen();
        screen.open_dialog();

        let text = buffer_text(&screen);
        assert!(text.contains("Nova Encomenda"));
    }
}
