//! New-order form widget.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::dto::OrderDraft;
use crate::domain::validation::{FieldError, OrderField};
use crate::presentation::widgets::TextInput;

/// Action produced by a form key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderFormAction {
    /// Nothing to do.
    None,
    /// The form was cancelled.
    Cancel,
    /// The form was submitted with the collected values.
    Submit(OrderDraft),
}

/// Form collecting the id and product of a new order.
pub struct OrderForm {
    id_input: TextInput,
    product_input: TextInput,
    focused: OrderField,
}

impl OrderForm {
    /// Creates a blank form with the id field focused.
    #[must_use]
    pub fn new() -> Self {
        let mut id_input = TextInput::new(OrderField::Id.label()).placeholder("id do pedido");
        id_input.set_focused(true);
        let product_input =
            TextInput::new(OrderField::Product.label()).placeholder("produto");

        Self {
            id_input,
            product_input,
            focused: OrderField::Id,
        }
    }

    /// Collects the current field values.
    #[must_use]
    pub fn draft(&self) -> OrderDraft {
        OrderDraft::new(self.id_input.value(), self.product_input.value())
    }

    /// Returns the currently focused field.
    #[must_use]
    pub const fn focused_field(&self) -> OrderField {
        self.focused
    }

    /// Displays per-field validation errors.
    pub fn apply_errors(&mut self, errors: &[FieldError]) {
        self.id_input.clear_error();
        self.product_input.clear_error();

        for error in errors {
            self.input_mut(error.field).set_error(error.message.clone());
        }
    }

    fn input_mut(&mut self, field: OrderField) -> &mut TextInput {
        match field {
            OrderField::Id => &mut self.id_input,
            OrderField::Product => &mut self.product_input,
        }
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        let field = self.focused;
        self.input_mut(field)
    }

    fn focus(&mut self, field: OrderField) {
        self.focused = field;
        self.id_input.set_focused(field == OrderField::Id);
        self.product_input.set_focused(field == OrderField::Product);
    }

    fn focus_other(&mut self) {
        match self.focused {
            OrderField::Id => self.focus(OrderField::Product),
            OrderField::Product => self.focus(OrderField::Id),
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> OrderFormAction {
        match key.code {
            KeyCode::Esc => return OrderFormAction::Cancel,
            KeyCode::Enter => return OrderFormAction::Submit(self.draft()),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.focus_other();
            }
            KeyCode::Char(c) => {
                self.focused_input_mut().input_char(c);
            }
            KeyCode::Backspace => {
                self.focused_input_mut().backspace();
            }
            KeyCode::Delete => {
                self.focused_input_mut().delete();
            }
            KeyCode::Left => {
                self.focused_input_mut().move_left();
            }
            KeyCode::Right => {
                self.focused_input_mut().move_right();
            }
            KeyCode::Home => {
                self.focused_input_mut().move_start();
            }
            KeyCode::End => {
                self.focused_input_mut().move_end();
            }
            _ => {}
        }

        OrderFormAction::None
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &OrderForm {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let [id_area, product_area, _, button_area, hint_area] = layout.areas(area);

        (&self.id_input).render(id_area, buf);
        (&self.product_input).render(product_area, buf);

        let button = Paragraph::new(Span::styled(
            " Submit ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        button.render(button_area, buf);

        let hint = Line::from(vec![
            Span::styled("Enter: Submit", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Tab: Campo", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Esc: Cancelar", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hint).render(hint_area, buf);
    }
}
