//! New-order modal dialog.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::application::dto::OrderDraft;
use crate::domain::validation::FieldError;
use crate::presentation::widgets::{OrderForm, OrderFormAction};

/// Action produced by a dialog key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Nothing to do.
    None,
    /// The dialog should close, discarding the form.
    Close,
    /// The form was submitted with the collected values.
    Submit(OrderDraft),
}

/// Modal overlay hosting the new-order form.
///
/// The dialog owns the form; dropping the dialog discards any entered
/// values, so every open starts blank.
pub struct NewOrderDialog {
    form: OrderForm,
    accent: Color,
}

impl NewOrderDialog {
    /// Creates a dialog with a blank form.
    #[must_use]
    pub fn new(accent: Color) -> Self {
        Self {
            form: OrderForm::new(),
            accent,
        }
    }

    /// Returns the hosted form.
    #[must_use]
    pub const fn form(&self) -> &OrderForm {
        &self.form
    }

    /// Displays per-field validation errors on the form.
    pub fn apply_errors(&mut self, errors: &[FieldError]) {
        self.form.apply_errors(errors);
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogAction {
        match self.form.handle_key(key) {
            OrderFormAction::Cancel => DialogAction::Close,
            OrderFormAction::Submit(draft) => DialogAction::Submit(draft),
            OrderFormAction::None => DialogAction::None,
        }
    }
}

impl Widget for &NewOrderDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(13),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(46),
            Constraint::Fill(1),
        ]);
        let [_, dialog_area, _] = horizontal.areas(center);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .title(" Nova Encomenda ");

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        (&self.form).render(inner, buf);
    }
}
