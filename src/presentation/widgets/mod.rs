mod input;
mod order_form;
mod order_table;
mod sidebar;
mod status_bar;

pub use input::TextInput;
pub use order_form::{OrderForm, OrderFormAction};
pub use order_table::OrderTable;
pub use sidebar::Sidebar;
pub use status_bar::{StatusBar, StatusLevel};
