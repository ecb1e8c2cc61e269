//! Domain entity definitions.

mod order;

pub use order::{Order, OrderId, OrderStatus, PaymentMethod};
