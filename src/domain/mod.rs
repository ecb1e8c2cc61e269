//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Order field validation rules.
pub mod validation;

pub use entities::{Order, OrderId, OrderStatus, PaymentMethod};
pub use errors::OrderError;
pub use ports::OrderStorePort;
pub use validation::{FieldError, OrderField, OrderSchema};
