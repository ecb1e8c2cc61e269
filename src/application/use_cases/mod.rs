//! Use case implementations.

mod create_order_use_case;
mod list_orders_use_case;

pub use create_order_use_case::CreateOrderUseCase;
pub use list_orders_use_case::ListOrdersUseCase;
