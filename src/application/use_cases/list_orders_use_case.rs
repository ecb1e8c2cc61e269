//! List-orders use case implementation.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::Order;
use crate::domain::errors::OrderError;
use crate::domain::ports::OrderStorePort;

/// Fetches the orders shown in the table, most recent first.
#[derive(Clone)]
pub struct ListOrdersUseCase {
    store: Arc<dyn OrderStorePort>,
}

impl ListOrdersUseCase {
    /// Creates a new list-orders use case.
    #[must_use]
    pub const fn new(store: Arc<dyn OrderStorePort>) -> Self {
        Self { store }
    }

    /// Returns every order sorted by creation time, newest first.
    ///
    /// # Errors
    /// Returns a store failure when the orders cannot be fetched.
    pub async fn execute(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.store.list_orders().await?;
        orders.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        debug!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }
}
