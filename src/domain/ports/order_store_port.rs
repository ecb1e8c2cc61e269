//! Order store port definition.

use async_trait::async_trait;

use crate::domain::entities::{Order, OrderId};
use crate::domain::errors::OrderError;

/// Port for order create/list operations.
#[async_trait]
pub trait OrderStorePort: Send + Sync {
    /// Returns every stored order.
    async fn list_orders(&self) -> Result<Vec<Order>, OrderError>;

    /// Stores a new order. Fails with `DuplicateId` if the id is taken.
    async fn create_order(&self, order: Order) -> Result<(), OrderError>;

    /// Looks up a single order by id.
    async fn find_order(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        Ok(self
            .list_orders()
            .await?
            .into_iter()
            .find(|order| order.id() == id))
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    /// Mock order store for testing.
    pub struct MockOrderStore {
        orders: Arc<RwLock<Vec<Order>>>,
        create_calls: AtomicUsize,
        fail: bool,
    }

    impl MockOrderStore {
        /// Creates an empty mock store.
        pub fn new() -> Self {
            Self {
                orders: Arc::new(RwLock::new(Vec::new())),
                create_calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        /// Creates a mock store holding the given orders.
        pub fn with_orders(orders: Vec<Order>) -> Self {
            Self {
                orders: Arc::new(RwLock::new(orders)),
                create_calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        /// Creates a mock store that fails every operation.
        pub fn failing() -> Self {
            Self {
                orders: Arc::new(RwLock::new(Vec::new())),
                create_calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        /// Returns how many times `create_order` was invoked.
        pub fn create_calls(&self) -> usize {
            self.create_calls.load(Ordering::SeqCst)
        }
    }

    impl Default for MockOrderStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl OrderStorePort for MockOrderStore {
        async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
            if self.fail {
                return Err(OrderError::store_failed("mock store unavailable"));
            }
            Ok(self.orders.read().await.clone())
        }

        async fn create_order(&self, order: Order) -> Result<(), OrderError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(OrderError::store_failed("mock store unavailable"));
            }
            let mut orders = self.orders.write().await;
            if orders.iter().any(|existing| existing.id() == order.id()) {
                return Err(OrderError::duplicate(order.id().as_str()));
            }
            orders.push(order);
            Ok(())
        }
    }
}
