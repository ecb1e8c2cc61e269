//! In-memory order store adapter.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::entities::{Order, OrderStatus, PaymentMethod};
use crate::domain::errors::OrderError;
use crate::domain::ports::OrderStorePort;

/// Order store backed by process memory.
///
/// Orders live only for the duration of the session.
pub struct InMemoryOrderStore {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store seeded with the sample order shown on first launch.
    #[must_use]
    pub fn with_demo_data() -> Self {
        Self {
            orders: RwLock::new(vec![Self::demo_order()]),
        }
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
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStorePort for InMemoryOrderStore {
    async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.read().await;
        debug!(count = orders.len(), "Listing orders");
        Ok(orders.clone())
    }

    async fn create_order(&self, order: Order) -> Result<(), OrderError> {
        let mut orders = self.orders.write().await;

        if orders.iter().any(|existing| existing.id() == order.id()) {
            return Err(OrderError::duplicate(order.id().as_str()));
        }

        info!(id = %order.id(), "Order stored");
        orders.push(order);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::OrderId;

    fn make_order(id: &str) -> Order {
        Order::new(
            id,
            "Calças",
            PaymentMethod::Cash,
            40.0,
            OrderStatus::Pending,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = InMemoryOrderStore::new();
        assert!(store.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_demo_data_matches_first_launch_row() {
        let store = InMemoryOrderStore::with_demo_data();
        let orders = store.list_orders().await.unwrap();

        assert_eq!(orders.len(), 1);
        let order = &orders[0];
        assert_eq!(order.id().as_str(), "INV001");
        assert_eq!(order.method(), PaymentMethod::CreditCard);
        assert_eq!(order.formatted_amount("$"), "$250.00");
        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let store = InMemoryOrderStore::new();
        store.create_order(make_order("A1")).await.unwrap();

        let orders = store.list_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id().as_str(), "A1");
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let store = InMemoryOrderStore::new();
        store.create_order(make_order("A1")).await.unwrap();

        let result = store.create_order(make_order("A1")).await;
        assert!(matches!(result, Err(OrderError::DuplicateId { .. })));

        assert_eq!(store.list_orders().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_order() {
        let store = InMemoryOrderStore::with_demo_data();

        let found = store.find_order(&OrderId::from("INV001")).await.unwrap();
        assert!(found.is_some());

        let missing = store.find_order(&OrderId::from("INV999")).await.unwrap();
        assert!(missing.is_none());
    }
}
