//! Create-order use case implementation.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::application::dto::OrderDraft;
use crate::domain::entities::{Order, OrderStatus, PaymentMethod};
use crate::domain::errors::OrderError;
use crate::domain::ports::OrderStorePort;
use crate::domain::validation::OrderSchema;

/// Handles new-order submission.
///
/// Validation gates the submit path: a draft failing the schema never
/// reaches the store.
#[derive(Clone)]
pub struct CreateOrderUseCase {
    store: Arc<dyn OrderStorePort>,
    schema: OrderSchema,
}

impl CreateOrderUseCase {
    /// Creates a new create-order use case.
    #[must_use]
    pub const fn new(store: Arc<dyn OrderStorePort>, schema: OrderSchema) -> Self {
        Self { store, schema }
    }

    /// Validates the draft and stores the resulting order.
    ///
    /// # Errors
    /// Returns `Validation` when the draft fails the schema, `DuplicateId`
    /// when the id is already taken, or a store failure.
    pub async fn execute(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        let draft = draft.trimmed();
        debug!(id = %draft.id, "Submitting new order");

        self.schema
            .validate(&draft.id, &draft.product)
            .map_err(|errors| {
                warn!(count = errors.len(), "Order draft failed validation");
                OrderError::validation(errors)
            })?;

        let order = Order::new(
            draft.id.as_str(),
            draft.product,
            PaymentMethod::default(),
            0.0,
            OrderStatus::default(),
            Utc::now(),
        );

        self.store.create_order(order.clone()).await.map_err(|e| {
            warn!(error = %e, "Order store rejected new order");
            e
        })?;

        info!(id = %order.id(), product = %order.product(), "Order created");
        Ok(order)
    }
}
