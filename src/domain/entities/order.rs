//! Order entity.

use chrono::{DateTime, Utc};

/// Order identifier (e.g. "INV001").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Creates a new order id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Payment method attached to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    /// Credit card payment.
    #[default]
    CreditCard,
    /// Debit card payment.
    DebitCard,
    /// Bank transfer payment.
    BankTransfer,
    /// Cash payment.
    Cash,
}

impl PaymentMethod {
    /// Returns the label rendered in the order table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::BankTransfer => "Bank Transfer",
            Self::Cash => "Cash",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    /// Created but not yet paid.
    #[default]
    Pending,
    /// Payment received.
    Paid,
    /// Handed to the carrier.
    Shipped,
    /// Cancelled by the customer.
    Cancelled,
}

impl OrderStatus {
    /// Returns the label rendered in the order table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Shipped => "Shipped",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A customer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    product: String,
    method: PaymentMethod,
    amount: f64,
    status: OrderStatus,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new order.
    #[must_use]
    pub fn new(
        id: impl Into<OrderId>,
        product: impl Into<String>,
        method: PaymentMethod,
        amount: f64,
        status: OrderStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            product: product.into(),
            method,
            amount,
            status,
            created_at,
        }
    }

    /// Returns the order id.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the ordered product.
    #[must_use]
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Returns the payment method.
    #[must_use]
    pub const fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Returns the order amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the order status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Formats the amount with a currency symbol, e.g. "$250.00".
    #[must_use]
    pub fn formatted_amount(&self, currency: &str) -> String {
        format!("{currency}{:.2}", self.amount)
    }
}
