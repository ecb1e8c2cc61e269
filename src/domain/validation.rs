//! Validation rules applied to the new-order form before submission.

/// Fields of the new-order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    /// The order id field.
    Id,
    /// The product field.
    Product,
}

impl OrderField {
    /// Returns the label rendered next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Product => "Produto",
        }
    }
}

/// A validation failure on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field the rule failed on.
    pub field: OrderField,
    /// Human-readable failure message.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub fn new(field: OrderField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Schema gating order submission.
///
/// Each field must have at least `min_len` characters after trimming.
#[derive(Debug, Clone, Copy)]
pub struct OrderSchema {
    min_len: usize,
}

impl OrderSchema {
    const DEFAULT_MIN_LEN: usize = 2;

    /// Creates a schema with a custom minimum length.
    #[must_use]
    pub const fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// Validates the form values, returning every failed field.
    ///
    /// # Errors
    /// Returns the list of per-field failures when any rule is violated.
    pub fn validate(&self, id: &str, product: &str) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for (field, value) in [(OrderField::Id, id), (OrderField::Product, product)] {
            if value.trim().chars().count() < self.min_len {
                errors.push(FieldError::new(
                    field,
                    format!("must be at least {} characters", self.min_len),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for OrderSchema {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("A1", "Widget", &[]; "both valid")]
    #[test_case("", "Widget", &[OrderField::Id]; "empty id")]
    #[test_case("A1", "", &[OrderField::Product]; "empty product")]
    #[test_case("A", "W", &[OrderField::Id, OrderField::Product]; "both too short")]
    #[test_case("  ", "Widget", &[OrderField::Id]; "whitespace only id")]
    fn test_validate(id: &str, product: &str, expected: &[OrderField]) {
        let schema = OrderSchema::default();
        match schema.validate(id, product) {
            Ok(()) => assert!(expected.is_empty()),
            Err(errors) => {
                let fields: Vec<OrderField> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, expected);
            }
        }
    }

    #[test]
    fn test_error_message_names_minimum() {
        let schema = OrderSchema::default();
        let errors = schema.validate("x", "Widget").unwrap_err();
        assert_eq!(errors[0].message, "must be at least 2 characters");
    }

    #[test]
    fn test_custom_minimum() {
        let schema = OrderSchema::new(5);
        assert!(schema.validate("INV001", "Camisola").is_ok());
        assert!(schema.validate("A1", "Camisola").is_err());
    }
}
