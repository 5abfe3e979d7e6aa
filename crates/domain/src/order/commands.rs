//! Order commands.

use storage::{OrderId, ProductId};

use crate::error::ValidationError;
use crate::input::{FieldValue, required};

/// Command to place an order for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrder {
    /// The product being ordered.
    pub product_id: ProductId,
}

impl CreateOrder {
    /// Creates a new CreateOrder command.
    pub fn new(product_id: ProductId) -> Self {
        Self { product_id }
    }

    /// Builds the command from the raw `product_id` request field.
    pub fn from_fields(product_id: Option<FieldValue>) -> Result<Self, ValidationError> {
        let product_id = required("product_id", product_id)?.to_i64("product_id")?;
        Ok(Self::new(ProductId::new(product_id)))
    }
}

/// Command to mark an order as completed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompleteOrder {
    /// The order to complete.
    pub order_id: OrderId,
}

impl CompleteOrder {
    /// Creates a new CompleteOrder command.
    pub fn new(order_id: OrderId) -> Self {
        Self { order_id }
    }
}

/// Command to mark an order as paid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkOrderPaid {
    /// The order that was paid.
    pub order_id: OrderId,
}

impl MarkOrderPaid {
    /// Creates a new MarkOrderPaid command.
    pub fn new(order_id: OrderId) -> Self {
        Self { order_id }
    }
}
