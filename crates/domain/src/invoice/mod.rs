//! Invoices with a snapshot of the invoiced product.

mod service;

pub use service::InvoiceService;

use storage::{OrderId, ProductId};

use crate::error::ValidationError;
use crate::input::{FieldValue, required};

/// Command to bill an order.
///
/// `product_id` names the product whose name and price are copied onto the
/// invoice. It is not required to match the order's own product.
///
/// `total_price` stays raw until both referenced rows are found, so an
/// unknown order or product is reported ahead of a malformed total.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInvoice {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub total_price: Option<FieldValue>,
}

impl CreateInvoice {
    /// Creates a new CreateInvoice command.
    pub fn new(
        order_id: OrderId,
        product_id: ProductId,
        total_price: impl Into<FieldValue>,
    ) -> Self {
        Self {
            order_id,
            product_id,
            total_price: Some(total_price.into()),
        }
    }

    /// Builds the command from raw request fields.
    ///
    /// Only the identifiers are checked here, `order_id` first.
    pub fn from_fields(
        order_id: Option<FieldValue>,
        product_id: Option<FieldValue>,
        total_price: Option<FieldValue>,
    ) -> Result<Self, ValidationError> {
        let order_id = required("order_id", order_id)?.to_i64("order_id")?;
        let product_id = required("product_id", product_id)?.to_i64("product_id")?;

        Ok(Self {
            order_id: OrderId::new(order_id),
            product_id: ProductId::new(product_id),
            total_price,
        })
    }
}
