//! Row records for the three tables.
//!
//! `New*` records carry everything the caller decides; the store assigns the
//! identifier and hands back the full record.

use chrono::{DateTime, Utc};

use crate::{InvoiceId, OrderId, OrderStatus, ProductId};

/// A persisted product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// A product about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl NewProduct {
    pub(crate) fn into_record(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            created_at: self.created_at,
        }
    }
}

/// A persisted order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// An order about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub product_id: ProductId,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    pub(crate) fn into_record(self, id: OrderId) -> Order {
        Order {
            id,
            product_id: self.product_id,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// A persisted invoice, including the product snapshot taken at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: InvoiceId,
    pub order_id: OrderId,
    pub total_price: f64,
    pub product_name: String,
    pub product_price: f64,
    pub created_at: DateTime<Utc>,
}

/// An invoice about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub order_id: OrderId,
    pub total_price: f64,
    pub product_name: String,
    pub product_price: f64,
    pub created_at: DateTime<Utc>,
}

impl NewInvoice {
    pub(crate) fn into_record(self, id: InvoiceId) -> Invoice {
        Invoice {
            id,
            order_id: self.order_id,
            total_price: self.total_price,
            product_name: self.product_name,
            product_price: self.product_price,
            created_at: self.created_at,
        }
    }
}
