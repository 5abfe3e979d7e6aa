use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    Invoice, InvoiceId, NewInvoice, NewOrder, NewProduct, Order, OrderId, OrderStatus, Product,
    ProductId, Result, store::Store,
};

#[derive(Default)]
struct Tables {
    products: Vec<Product>,
    orders: Vec<Order>,
    invoices: Vec<Invoice>,
}

/// Next id for an append-only table: one past the highest id handed out.
fn next_id<T>(rows: &[T], id_of: impl Fn(&T) -> i64) -> i64 {
    rows.last().map(id_of).unwrap_or(0) + 1
}

/// In-memory store implementation.
///
/// Rows are kept in insertion order, which is also ascending id order, so
/// listings match the PostgreSQL implementation. Foreign keys are not
/// enforced here; the domain layer checks them before inserting.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.tables.read().await.products.clone())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>> {
        let tables = self.tables.read().await;
        Ok(tables.products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_product(&self, product: NewProduct) -> Result<Product> {
        let mut tables = self.tables.write().await;
        let id = next_id(&tables.products, |p| p.id.as_i64());
        let record = product.into_record(ProductId::new(id));
        tables.products.push(record.clone());
        Ok(record)
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        Ok(self.tables.read().await.orders.clone())
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>> {
        let tables = self.tables.read().await;
        Ok(tables.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn insert_order(&self, order: NewOrder) -> Result<Order> {
        let mut tables = self.tables.write().await;
        let id = next_id(&tables.orders, |o| o.id.as_i64());
        let record = order.into_record(OrderId::new(id));
        tables.orders.push(record.clone());
        Ok(record)
    }

    async fn set_order_status(&self, id: OrderId, status: OrderStatus) -> Result<Option<Order>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .map(|order| {
                order.status = status;
                order.clone()
            }))
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        Ok(self.tables.read().await.invoices.clone())
    }

    async fn insert_invoice(&self, invoice: NewInvoice) -> Result<Invoice> {
        let mut tables = self.tables.write().await;
        let id = next_id(&tables.invoices, |i| i.id.as_i64());
        let record = invoice.into_record(InvoiceId::new(id));
        tables.invoices.push(record.clone());
        Ok(record)
    }
}
