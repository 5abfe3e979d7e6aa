use async_trait::async_trait;

use crate::{
    Invoice, NewInvoice, NewOrder, NewProduct, Order, OrderId, OrderStatus, Product, ProductId,
    Result,
};

/// Core trait for store implementations.
///
/// Every method is a single read or a single-row write; implementations rely
/// on the backend's own isolation and hold no state between calls.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Store: Send + Sync {
    /// Returns every product in ascending id order.
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Looks up a product by id.
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>>;

    /// Inserts a product and returns it with its generated id.
    async fn insert_product(&self, product: NewProduct) -> Result<Product>;

    /// Returns every order in ascending id order.
    async fn list_orders(&self) -> Result<Vec<Order>>;

    /// Looks up an order by id.
    async fn get_order(&self, id: OrderId) -> Result<Option<Order>>;

    /// Inserts an order and returns it with its generated id.
    async fn insert_order(&self, order: NewOrder) -> Result<Order>;

    /// Overwrites the status of an order.
    ///
    /// Returns the updated order, or None if no order has this id.
    async fn set_order_status(&self, id: OrderId, status: OrderStatus) -> Result<Option<Order>>;

    /// Returns every invoice in ascending id order.
    async fn list_invoices(&self) -> Result<Vec<Invoice>>;

    /// Inserts an invoice and returns it with its generated id.
    async fn insert_invoice(&self, invoice: NewInvoice) -> Result<Invoice>;
}

/// Extension trait providing convenience methods for stores.
#[async_trait]
pub trait StoreExt: Store {
    /// Checks if a product with this id exists.
    async fn product_exists(&self, id: ProductId) -> Result<bool> {
        Ok(self.get_product(id).await?.is_some())
    }
}

// Blanket implementation for all Store implementations
impl<T: Store + ?Sized> StoreExt for T {}
