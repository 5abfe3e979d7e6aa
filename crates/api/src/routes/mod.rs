//! HTTP handlers, grouped by resource.

pub mod invoices;
pub mod orders;
pub mod products;
pub mod system;

use domain::{InvoiceService, OrderService, ProductService};
use serde::Serialize;
use storage::Store;

/// Shared application state accessible from all handlers.
pub struct AppState<S: Store> {
    pub products: ProductService<S>,
    pub orders: OrderService<S>,
    pub invoices: InvoiceService<S>,
}

impl<S: Store + Clone> AppState<S> {
    /// Builds every service over clones of the same store handle.
    pub fn new(store: S) -> Self {
        Self {
            products: ProductService::new(store.clone()),
            orders: OrderService::new(store.clone()),
            invoices: InvoiceService::new(store),
        }
    }
}

/// Acknowledgement returned by create endpoints.
#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

impl CreatedResponse {
    fn new(entity: &str, id: i64) -> Self {
        Self {
            message: format!("{entity} created successfully"),
            id,
        }
    }
}
