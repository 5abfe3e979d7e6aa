use chrono::Utc;
use storage::{NewProduct, Product, Store};

use crate::error::DomainError;

use super::CreateProduct;

/// Service for listing and creating products.
pub struct ProductService<S: Store> {
    store: S,
}

impl<S: Store> ProductService<S> {
    /// Creates a new product service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns every product, oldest first.
    #[tracing::instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.store.list_products().await?)
    }

    /// Persists a new product stamped with the current time.
    #[tracing::instrument(skip(self))]
    pub async fn create_product(&self, cmd: CreateProduct) -> Result<Product, DomainError> {
        let product = self
            .store
            .insert_product(NewProduct {
                name: cmd.name.into_inner(),
                price: cmd.price.value(),
                created_at: Utc::now(),
            })
            .await?;

        metrics::counter!("products_created_total").increment(1);
        tracing::info!(product_id = %product.id, name = %product.name, "product created");
        Ok(product)
    }
}
