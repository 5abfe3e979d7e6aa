use chrono::Utc;
use storage::{Invoice, NewInvoice, Store};

use crate::error::DomainError;
use crate::input::required;
use crate::value_objects::Price;

use super::CreateInvoice;

/// Service for listing and creating invoices.
pub struct InvoiceService<S: Store> {
    store: S,
}

impl<S: Store> InvoiceService<S> {
    /// Creates a new invoice service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns every invoice, oldest first, with the stored product snapshot.
    #[tracing::instrument(skip(self))]
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, DomainError> {
        Ok(self.store.list_invoices().await?)
    }

    /// Creates an invoice for an existing order, copying the current name
    /// and price of the given product.
    ///
    /// Checks run in order: order exists, product exists, total price valid.
    #[tracing::instrument(skip(self))]
    pub async fn create_invoice(&self, cmd: CreateInvoice) -> Result<Invoice, DomainError> {
        let order = self
            .store
            .get_order(cmd.order_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order"))?;

        let product = self
            .store
            .get_product(cmd.product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product"))?;

        let total_price = required("total_price", cmd.total_price)?;
        let total_price = Price::from_field("total_price", &total_price)?;

        if order.product_id != product.id {
            tracing::warn!(
                order_id = %order.id,
                order_product_id = %order.product_id,
                invoiced_product_id = %product.id,
                "invoiced product differs from the order's product"
            );
        }

        let invoice = self
            .store
            .insert_invoice(NewInvoice {
                order_id: order.id,
                total_price: total_price.value(),
                product_name: product.name,
                product_price: product.price,
                created_at: Utc::now(),
            })
            .await?;

        metrics::counter!("invoices_created_total").increment(1);
        tracing::info!(invoice_id = %invoice.id, order_id = %invoice.order_id, "invoice created");
        Ok(invoice)
    }
}
