//! Order service providing the order operations.

use chrono::Utc;
use storage::{NewOrder, Order, OrderId, OrderStatus, Store, StoreExt};

use crate::error::DomainError;

use super::{CompleteOrder, CreateOrder, MarkOrderPaid};

/// Service for managing orders.
///
/// Status transitions are permissive: any order can be marked paid or
/// completed regardless of its current status, and repeating a transition
/// leaves the order in the same status.
pub struct OrderService<S: Store> {
    store: S,
}

impl<S: Store> OrderService<S> {
    /// Creates a new order service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns every order, oldest first.
    #[tracing::instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.store.list_orders().await?)
    }

    /// Creates a pending order for an existing product.
    #[tracing::instrument(skip(self))]
    pub async fn create_order(&self, cmd: CreateOrder) -> Result<Order, DomainError> {
        if !self.store.product_exists(cmd.product_id).await? {
            return Err(DomainError::not_found("Product"));
        }

        let order = self
            .store
            .insert_order(NewOrder {
                product_id: cmd.product_id,
                status: OrderStatus::Pending,
                created_at: Utc::now(),
            })
            .await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id, product_id = %order.product_id, "order created");
        Ok(order)
    }

    /// Marks an order as completed.
    #[tracing::instrument(skip(self))]
    pub async fn complete_order(&self, cmd: CompleteOrder) -> Result<Order, DomainError> {
        self.transition(cmd.order_id, OrderStatus::Completed).await
    }

    /// Marks an order as paid.
    #[tracing::instrument(skip(self))]
    pub async fn mark_order_paid(&self, cmd: MarkOrderPaid) -> Result<Order, DomainError> {
        self.transition(cmd.order_id, OrderStatus::Paid).await
    }

    async fn transition(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, DomainError> {
        let previous = self
            .store
            .get_order(order_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order"))?
            .status;

        let order = self
            .store
            .set_order_status(order_id, status)
            .await?
            .ok_or_else(|| DomainError::not_found("Order"))?;

        metrics::counter!("order_status_transitions_total", "status" => status.as_str())
            .increment(1);
        tracing::info!(%order_id, from = %previous, to = %status, "order status changed");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use storage::{InMemoryStore, NewProduct, ProductId};

    use super::*;

    async fn service_with_product() -> (OrderService<InMemoryStore>, ProductId) {
        let store = InMemoryStore::new();
        let product = store
            .insert_product(NewProduct {
                name: "Pen".to_string(),
                price: 1.5,
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        (OrderService::new(store), product.id)
    }

    #[tokio::test]
    async fn test_create_order_starts_pending() {
        let (service, product_id) = service_with_product().await;

        let order = service
            .create_order(CreateOrder::new(product_id))
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.product_id, product_id);
    }

    #[tokio::test]
    async fn test_create_order_for_missing_product() {
        let (service, _) = service_with_product().await;

        let result = service
            .create_order(CreateOrder::new(ProductId::new(999)))
            .await;

        assert!(matches!(
            result,
            Err(DomainError::NotFound { entity: "Product" })
        ));
        assert!(service.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transitions() {
        let (service, product_id) = service_with_product().await;
        let order = service
            .create_order(CreateOrder::new(product_id))
            .await
            .unwrap();

        let paid = service
            .mark_order_paid(MarkOrderPaid::new(order.id))
            .await
            .unwrap();
        assert_eq!(paid.status, OrderStatus::Paid);

        let completed = service
            .complete_order(CompleteOrder::new(order.id))
            .await
            .unwrap();
        assert_eq!(completed.status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn test_transition_missing_order() {
        let (service, _) = service_with_product().await;

        let result = service
            .complete_order(CompleteOrder::new(OrderId::new(5)))
            .await;
        assert!(matches!(
            result,
            Err(DomainError::NotFound { entity: "Order" })
        ));

        let result = service
            .mark_order_paid(MarkOrderPaid::new(OrderId::new(5)))
            .await;
        assert!(matches!(
            result,
            Err(DomainError::NotFound { entity: "Order" })
        ));
    }
}
