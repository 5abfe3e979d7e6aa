//! Integration tests for the domain services.
//!
//! These tests drive products, orders and invoices through the services
//! against a shared in-memory store.

use domain::{
    CompleteOrder, CreateInvoice, CreateOrder, CreateProduct, DomainError, FieldValue,
    InvoiceService, MarkOrderPaid, OrderService, Price, ProductName, ProductService,
    ValidationError,
};
use storage::{InMemoryStore, OrderId, OrderStatus, ProductId, Store};

struct Services {
    store: InMemoryStore,
    products: ProductService<InMemoryStore>,
    orders: OrderService<InMemoryStore>,
    invoices: InvoiceService<InMemoryStore>,
}

/// Helper to create services sharing one store
fn create_services() -> Services {
    let store = InMemoryStore::new();
    Services {
        products: ProductService::new(store.clone()),
        orders: OrderService::new(store.clone()),
        invoices: InvoiceService::new(store.clone()),
        store,
    }
}

fn product(name: &str, price: f64) -> CreateProduct {
    CreateProduct::new(
        ProductName::parse(name).unwrap(),
        Price::new("price", price).unwrap(),
    )
}

mod products {
    use super::*;

    #[tokio::test]
    async fn created_products_are_listed_with_their_values() {
        let s = create_services();

        let pen = s.products.create_product(product("Pen", 1.5)).await.unwrap();
        let ink = s.products.create_product(product("Ink", 0.0)).await.unwrap();

        let listed = s.products.list_products().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], pen);
        assert_eq!(listed[1], ink);
        assert_eq!(listed[0].name, "Pen");
        assert_eq!(listed[0].price, 1.5);
    }

    #[tokio::test]
    async fn created_at_is_set_at_creation() {
        let s = create_services();
        let before = chrono::Utc::now();
        let pen = s.products.create_product(product("Pen", 1.5)).await.unwrap();
        let after = chrono::Utc::now();

        assert!(pen.created_at >= before && pen.created_at <= after);
    }

    #[tokio::test]
    async fn raw_fields_are_validated_before_persisting() {
        let s = create_services();

        let result =
            CreateProduct::from_fields(Some(FieldValue::from("")), Some(FieldValue::from(1.0)));
        assert!(result.is_err());
        assert!(s.products.list_products().await.unwrap().is_empty());
    }
}

mod orders {
    use super::*;

    #[tokio::test]
    async fn order_for_missing_product_is_not_persisted() {
        let s = create_services();

        let err = s
            .orders
            .create_order(CreateOrder::new(ProductId::new(999)))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { entity: "Product" }));
        assert_eq!(err.to_string(), "Product not found");
        assert!(s.store.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn order_lifecycle_pending_paid_completed() {
        let s = create_services();
        let pen = s.products.create_product(product("Pen", 1.5)).await.unwrap();

        let order = s.orders.create_order(CreateOrder::new(pen.id)).await.unwrap();
        assert_eq!(order.status, OrderStatus::Pending);

        s.orders
            .mark_order_paid(MarkOrderPaid::new(order.id))
            .await
            .unwrap();
        let listed = s.orders.list_orders().await.unwrap();
        assert_eq!(listed[0].status, OrderStatus::Paid);

        s.orders
            .complete_order(CompleteOrder::new(order.id))
            .await
            .unwrap();
        let listed = s.orders.list_orders().await.unwrap();
        assert_eq!(listed[0].status, OrderStatus::Completed);
        assert_eq!(listed[0].created_at, order.created_at);
    }

    #[tokio::test]
    async fn pending_order_can_be_completed_directly() {
        let s = create_services();
        let pen = s.products.create_product(product("Pen", 1.5)).await.unwrap();
        let order = s.orders.create_order(CreateOrder::new(pen.id)).await.unwrap();

        let completed = s
            .orders
            .complete_order(CompleteOrder::new(order.id))
            .await
            .unwrap();
        assert_eq!(completed.status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn completed_order_can_be_marked_paid_again() {
        let s = create_services();
        let pen = s.products.create_product(product("Pen", 1.5)).await.unwrap();
        let order = s.orders.create_order(CreateOrder::new(pen.id)).await.unwrap();

        s.orders
            .complete_order(CompleteOrder::new(order.id))
            .await
            .unwrap();
        let paid = s
            .orders
            .mark_order_paid(MarkOrderPaid::new(order.id))
            .await
            .unwrap();
        assert_eq!(paid.status, OrderStatus::Paid);
    }

    #[tokio::test]
    async fn transitions_are_idempotent() {
        let s = create_services();
        let pen = s.products.create_product(product("Pen", 1.5)).await.unwrap();
        let order = s.orders.create_order(CreateOrder::new(pen.id)).await.unwrap();

        for _ in 0..3 {
            let paid = s
                .orders
                .mark_order_paid(MarkOrderPaid::new(order.id))
                .await
                .unwrap();
            assert_eq!(paid.status, OrderStatus::Paid);
        }
        for _ in 0..3 {
            let completed = s
                .orders
                .complete_order(CompleteOrder::new(order.id))
                .await
                .unwrap();
            assert_eq!(completed.status, OrderStatus::Completed);
        }
        assert_eq!(s.orders.list_orders().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn transitions_on_missing_order_fail() {
        let s = create_services();

        let err = s
            .orders
            .mark_order_paid(MarkOrderPaid::new(OrderId::new(1)))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Order not found");
    }
}

mod invoices {
    use super::*;

    #[tokio::test]
    async fn invoice_snapshots_product_name_and_price() {
        let s = create_services();
        let pen = s.products.create_product(product("Pen", 1.5)).await.unwrap();
        let order = s.orders.create_order(CreateOrder::new(pen.id)).await.unwrap();

        let invoice = s
            .invoices
            .create_invoice(CreateInvoice::new(order.id, pen.id, 9.99))
            .await
            .unwrap();

        assert_eq!(invoice.order_id, order.id);
        assert_eq!(invoice.total_price, 9.99);
        assert_eq!(invoice.product_name, "Pen");
        assert_eq!(invoice.product_price, 1.5);

        let listed = s.invoices.list_invoices().await.unwrap();
        assert_eq!(listed, vec![invoice]);
    }

    #[tokio::test]
    async fn total_price_is_not_derived_from_product() {
        let s = create_services();
        let pen = s.products.create_product(product("Pen", 1.5)).await.unwrap();
        let order = s.orders.create_order(CreateOrder::new(pen.id)).await.unwrap();

        let invoice = s
            .invoices
            .create_invoice(CreateInvoice::new(order.id, pen.id, 100.0))
            .await
            .unwrap();
        assert_eq!(invoice.total_price, 100.0);
        assert_eq!(invoice.product_price, 1.5);
    }

    #[tokio::test]
    async fn missing_order_is_reported_before_missing_product() {
        let s = create_services();

        let err = s
            .invoices
            .create_invoice(CreateInvoice::new(
                OrderId::new(1),
                ProductId::new(1),
                1.0,
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Order" }));
        assert!(s.invoices.list_invoices().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_order_is_reported_before_malformed_total_price() {
        let s = create_services();
        s.products.create_product(product("Pen", 1.5)).await.unwrap();

        let err = s
            .invoices
            .create_invoice(CreateInvoice::new(OrderId::new(99), ProductId::new(1), "lots"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Order" }));
    }

    #[tokio::test]
    async fn missing_product_is_reported_before_missing_total_price() {
        let s = create_services();
        let pen = s.products.create_product(product("Pen", 1.5)).await.unwrap();
        let order = s.orders.create_order(CreateOrder::new(pen.id)).await.unwrap();

        let cmd = CreateInvoice::from_fields(
            Some(FieldValue::from(order.id.as_i64())),
            Some(FieldValue::from(42)),
            None,
        )
        .unwrap();
        let err = s.invoices.create_invoice(cmd).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Product" }));
    }

    #[tokio::test]
    async fn total_price_is_validated_once_both_rows_exist() {
        let s = create_services();
        let pen = s.products.create_product(product("Pen", 1.5)).await.unwrap();
        let order = s.orders.create_order(CreateOrder::new(pen.id)).await.unwrap();

        let err = s
            .invoices
            .create_invoice(CreateInvoice::new(order.id, pen.id, -1.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::NegativeNumber {
                field: "total_price",
                ..
            })
        ));

        let cmd = CreateInvoice::from_fields(
            Some(FieldValue::from(order.id.as_i64())),
            Some(FieldValue::from(pen.id.as_i64())),
            None,
        )
        .unwrap();
        let err = s.invoices.create_invoice(cmd).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::MissingField {
                field: "total_price"
            })
        ));
        assert!(s.invoices.list_invoices().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_product_is_reported() {
        let s = create_services();
        let pen = s.products.create_product(product("Pen", 1.5)).await.unwrap();
        let order = s.orders.create_order(CreateOrder::new(pen.id)).await.unwrap();

        let err = s
            .invoices
            .create_invoice(CreateInvoice::new(order.id, ProductId::new(42), 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Product" }));
        assert!(s.invoices.list_invoices().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invoiced_product_may_differ_from_ordered_product() {
        let s = create_services();
        let pen = s.products.create_product(product("Pen", 1.5)).await.unwrap();
        let ink = s.products.create_product(product("Ink", 4.0)).await.unwrap();
        let order = s.orders.create_order(CreateOrder::new(pen.id)).await.unwrap();

        let invoice = s
            .invoices
            .create_invoice(CreateInvoice::new(order.id, ink.id, 4.0))
            .await
            .unwrap();
        assert_eq!(invoice.product_name, "Ink");
        assert_eq!(invoice.product_price, 4.0);
    }
}
