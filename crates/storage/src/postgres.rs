use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    Invoice, InvoiceId, NewInvoice, NewOrder, NewProduct, Order, OrderId, OrderStatus, Product,
    ProductId, Result, StorageError, store::Store,
};

/// PostgreSQL-backed store implementation.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new PostgreSQL store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        tracing::info!("database migrations applied");
        Ok(())
    }

    fn row_to_product(row: PgRow) -> Result<Product> {
        Ok(Product {
            id: ProductId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn row_to_order(row: PgRow) -> Result<Order> {
        let status: String = row.try_get("status")?;
        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| StorageError::CorruptRow {
                table: "order",
                reason: e.to_string(),
            })?;

        Ok(Order {
            id: OrderId::new(row.try_get("id")?),
            product_id: ProductId::new(row.try_get("product_id")?),
            status,
            created_at: row.try_get("created_at")?,
        })
    }

    fn row_to_invoice(row: PgRow) -> Result<Invoice> {
        Ok(Invoice {
            id: InvoiceId::new(row.try_get("id")?),
            order_id: OrderId::new(row.try_get("order_id")?),
            total_price: row.try_get("total_price")?,
            product_name: row.try_get("product_name")?,
            product_price: row.try_get("product_price")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, created_at
            FROM product
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_product).collect()
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT id, name, price, created_at
            FROM product
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_product).transpose()
    }

    async fn insert_product(&self, product: NewProduct) -> Result<Product> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO product (name, price, created_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(product.into_record(ProductId::new(id)))
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT id, product_id, status, created_at
            FROM "order"
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT id, product_id, status, created_at
            FROM "order"
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_order).transpose()
    }

    async fn insert_order(&self, order: NewOrder) -> Result<Order> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO "order" (product_id, status, created_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(order.product_id.as_i64())
        .bind(order.status.as_str())
        .bind(order.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(order.into_record(OrderId::new(id)))
    }

    async fn set_order_status(&self, id: OrderId, status: OrderStatus) -> Result<Option<Order>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            UPDATE "order"
            SET status = $2
            WHERE id = $1
            RETURNING id, product_id, status, created_at
            "#,
        )
        .bind(id.as_i64())
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_order).transpose()
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        let rows = sqlx::query(
            r#"
            SELECT id, order_id, total_price, product_name, product_price, created_at
            FROM invoice
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_invoice).collect()
    }

    async fn insert_invoice(&self, invoice: NewInvoice) -> Result<Invoice> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO invoice (order_id, total_price, product_name, product_price, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(invoice.order_id.as_i64())
        .bind(invoice.total_price)
        .bind(&invoice.product_name)
        .bind(invoice.product_price)
        .bind(invoice.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(invoice.into_record(InvoiceId::new(id)))
    }
}
