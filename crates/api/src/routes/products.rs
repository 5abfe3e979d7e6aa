//! Product endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use domain::{CreateProduct, FieldValue};
use serde::{Deserialize, Serialize};
use storage::{Product, Store};

use super::{AppState, CreatedResponse};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<FieldValue>,
    pub price: Option<FieldValue>,
}

#[derive(Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name,
            price: product.price,
            created_at: product.created_at.to_rfc3339(),
        }
    }
}

/// GET /products
#[tracing::instrument(skip(state))]
pub async fn list<S: Store + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = state.products.list_products().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// POST /products — body `{"name": ..., "price": ...}`.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: Store + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(req) = payload?;
    let cmd = CreateProduct::from_fields(req.name, req.price)?;
    let product = state.products.create_product(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Product", product.id.as_i64())),
    ))
}
