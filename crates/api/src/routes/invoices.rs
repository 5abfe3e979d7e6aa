//! Invoice endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use domain::{CreateInvoice, FieldValue};
use serde::{Deserialize, Serialize};
use storage::{Invoice, Store};

use super::{AppState, CreatedResponse};
use crate::error::ApiError;

/// Query string of `POST /invoices`.
#[derive(Debug, Deserialize)]
pub struct InvoiceTarget {
    pub order_id: Option<String>,
    pub product_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub total_price: Option<FieldValue>,
}

#[derive(Serialize)]
pub struct InvoiceResponse {
    pub id: i64,
    pub order_id: i64,
    pub total_price: f64,
    pub product_name: String,
    pub product_price: f64,
    pub created_at: String,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id.as_i64(),
            order_id: invoice.order_id.as_i64(),
            total_price: invoice.total_price,
            product_name: invoice.product_name,
            product_price: invoice.product_price,
            created_at: invoice.created_at.to_rfc3339(),
        }
    }
}

/// GET /invoices
#[tracing::instrument(skip(state))]
pub async fn list<S: Store + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<InvoiceResponse>>, ApiError> {
    let invoices = state.invoices.list_invoices().await?;
    Ok(Json(invoices.into_iter().map(Into::into).collect()))
}

/// POST /invoices?order_id=..&product_id=.. — body `{"total_price": ...}`.
#[tracing::instrument(skip(state, target, payload))]
pub async fn create<S: Store + 'static>(
    State(state): State<Arc<AppState<S>>>,
    target: Result<Query<InvoiceTarget>, QueryRejection>,
    payload: Result<Json<CreateInvoiceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Query(target) = target?;
    let Json(req) = payload?;

    let cmd = CreateInvoice::from_fields(
        target.order_id.map(FieldValue::Text),
        target.product_id.map(FieldValue::Text),
        req.total_price,
    )?;
    let invoice = state.invoices.create_invoice(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Invoice", invoice.id.as_i64())),
    ))
}
