//! Order endpoints and status transitions.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::OrderStatus;
use domain::{CompleteOrder, CreateOrder, FieldValue, MarkOrderPaid};
use serde::{Deserialize, Serialize};
use storage::{Order, OrderId, Store};

use super::{AppState, CreatedResponse};
use crate::error::ApiError;

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub product_id: Option<FieldValue>,
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub product_id: i64,
    pub status: OrderStatus,
    pub created_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.as_i64(),
            product_id: order.product_id.as_i64(),
            status: order.status,
            created_at: order.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct OrderProcessedResponse {
    pub message: &'static str,
    pub id: i64,
    pub status: OrderStatus,
}

impl From<Order> for OrderProcessedResponse {
    fn from(order: Order) -> Self {
        Self {
            message: "Order processed successfully",
            id: order.id.as_i64(),
            status: order.status,
        }
    }
}

// -- Handlers --

/// GET /orders
#[tracing::instrument(skip(state))]
pub async fn list<S: Store + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let orders = state.orders.list_orders().await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

/// POST /orders — body `{"product_id": ...}`.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: Store + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(req) = payload?;
    let cmd = CreateOrder::from_fields(req.product_id)?;
    let order = state.orders.create_order(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Order", order.id.as_i64())),
    ))
}

/// PUT /orders/complete/{order_id}
#[tracing::instrument(skip(state))]
pub async fn complete<S: Store + 'static>(
    State(state): State<Arc<AppState<S>>>,
    order_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<OrderProcessedResponse>, ApiError> {
    let Path(order_id) = order_id?;
    let order = state
        .orders
        .complete_order(CompleteOrder::new(OrderId::new(order_id)))
        .await?;
    Ok(Json(order.into()))
}

/// PUT /orders/paid/{order_id}
#[tracing::instrument(skip(state))]
pub async fn paid<S: Store + 'static>(
    State(state): State<Arc<AppState<S>>>,
    order_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<OrderProcessedResponse>, ApiError> {
    let Path(order_id) = order_id?;
    let order = state
        .orders
        .mark_order_paid(MarkOrderPaid::new(OrderId::new(order_id)))
        .await?;
    Ok(Json(order.into()))
}
