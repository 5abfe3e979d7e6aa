//! Shared types used across the storefront crates.

pub mod status;
pub mod types;

pub use status::{OrderStatus, ParseOrderStatusError};
pub use types::{InvoiceId, OrderId, ProductId};
