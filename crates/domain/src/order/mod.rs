//! Orders and their status transitions.

mod commands;
mod service;

pub use commands::{CompleteOrder, CreateOrder, MarkOrderPaid};
pub use service::OrderService;
