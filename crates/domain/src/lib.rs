//! Domain layer for the storefront service.
//!
//! This crate provides the operations behind the HTTP surface:
//! - Coercion of raw request fields into typed commands
//! - Product, order and invoice services over any [`storage::Store`]
//! - The domain error taxonomy mapped to responses by the API

pub mod error;
pub mod input;
pub mod invoice;
pub mod order;
pub mod product;
pub mod value_objects;

pub use error::{DomainError, ValidationError};
pub use input::FieldValue;
pub use invoice::{CreateInvoice, InvoiceService};
pub use order::{CompleteOrder, CreateOrder, MarkOrderPaid, OrderService};
pub use product::{CreateProduct, ProductService};
pub use value_objects::{Price, ProductName};
