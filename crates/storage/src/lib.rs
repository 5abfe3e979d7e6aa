pub mod error;
pub mod memory;
pub mod postgres;
pub mod record;
pub mod store;

pub use common::{InvoiceId, OrderId, OrderStatus, ProductId};
pub use error::{Result, StorageError};
pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
pub use record::{Invoice, NewInvoice, NewOrder, NewProduct, Order, Product};
pub use store::{Store, StoreExt};
