//! Product catalogue.

mod service;

pub use service::ProductService;

use crate::error::ValidationError;
use crate::input::{FieldValue, required};
use crate::value_objects::{Price, ProductName};

/// Command to create a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    /// The product's display name.
    pub name: ProductName,

    /// The product's unit price.
    pub price: Price,
}

impl CreateProduct {
    /// Creates a new CreateProduct command.
    pub fn new(name: ProductName, price: Price) -> Self {
        Self { name, price }
    }

    /// Builds the command from raw request fields.
    ///
    /// The name is checked before the price.
    pub fn from_fields(
        name: Option<FieldValue>,
        price: Option<FieldValue>,
    ) -> Result<Self, ValidationError> {
        let name = ProductName::parse(required("name", name)?.into_text())?;
        let price = Price::from_field("price", &required("price", price)?)?;
        Ok(Self::new(name, price))
    }
}
