use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw row identifier.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw row identifier.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Identifier of a product row, generated by the store.
    ProductId
}

define_id! {
    /// Identifier of an order row, generated by the store.
    OrderId
}

define_id! {
    /// Identifier of an invoice row, generated by the store.
    InvoiceId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_preserves_raw_value() {
        let id = ProductId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn id_displays_as_plain_integer() {
        assert_eq!(OrderId::from(7).to_string(), "7");
    }

    #[test]
    fn id_serializes_transparently() {
        let json = serde_json::to_string(&InvoiceId::new(3)).unwrap();
        assert_eq!(json, "3");
        let parsed: InvoiceId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, InvoiceId::new(3));
    }

    #[test]
    fn ids_order_numerically() {
        assert!(OrderId::new(2) < OrderId::new(10));
    }
}
