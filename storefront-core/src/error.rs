//! Error types for catalog construction

use thiserror::Error;

/// Catalog construction errors
///
/// Store mutation operations are total functions and never fail; only
/// building a catalog from malformed product data is an error.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(u32),

    #[error("Product name must not be empty (id {0})")]
    EmptyName(u32),

    #[error("Product price must be positive, got {price} (id {id})")]
    InvalidPrice { id: u32, price: f64 },
}
