//! Storefront core for the snack-bar shop
//!
//! The state-bearing logic behind a single-page storefront: an immutable
//! product catalog with flavor filtering, an insertion-ordered shopping
//! cart with add-time snapshots, and navigation/overlay state. Everything
//! runs synchronously on one thread; derived values (item count, subtotal)
//! are pure functions over the current state. Rendering, styling and asset
//! handling live in the presentation layer, which consumes this API.

pub mod catalog;
pub mod cart;
pub mod error;
pub mod models;
pub mod money;
pub mod nav;
pub mod store;

// Re-exports
pub use catalog::Catalog;
pub use cart::Cart;
pub use error::CatalogError;
pub use models::{CartLine, Flavor, FlavorFilter, Page, Product};
pub use nav::{NavEffect, NavState};
pub use store::StorefrontStore;
