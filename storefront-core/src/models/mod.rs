//! Data models for the storefront core

pub mod cart;
pub mod page;
pub mod product;

pub use cart::CartLine;
pub use page::Page;
pub use product::{Flavor, FlavorFilter, Product};
