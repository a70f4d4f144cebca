//! Cart Line Model

use serde::{Deserialize, Serialize};

use super::product::Product;

/// One entry in the cart
///
/// `name`, `price` and `image` are copied from the product at add time so a
/// later catalog change never retroactively alters what the cart displays.
/// The cart holds at most one line per `product_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub product_id: u32,
    pub name: String,
    /// Unit price snapshot taken at add time
    pub price: f64,
    pub image: String,
    /// Always >= 1; decrementing at 1 is a no-op floor
    pub quantity: i32,
}

impl CartLine {
    /// Snapshot a product into a fresh line with quantity 1
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }
}
