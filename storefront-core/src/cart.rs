//! Cart store - the sole owner of cart state
//!
//! An insertion-ordered list of lines, at most one per product id. Derived
//! values (item count, subtotal) are recomputed on every read rather than
//! cached; the data set is small enough that this is free.

use crate::models::cart::CartLine;
use crate::models::product::Product;
use crate::money;

/// Shopping cart
///
/// Starts empty, lives for the session, never persisted.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order, for display
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product
    ///
    /// Increments the existing line if the product is already in the cart,
    /// otherwise appends a new line with quantity 1, snapshotting name,
    /// price and image from the product. Repeated calls with the same
    /// product only ever increment, never duplicate.
    pub fn add_item(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => {
                line.quantity += 1;
                tracing::debug!(product_id = product.id, quantity = line.quantity, "Incremented cart line");
            }
            None => {
                self.lines.push(CartLine::from_product(product));
                tracing::debug!(product_id = product.id, "Added cart line");
            }
        }
    }

    /// Delete the line with the given product id; no-op if absent
    pub fn remove_item(&mut self, product_id: u32) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() < before {
            tracing::debug!(product_id, "Removed cart line");
        }
    }

    /// Adjust a line's quantity by `delta`, flooring at 1
    ///
    /// Decrementing at quantity 1 is a no-op floor, not a removal; lines
    /// are only ever deleted through [`Cart::remove_item`]. No-op if the
    /// product is not in the cart.
    pub fn update_quantity(&mut self, product_id: u32, delta: i32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(delta).max(1);
            tracing::debug!(product_id, quantity = line.quantity, "Updated cart line quantity");
        }
    }

    /// Total number of items across all lines
    pub fn item_count(&self) -> i32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `price * quantity` over all lines, rounded to 2 decimal places
    pub fn subtotal(&self) -> f64 {
        let total = self
            .lines
            .iter()
            .map(|l| money::line_total(l.price, l.quantity))
            .sum();
        money::to_f64(total)
    }

    /// Empty the cart (checkout-completion hook)
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Flavor;

    fn test_product(id: u32, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            flavor: Flavor::Almond,
            price,
            protein: "20G".to_string(),
            description: String::new(),
            image: format!("bar-{id}.jpg"),
            tag: String::new(),
            review: String::new(),
        }
    }

    #[test]
    fn test_add_twice_increments_single_line() {
        let mut cart = Cart::new();
        let product = test_product(1, "ALMOND CRUNCH", 2.99);

        cart.add_item(&product);
        cart.add_item(&product);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product_id, 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(2, "PEANUT BUTTER", 2.99));
        cart.add_item(&test_product(1, "ALMOND CRUNCH", 2.99));
        cart.add_item(&test_product(2, "PEANUT BUTTER", 2.99));

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_update_quantity_floors_at_one() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, "ALMOND CRUNCH", 2.99));
        cart.update_quantity(1, 2); // 3

        cart.update_quantity(1, -100);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines().len(), 1, "floor never removes the line");
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, "ALMOND CRUNCH", 2.99));
        cart.update_quantity(42, 5);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, "ALMOND CRUNCH", 2.99));

        cart.remove_item(1);
        assert!(cart.is_empty());

        // Second call is a no-op, not an error
        cart.remove_item(1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_item_count_and_subtotal() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, "ALMOND CRUNCH", 2.99));
        cart.add_item(&test_product(2, "PEANUT BUTTER", 2.99));
        cart.update_quantity(1, 1);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), 8.97);
    }

    #[test]
    fn test_subtotal_has_no_float_drift() {
        let mut cart = Cart::new();
        let product = test_product(1, "ALMOND CRUNCH", 0.01);
        cart.add_item(&product);
        cart.update_quantity(1, 999); // quantity 1000

        assert_eq!(cart.subtotal(), 10.0);
    }

    #[test]
    fn test_snapshot_survives_catalog_price_change() {
        let mut cart = Cart::new();
        let mut product = test_product(1, "ALMOND CRUNCH", 2.99);
        cart.add_item(&product);

        product.price = 4.99;
        cart.add_item(&product);

        // Existing line keeps the add-time snapshot price
        assert_eq!(cart.lines()[0].price, 2.99);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, "ALMOND CRUNCH", 2.99));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal(), 0.0);
    }
}
