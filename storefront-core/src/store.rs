//! StorefrontStore - the single write entry point for the presentation layer
//!
//! Composes the catalog, cart and navigation state and enumerates every
//! mutation the UI can trigger. Control flow is synchronous and
//! single-threaded: user interaction -> mutation -> derived-value
//! recomputation -> re-render.

use crate::catalog::Catalog;
use crate::cart::Cart;
use crate::models::page::Page;
use crate::models::product::{FlavorFilter, Product};
use crate::nav::{NavEffect, NavState};

/// Application state store
#[derive(Debug, Clone)]
pub struct StorefrontStore {
    catalog: Catalog,
    cart: Cart,
    nav: NavState,
    flavor_filter: FlavorFilter,
}

impl StorefrontStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            nav: NavState::new(),
            flavor_filter: FlavorFilter::All,
        }
    }

    // -- Read access --

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn flavor_filter(&self) -> FlavorFilter {
        self.flavor_filter
    }

    /// Catalog subsequence passing the current flavor filter, in catalog order
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter_by_flavor(self.flavor_filter)
    }

    // -- Cart mutations --

    /// Add one unit of a catalog product to the cart and open the cart overlay
    ///
    /// Silent no-op on an id not present in the catalog.
    pub fn add_to_cart(&mut self, product_id: u32) {
        let Some(product) = self.catalog.get(product_id) else {
            tracing::debug!(product_id, "add_to_cart ignored unknown product id");
            return;
        };
        let product = product.clone();
        self.cart.add_item(&product);
        self.nav.open_cart();
    }

    /// Delete a cart line; no-op if absent
    pub fn remove_from_cart(&mut self, product_id: u32) {
        self.cart.remove_item(product_id);
    }

    /// Adjust a cart line's quantity by `delta`, flooring at 1
    pub fn update_quantity(&mut self, product_id: u32, delta: i32) {
        self.cart.update_quantity(product_id, delta);
    }

    /// Empty the cart
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // -- Navigation --

    /// Switch pages; the caller runs the returned effect after this commits
    #[must_use = "the presentation layer must run the returned effect"]
    pub fn navigate_to(&mut self, page: Page) -> NavEffect {
        self.nav.navigate_to(page)
    }

    pub fn open_menu(&mut self) {
        self.nav.open_menu();
    }

    pub fn close_menu(&mut self) {
        self.nav.close_menu();
    }

    pub fn open_cart(&mut self) {
        self.nav.open_cart();
    }

    pub fn close_cart(&mut self) {
        self.nav.close_cart();
    }

    // -- Catalog browsing --

    /// Narrow the shop page to one flavor category, or `All`
    pub fn set_flavor_filter(&mut self, filter: FlavorFilter) {
        self.flavor_filter = filter;
    }
}
