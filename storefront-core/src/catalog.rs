//! Catalog - the fixed, read-only set of purchasable products
//!
//! Built once at startup and never mutated. Supplies data to the storefront
//! and the flavor-filtering view.

use crate::error::CatalogError;
use crate::models::product::{Flavor, FlavorFilter, Product};

/// Immutable product catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every product record
    ///
    /// Rejects duplicate ids, empty names and non-positive prices.
    /// Display order is the insertion order of `products`.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id));
            }
            if !product.price.is_finite() || product.price <= 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: product.id,
                    price: product.price,
                });
            }
        }
        Ok(Self { products })
    }

    /// The built-in snack-bar lineup
    pub fn snack_bars() -> Self {
        let bar = |id, name: &str, flavor, protein: &str, desc: &str, image: &str, tag: &str, review: &str| Product {
            id,
            name: name.to_string(),
            flavor,
            price: 2.99,
            protein: protein.to_string(),
            description: desc.to_string(),
            image: image.to_string(),
            tag: tag.to_string(),
            review: review.to_string(),
        };

        // Fixed lineup; validation cannot fail on this data.
        Self::new(vec![
            bar(1, "ALMOND CRUNCH", Flavor::Almond, "20G", "Crunchy almonds with 20g protein", "almond-crunch.jpg", "BEST SELLER", "Best protein bar ever!"),
            bar(2, "PEANUT BUTTER", Flavor::Peanut, "20G", "Creamy peanut butter bliss", "peanut-butter.jpg", "NEW", "Actually tastes like dessert."),
            bar(3, "CHOCO SWIRL", Flavor::Chocolate, "20G", "Decadent dark cocoa fudge", "choco-swirl.jpg", "POPULAR", "Fuel for my 5AM runs."),
            bar(4, "BERRY BLITZ", Flavor::Berry, "20G", "Explosive berry energy", "berry-blitz.jpg", "LIMITED", "My kids even love them!"),
            bar(5, "ALMOND PEAK", Flavor::Almond, "25G", "Maximum crunch, extra fuel", "almond-peak.jpg", "HI-PROTEIN", "Great post-workout."),
            bar(6, "NUTTY NUT", Flavor::Peanut, "20G", "Roasted peanut perfection", "nutty-nut.jpg", "", "So satisfying."),
            bar(7, "COCOA CRAZE", Flavor::Chocolate, "20G", "Double chocolate madness", "cocoa-craze.jpg", "", "Chocolate lovers dream."),
            bar(8, "WILD BERRY", Flavor::Berry, "20G", "Mixed forest berries mix", "wild-berry.jpg", "", "Fresh and light."),
        ])
        .expect("built-in catalog is valid")
    }

    /// Full ordered product list; stable across calls
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Order-preserving subsequence of products passing the filter
    ///
    /// `FlavorFilter::All` yields the full list.
    pub fn filter_by_flavor(&self, filter: FlavorFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p.flavor))
            .collect()
    }

    /// Look up a product by id
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
