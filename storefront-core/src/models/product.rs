//! Product Model

use serde::{Deserialize, Serialize};

/// Flavor category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flavor {
    Almond,
    Peanut,
    Chocolate,
    Berry,
}

/// Flavor filter for the catalog browsing page
///
/// `All` is the default and passes every product through unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlavorFilter {
    #[default]
    All,
    Almond,
    Peanut,
    Chocolate,
    Berry,
}

impl FlavorFilter {
    /// Whether a product with the given flavor passes this filter
    pub fn matches(&self, flavor: Flavor) -> bool {
        match self {
            Self::All => true,
            Self::Almond => flavor == Flavor::Almond,
            Self::Peanut => flavor == Flavor::Peanut,
            Self::Chocolate => flavor == Flavor::Chocolate,
            Self::Berry => flavor == Flavor::Berry,
        }
    }
}

impl From<Flavor> for FlavorFilter {
    fn from(flavor: Flavor) -> Self {
        match flavor {
            Flavor::Almond => Self::Almond,
            Flavor::Peanut => Self::Peanut,
            Flavor::Chocolate => Self::Chocolate,
            Flavor::Berry => Self::Berry,
        }
    }
}

/// Product entity
///
/// Catalog products are fixed at construction and never mutated.
/// `protein`, `description`, `image`, `tag` and `review` are opaque display
/// strings owned by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub flavor: Flavor,
    /// Unit price in currency units
    pub price: f64,
    /// Protein content for display, e.g. "20G" (not used in computation)
    pub protein: String,
    pub description: String,
    pub image: String,
    /// Promotional tag, may be empty
    #[serde(default)]
    pub tag: String,
    /// Review quote, may be empty
    #[serde(default)]
    pub review: String,
}
