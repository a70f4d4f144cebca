//! Page Selector
//!
//! One state per storefront page. Every page is reachable from every other
//! page directly; there is no terminal state.

use serde::{Deserialize, Serialize};

/// Storefront page identifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Shop,
    BestSellers,
    OurScience,
    TheStory,
    Locations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wire_format() {
        assert_eq!(
            serde_json::to_string(&Page::BestSellers).unwrap(),
            "\"best-sellers\""
        );
        let page: Page = serde_json::from_str("\"our-science\"").unwrap();
        assert_eq!(page, Page::OurScience);
    }

    #[test]
    fn test_initial_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }
}
