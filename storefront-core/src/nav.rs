//! Navigation and overlay state
//!
//! Tracks the current page and the two overlay panels (menu, cart). The
//! overlays are independent flags with no interlocking; stacking and visual
//! precedence belong to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::models::page::Page;

/// Presentation-side effect emitted by a navigation commit
///
/// Returned from [`NavState::navigate_to`] after the new page state is
/// committed, so the caller runs it exactly once per navigation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    ScrollToTop,
}

/// Current page and overlay visibility
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavState {
    current_page: Page,
    menu_open: bool,
    cart_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Switch the displayed page
    ///
    /// Menu navigation always dismisses itself, so the menu overlay closes;
    /// the cart overlay is untouched. The scroll-to-top effect is emitted on
    /// every call, including repeated navigation to the same page.
    #[must_use = "the presentation layer must run the returned effect"]
    pub fn navigate_to(&mut self, page: Page) -> NavEffect {
        self.current_page = page;
        self.menu_open = false;
        tracing::debug!(page = ?page, "Navigated");
        NavEffect::ScrollToTop
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }
}
