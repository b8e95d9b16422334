//! Showcase view state: which product is active and whether the floating
//! switcher is shown.

use crate::catalog::{Product, ProductId};

/// Fraction of the viewport height the page may scroll before the
/// switcher hides.
pub const SWITCHER_VISIBLE_RATIO: f64 = 0.7;

/// Whether the switcher should be rendered at this scroll offset.
///
/// Strict comparison: exactly at the threshold the switcher is hidden.
pub fn switcher_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y < viewport_height * SWITCHER_VISIBLE_RATIO
}

/// Which side the product visual sits on.
///
/// Details and metric rows mirror along with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn is_left(&self) -> bool {
        matches!(self, Side::Left)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Side::Left => "side-left",
            Side::Right => "side-right",
        }
    }
}

impl From<ProductId> for Side {
    fn from(id: ProductId) -> Self {
        match id {
            ProductId::Plum => Side::Left,
            ProductId::Cupcake => Side::Right,
        }
    }
}

/// State owned by one showcase instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseState {
    active: ProductId,
    switcher_visible: bool,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            active: ProductId::Plum,
            switcher_visible: true,
        }
    }
}

impl ShowcaseState {
    pub fn active(&self) -> ProductId {
        self.active
    }

    pub fn active_product(&self) -> &'static Product {
        self.active.product()
    }

    pub fn side(&self) -> Side {
        Side::from(self.active)
    }

    pub fn is_switcher_visible(&self) -> bool {
        self.switcher_visible
    }

    /// Make `id` the active product. Returns `false` if it already was.
    pub fn select(&mut self, id: ProductId) -> bool {
        if self.active == id {
            return false;
        }
        log::debug!("showcase: {} -> {}", self.active, id);
        self.active = id;
        true
    }

    /// Recompute switcher visibility. Returns `true` if it flipped.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) -> bool {
        let visible = switcher_visible(scroll_y, viewport_height);
        let changed = visible != self.switcher_visible;
        self.switcher_visible = visible;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ShowcaseState::default();
        assert_eq!(state.active(), ProductId::Plum);
        assert!(state.is_switcher_visible());
        assert_eq!(state.side(), Side::Left);
        assert_eq!(state.active_product().title, "Royal Plum Delight");
    }

    #[test]
    fn test_select_switches_and_mirrors() {
        let mut state = ShowcaseState::default();
        assert!(state.select(ProductId::Cupcake));
        assert_eq!(state.active(), ProductId::Cupcake);
        assert_eq!(state.side(), Side::Right);
        assert!(state.select(ProductId::Plum));
        assert!(state.side().is_left());
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut state = ShowcaseState::default();
        let before = state;
        assert!(!state.select(ProductId::Plum));
        assert_eq!(state, before);
    }

    #[test]
    fn test_visibility_threshold() {
        let threshold = 1000.0 * SWITCHER_VISIBLE_RATIO;
        assert!(switcher_visible(threshold - 0.001, 1000.0));
        assert!(!switcher_visible(threshold, 1000.0));
        assert!(!switcher_visible(threshold + 0.001, 1000.0));
        assert!(switcher_visible(0.0, 1000.0));
        assert!(!switcher_visible(0.0, 0.0));
    }

    #[test]
    fn test_scroll_does_not_touch_active_product() {
        let mut state = ShowcaseState::default();
        state.select(ProductId::Cupcake);

        assert!(state.on_scroll(800.0, 1000.0));
        assert!(!state.is_switcher_visible());
        assert_eq!(state.active(), ProductId::Cupcake);

        assert!(!state.on_scroll(900.0, 1000.0));
        assert!(state.on_scroll(10.0, 1000.0));
        assert!(state.is_switcher_visible());
    }
}
