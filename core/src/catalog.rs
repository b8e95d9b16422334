//! Static product catalog for the showcase.
//!
//! Products differ only in data, so each one is a plain `&'static` record
//! looked up through [`ProductId`].

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a showcased product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductId {
    #[default]
    Plum,
    Cupcake,
}

impl ProductId {
    /// Every product, in switcher order.
    pub const ALL: [ProductId; 2] = [ProductId::Plum, ProductId::Cupcake];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductId::Plum => "plum",
            ProductId::Cupcake => "cupcake",
        }
    }

    /// The static record for this identifier.
    pub fn product(&self) -> &'static Product {
        match self {
            ProductId::Plum => &PLUM_CAKE,
            ProductId::Cupcake => &CUPCAKE,
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Records
// =============================================================================

/// Icon drawn next to a metric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricIcon {
    Heart,
    Sparkles,
}

impl MetricIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            MetricIcon::Heart => "♥",
            MetricIcon::Sparkles => "✨",
        }
    }
}

/// A named percentage shown as a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureMetric {
    pub label: &'static str,
    /// 0..=100
    pub value: u8,
    pub icon: MetricIcon,
}

impl FeatureMetric {
    /// Labels above half are drawn at full contrast.
    pub fn is_prominent(&self) -> bool {
        self.value > 50
    }

    /// CSS width of the bar, e.g. `"75%"`.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.value.min(100))
    }
}

/// CSS classes carrying a product's colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub gradient: &'static str,
    pub glow: &'static str,
    pub ring: &'static str,
}

/// Availability and rating summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductStats {
    pub availability: &'static str,
    pub rating: f32,
}

/// A showcased product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    /// Short name used on the switcher.
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Path relative to the site root.
    pub image: &'static str,
    pub theme: Theme,
    pub stats: ProductStats,
    pub features: &'static [FeatureMetric],
}

impl Product {
    /// e.g. `"4.9 Rating • Fresh Daily"`.
    pub fn rating_summary(&self) -> String {
        format!("{:.1} Rating • {}", self.stats.rating, self.stats.availability)
    }
}

pub static PLUM_CAKE: Product = Product {
    id: ProductId::Plum,
    label: "Plum Cake",
    title: "Royal Plum Delight",
    description: "Our signature plum cake infused with the finest seasonal plums, aged rum, \
                  and a hint of cinnamon. A timeless classic for celebrations.",
    image: "assets/plum-cake.svg",
    theme: Theme {
        gradient: "gradient-plum",
        glow: "glow-plum",
        ring: "ring-plum",
    },
    stats: ProductStats {
        availability: "Fresh Daily",
        rating: 4.9,
    },
    features: &[
        FeatureMetric { label: "Sweetness", value: 75, icon: MetricIcon::Heart },
        FeatureMetric { label: "Freshness", value: 98, icon: MetricIcon::Sparkles },
    ],
};

pub static CUPCAKE: Product = Product {
    id: ProductId::Cupcake,
    label: "Cupcake",
    title: "Velvet Dream Cupcake",
    description: "Fluffy vanilla sponge topped with our signature rose-tinted buttercream swirl. \
                  Perfect for gifting or treating yourself.",
    image: "assets/cupcake.svg",
    theme: Theme {
        gradient: "gradient-rose",
        glow: "glow-rose",
        ring: "ring-rose",
    },
    stats: ProductStats {
        availability: "Baked Fresh",
        rating: 4.8,
    },
    features: &[
        FeatureMetric { label: "Fluffiness", value: 94, icon: MetricIcon::Sparkles },
        FeatureMetric { label: "Love Factor", value: 100, icon: MetricIcon::Heart },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_matches_identifier() {
        for id in ProductId::ALL {
            assert_eq!(id.product().id, id);
        }
    }

    #[test]
    fn test_metrics_are_percentages() {
        for id in ProductId::ALL {
            let product = id.product();
            assert!(!product.features.is_empty());
            assert!(product.features.iter().all(|m| m.value <= 100));
        }
    }

    #[test]
    fn test_rating_summary() {
        assert_eq!(PLUM_CAKE.rating_summary(), "4.9 Rating • Fresh Daily");
        assert_eq!(CUPCAKE.rating_summary(), "4.8 Rating • Baked Fresh");
    }

    #[test]
    fn test_prominent_threshold() {
        let metric = FeatureMetric { label: "Half", value: 50, icon: MetricIcon::Heart };
        assert!(!metric.is_prominent());
        let metric = FeatureMetric { value: 51, ..metric };
        assert!(metric.is_prominent());
        assert_eq!(metric.bar_width(), "51%");
    }

    #[test]
    fn test_identifier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ProductId::Cupcake).unwrap(), "\"cupcake\"");
        assert_eq!(ProductId::default(), ProductId::Plum);
    }
}
