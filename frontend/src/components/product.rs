//! Product visual and details panes of the showcase.

use cakes_core::{Product, Side};
use leptos::*;

use crate::config::CONTACT_SECTION_ID;

/// Product image with its glow, entering from the active side.
#[component]
pub fn ProductVisual(product: &'static Product, side: Side) -> impl IntoView {
    view! {
        <div class="product-visual">
            <div class=format!("product-glow {}", product.theme.gradient)></div>
            <div class="product-frame">
                <div class="product-float">
                    <img
                        class=format!("product-image enter-{}", side.css_class())
                        src=product.image
                        alt=product.title
                        draggable="false"
                    />
                </div>
            </div>
        </div>
    }
}

/// Label, title, description, metric bars and rating.
#[component]
pub fn ProductDetails(product: &'static Product, side: Side) -> impl IntoView {
    let on_order = move |_| {
        if let Some(section) = document().get_element_by_id(CONTACT_SECTION_ID) {
            section.scroll_into_view();
        }
    };

    view! {
        <div class=format!("product-details stagger {}", side.css_class())>
            <h2 class="product-label">{product.label}</h2>
            <h1 class="product-title">{product.title}</h1>
            <p class="product-description">{product.description}</p>

            <div class=format!("metrics {}", product.theme.ring)>
                {product
                    .features
                    .iter()
                    .enumerate()
                    .map(|(idx, metric)| {
                        let bar_style = format!(
                            "--bar-width: {}; animation-delay: {}ms",
                            metric.bar_width(),
                            400 + idx * 150,
                        );
                        view! {
                            <div class="metric">
                                <div class="metric-head">
                                    <div class="metric-label" class:prominent=metric.is_prominent()>
                                        <span class="metric-icon">{metric.icon.glyph()}</span>
                                        <span>{metric.label}</span>
                                    </div>
                                    <span class="metric-value">{format!("{}%", metric.value)}</span>
                                </div>
                                <div class="metric-track">
                                    <div class=format!("metric-bar {}", product.theme.glow) style=bar_style></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}

                <div class="order-row">
                    <button type="button" class="btn-order" on:click=on_order>
                        "🕒 Order Now ›"
                    </button>
                </div>
            </div>

            <div class="rating">
                <span class="rating-star">"★"</span>
                <span>{product.rating_summary()}</span>
            </div>
        </div>
    }
}
