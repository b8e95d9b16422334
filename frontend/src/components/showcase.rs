//! Product showcase with the floating product switcher.

use cakes_core::{ProductId, ShowcaseState, Side};
use leptos::*;

use crate::components::{ProductDetails, ProductVisual, Switcher};
use crate::config::SITE_NAME;

#[component]
pub fn ProductShowcase() -> impl IntoView {
    let state = create_rw_signal(ShowcaseState::default());

    // Memos only notify on change, so re-selecting or scrolling inside the
    // same band does not re-render anything.
    let active = create_memo(move |_| state.with(|s| s.active()));
    let switcher_visible = create_memo(move |_| state.with(|s| s.is_switcher_visible()));
    let side = move || Side::from(active.get());

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        let window = window();
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        state.update(|s| {
            s.on_scroll(scroll_y, viewport_height);
        });
    });
    log::debug!("showcase: scroll listener registered");

    on_cleanup(move || {
        scroll_listener.remove();
        log::debug!("showcase: scroll listener removed");
    });

    let on_select = Callback::new(move |id: ProductId| {
        if state.with_untracked(|s| s.active()) != id {
            log::info!("🍰 Showing {}", id.product().label);
            state.update(|s| {
                s.select(id);
            });
        }
    });

    view! {
        <div class="showcase">
            <header class="showcase-header">
                <h1 class="brand">{SITE_NAME}</h1>
            </header>

            <div class=move || format!("showcase-backdrop {}", side().css_class())></div>

            <main class="showcase-main">
                <div class=move || format!("showcase-stage {}", side().css_class())>
                    // Rebuilt on every switch so enter animations replay.
                    {move || {
                        let product = active.get().product();
                        let side = Side::from(product.id);
                        view! {
                            <ProductVisual product=product side=side/>
                            <div class="details-column">
                                <ProductDetails product=product side=side/>
                            </div>
                        }
                    }}
                </div>
            </main>

            <Show when=move || switcher_visible.get()>
                <Switcher active=active on_select=on_select/>
            </Show>
        </div>
    }
}
