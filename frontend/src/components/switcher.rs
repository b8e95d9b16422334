use cakes_core::ProductId;
use leptos::*;

/// Floating pill listing every product, active one highlighted.
#[component]
pub fn Switcher(active: Memo<ProductId>, on_select: Callback<ProductId>) -> impl IntoView {
    view! {
        <div class="switcher-dock">
            <div class="switcher" role="tablist">
                {ProductId::ALL
                    .into_iter()
                    .map(|id| {
                        let is_active = move || active.get() == id;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class="switcher-option"
                                class:active=is_active
                                aria-selected=move || is_active().to_string()
                                on:click=move |_| on_select.call(id)
                            >
                                <span class="switcher-label">{id.product().label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
