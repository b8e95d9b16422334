//! Footer component

use leptos::*;

use crate::config::{CONTACT_PHONE, SITE_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"© " {SITE_NAME} " • Baked fresh, made with love"</div>
            <div class="footer-links">
                <a href=format!("tel:{}", CONTACT_PHONE) class="footer-link">
                    {CONTACT_PHONE}
                </a>
                <a href="#contact" class="footer-link">
                    "Book an order"
                </a>
            </div>
        </footer>
    }
}
