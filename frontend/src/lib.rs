//! Cakes & Tales - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page site for the bakery: a product showcase and
//! an enquiry form posting to a third-party form endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (meta, toast context)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  HomePage                                                   │
//! │  ├── ProductShowcase (header, visual, details, switcher)    │
//! │  ├── ContactForm                                            │
//! │  └── Footer                                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster                                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time constants
//! - [`components`] - UI components
//! - [`services`] - Form endpoint client
//!
//! State machines, validation and product data come from [`cakes_core`].

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use components::*;
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    Toasts::provide();

    view! {
        <Title text=SITE_NAME/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
            </Routes>
        </Router>

        <Toaster/>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <ProductShowcase/>
        <ContactForm/>
        <Footer/>
    }
}
