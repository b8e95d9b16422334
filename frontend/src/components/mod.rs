//! UI Components for the Cakes & Tales website.
//!
//! # Showcase
//! - [`ProductShowcase`] - Active product, background and switcher
//! - [`ProductVisual`] - Product image
//! - [`ProductDetails`] - Copy, metric bars and rating
//! - [`Switcher`] - Floating product selector
//!
//! # Enquiries
//! - [`ContactForm`] - "Book Your Order" form
//! - [`Toaster`] - Transient notifications ([`Toasts`] context)
//!
//! # Layout
//! - [`Footer`] - Page footer

mod showcase;
mod product;
mod switcher;
mod contact_form;
mod toast;
mod footer;

pub use showcase::*;
pub use product::*;
pub use switcher::*;
pub use contact_form::*;
pub use toast::*;
pub use footer::*;
