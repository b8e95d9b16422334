//! # Cakes & Tales - site logic
//!
//! Everything the bakery website does that is not markup: the enquiry form
//! state machine, its validation and payload, and the showcase's product
//! catalog and view state. No browser APIs are used here; the frontend
//! crate plugs in an HTTP transport and a toast surface.
//!
//! ## Modules
//!
//! - [`error`] - Validation and submission errors
//! - [`notice`] - Transient notifications and the [`Notifier`] seam
//! - [`lead`] - Enquiry fields, form state and the submit action
//! - [`catalog`] - Static product records
//! - [`showcase`] - Active product and switcher visibility

pub mod error;
pub mod notice;
pub mod lead;
pub mod catalog;
pub mod showcase;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{FormError, LeadError, LeadResult, SubmissionError, ValidationError};

pub use notice::{Notice, NoticeVariant, Notifier};

pub use lead::{
    is_valid_email,
    LeadField,
    LeadPayload,
    LeadSubmission,
    form::{LeadForm, LeadFormHandle, SubmissionStatus},
    submit::{submit_lead, LeadTransport},
};

pub use catalog::{FeatureMetric, MetricIcon, Product, ProductId, ProductStats, Theme};

pub use showcase::{switcher_visible, ShowcaseState, Side, SWITCHER_VISIBLE_RATIO};
