//! Error types for the enquiry form.
//!
//! - [`ValidationError`] - local checks that run before any request
//! - [`SubmissionError`] - failures of the outbound request
//! - [`FormError`] - why a submit action did not start
//! - [`LeadError`] - top-level outcome of one submit action
//!
//! Conversions are provided via `From` so `?` works across layers.

use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// Local validation failures.
///
/// The display text is what the visitor sees as the notification title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name, email or message is empty after trimming.
    #[error("Please fill in all required fields")]
    MissingRequired,

    /// Email does not look like `local@domain.tld`.
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Failures of the request to the form endpoint.
///
/// All variants produce the same notification; the distinction only
/// shows up in the console log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Endpoint answered with a non-2xx status.
    #[error("Form endpoint rejected the enquiry (status {0})")]
    Rejected(u16),

    /// Request could not be built, sent or read.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// No answer within the configured delay.
    #[error("Request timed out")]
    Timeout,
}

// =============================================================================
// Form Errors
// =============================================================================

/// Reasons a submit action is refused before the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Input did not pass validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A submission is already in flight.
    #[error("An enquiry is already being sent")]
    Busy,
}

// =============================================================================
// Lead Errors (top-level)
// =============================================================================

/// Outcome of a submit action that did not end in a delivered enquiry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    /// Refused before any request.
    #[error("Enquiry not sent: {0}")]
    Form(#[from] FormError),

    /// The request was made and failed.
    #[error("Enquiry failed: {0}")]
    Submission(#[from] SubmissionError),

    /// The form state went away (component unmounted).
    #[error("Enquiry form is no longer mounted")]
    Detached,
}

impl From<ValidationError> for LeadError {
    fn from(err: ValidationError) -> Self {
        LeadError::Form(FormError::Invalid(err))
    }
}

/// Result type for a submit action.
pub type LeadResult<T> = Result<T, LeadError>;
