//! Enquiry form state machine.
//!
//! ```text
//!          begin_submit (valid)            finish_submit (any outcome)
//!   Idle ─────────────────────────▶ Submitting ─────────────────────────▶ Idle
//!    │ ▲
//!    └─┘ edit / begin_submit (invalid or busy)
//! ```

use std::cell::RefCell;

use super::{LeadField, LeadPayload, LeadSubmission};
use crate::error::{FormError, SubmissionError};
use crate::notice::Notice;

/// Whether a request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

/// State owned by one enquiry form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    fields: LeadSubmission,
    status: SubmissionStatus,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &LeadSubmission {
        &self.fields
    }

    pub fn value(&self, field: LeadField) -> &str {
        self.fields.get(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Drives the submit button's `disabled` attribute.
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Apply one edit. Edits are accepted in any status.
    pub fn set_field(&mut self, field: LeadField, value: &str) {
        if self.fields.set(field, value) {
            log::debug!("{} input cut to {} characters", field.key(), field.max_len());
        }
    }

    /// Validate and, on success, move to `Submitting`.
    ///
    /// The returned payload is what must be sent; the caller reports the
    /// outcome back through [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> Result<LeadPayload, FormError> {
        if self.is_submitting() {
            return Err(FormError::Busy);
        }
        let payload = self.fields.to_payload()?;
        self.status = SubmissionStatus::Submitting;
        Ok(payload)
    }

    /// Return to `Idle`, clearing the fields only if the enquiry was
    /// delivered. Returns the notice to show.
    pub fn finish_submit(&mut self, outcome: &Result<(), SubmissionError>) -> Notice {
        self.status = SubmissionStatus::Idle;
        match outcome {
            Ok(()) => {
                self.fields.clear();
                Notice::enquiry_sent()
            }
            Err(err) => Notice::from(err),
        }
    }
}

/// Shared access to a [`LeadForm`] living somewhere else (a reactive
/// signal in the browser, a `RefCell` in tests).
pub trait LeadFormHandle {
    /// Run `f` against the form. `None` if the form no longer exists.
    fn update_form<R>(&self, f: impl FnOnce(&mut LeadForm) -> R) -> Option<R>;
}

impl LeadFormHandle for RefCell<LeadForm> {
    fn update_form<R>(&self, f: impl FnOnce(&mut LeadForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<H: LeadFormHandle + ?Sized> LeadFormHandle for &H {
    fn update_form<R>(&self, f: impl FnOnce(&mut LeadForm) -> R) -> Option<R> {
        (**self).update_form(f)
    }
}
