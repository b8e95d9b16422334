//! Enquiry ("lead") form: fields, validation and payload.
//!
//! # Flow
//!
//! ```text
//! edit ──▶ LeadSubmission ──validate──▶ LeadPayload ──LeadTransport──▶ endpoint
//!                │                                                    │
//!                └──────────── reset on success / kept on failure ◀───┘
//! ```
//!
//! - [`form`] - the `Idle`/`Submitting` state machine
//! - [`submit`] - one complete submit action over a transport and notifier

pub mod form;
pub mod submit;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const NAME_MAX_LEN: usize = 100;
pub const PHONE_MAX_LEN: usize = 20;
pub const EMAIL_MAX_LEN: usize = 255;
pub const MESSAGE_MAX_LEN: usize = 1000;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Loose `local@domain.tld` check, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

// =============================================================================
// Fields
// =============================================================================

/// One input of the enquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Phone,
    Email,
    Message,
}

impl LeadField {
    pub const ALL: [LeadField; 4] = [
        LeadField::Name,
        LeadField::Phone,
        LeadField::Email,
        LeadField::Message,
    ];

    /// Maximum length in characters.
    pub fn max_len(&self) -> usize {
        match self {
            LeadField::Name => NAME_MAX_LEN,
            LeadField::Phone => PHONE_MAX_LEN,
            LeadField::Email => EMAIL_MAX_LEN,
            LeadField::Message => MESSAGE_MAX_LEN,
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, LeadField::Phone)
    }

    /// HTML `id`/`name` attribute.
    pub fn key(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Phone => "phone",
            LeadField::Email => "email",
            LeadField::Message => "message",
        }
    }
}

// =============================================================================
// Submission
// =============================================================================

/// Raw field values as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl LeadSubmission {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Phone => &self.phone,
            LeadField::Email => &self.email,
            LeadField::Message => &self.message,
        }
    }

    /// Store `value`, dropping characters past the field's maximum.
    ///
    /// Returns `true` if the value had to be cut.
    pub fn set(&mut self, field: LeadField, value: &str) -> bool {
        let max = field.max_len();
        let (stored, truncated) = match value.char_indices().nth(max) {
            Some((cut, _)) => (&value[..cut], true),
            None => (value, false),
        };
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Phone => &mut self.phone,
            LeadField::Email => &mut self.email,
            LeadField::Message => &mut self.message,
        };
        slot.clear();
        slot.push_str(stored);
        truncated
    }

    pub fn is_empty(&self) -> bool {
        LeadField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check required fields, then the email format.
    ///
    /// The email pattern is applied to the value as typed, so surrounding
    /// whitespace makes it invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = LeadField::ALL
            .iter()
            .filter(|f| f.is_required())
            .any(|f| self.get(*f).trim().is_empty());
        if missing {
            return Err(ValidationError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and build the trimmed payload.
    pub fn to_payload(&self) -> Result<LeadPayload, ValidationError> {
        self.validate()?;
        Ok(LeadPayload {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

/// JSON body sent to the form endpoint. Every key is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}
