//! Transient notifications shown to the visitor.

use crate::error::{FormError, SubmissionError, ValidationError};

/// Visual treatment of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeVariant {
    #[default]
    Default,
    /// Error styling.
    Destructive,
}

impl NoticeVariant {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeVariant::Default => "toast-default",
            NoticeVariant::Destructive => "toast-destructive",
        }
    }
}

/// A titled message with an optional subtitle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: NoticeVariant::Default,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = NoticeVariant::Destructive;
        self
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }

    /// Shown after the endpoint accepted the enquiry.
    pub fn enquiry_sent() -> Self {
        Notice::new("Enquiry sent successfully!").with_description("We'll get back to you soon.")
    }

    /// Shown for every kind of [`SubmissionError`].
    pub fn enquiry_failed() -> Self {
        Notice::new("Failed to send enquiry")
            .with_description("Please try again later.")
            .destructive()
    }
}

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        Notice::new(err.to_string()).destructive()
    }
}

impl From<&SubmissionError> for Notice {
    fn from(_: &SubmissionError) -> Self {
        Notice::enquiry_failed()
    }
}

impl FormError {
    /// Notice for a refused submit, if the visitor should see one.
    ///
    /// `Busy` stays silent: the submit button is already disabled.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            FormError::Invalid(err) => Some(Notice::from(*err)),
            FormError::Busy => None,
        }
    }
}

/// Anything that can display a [`Notice`].
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}
