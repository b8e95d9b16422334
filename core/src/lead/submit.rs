//! One complete submit action: validate, send, report.

use std::future::Future;

use super::form::{LeadForm, LeadFormHandle};
use super::LeadPayload;
use crate::error::{LeadError, LeadResult, SubmissionError};
use crate::notice::Notifier;

/// Delivers an enquiry to the form backend.
///
/// `Ok(())` means a 2xx answer; anything else is a [`SubmissionError`].
#[allow(async_fn_in_trait)]
pub trait LeadTransport {
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), SubmissionError>;
}

impl<T: LeadTransport + ?Sized> LeadTransport for &T {
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), SubmissionError> {
        (**self).deliver(payload).await
    }
}

/// Run a submit action against `form`.
///
/// Validation and the switch to `Submitting` happen before this function
/// returns, so the caller's UI is locked before the request is issued. The
/// returned future performs the single request and reports the outcome.
/// Refusals are notified immediately and the future resolves to the error
/// without touching the network.
pub fn submit_lead<H, T, N>(form: H, transport: T, notifier: N) -> impl Future<Output = LeadResult<()>>
where
    H: LeadFormHandle,
    T: LeadTransport,
    N: Notifier,
{
    let started = match form.update_form(LeadForm::begin_submit) {
        Some(Ok(payload)) => Ok(payload),
        Some(Err(err)) => {
            log::debug!("enquiry refused: {err}");
            if let Some(notice) = err.notice() {
                notifier.notify(notice);
            }
            Err(LeadError::Form(err))
        }
        None => Err(LeadError::Detached),
    };

    async move {
        let payload = started?;
        log::info!(
            "sending enquiry ({} character message)",
            payload.message.chars().count()
        );

        let outcome = transport.deliver(&payload).await;
        match &outcome {
            Ok(()) => log::info!("enquiry delivered"),
            Err(err) => log::warn!("enquiry failed: {err}"),
        }

        let notice = form
            .update_form(|f| f.finish_submit(&outcome))
            .ok_or(LeadError::Detached)?;
        notifier.notify(notice);
        outcome.map_err(LeadError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FormError, ValidationError};
    use crate::lead::LeadField;
    use crate::notice::Notice;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Records payloads and answers with a canned outcome.
    struct FakeTransport {
        sent: RefCell<Vec<LeadPayload>>,
        outcome: Result<(), SubmissionError>,
    }

    impl FakeTransport {
        fn answering(outcome: Result<(), SubmissionError>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                outcome,
            }
        }
    }

    impl LeadTransport for FakeTransport {
        async fn deliver(&self, payload: &LeadPayload) -> Result<(), SubmissionError> {
            self.sent.borrow_mut().push(payload.clone());
            self.outcome.clone()
        }
    }

    #[derive(Default)]
    struct Notices(RefCell<Vec<Notice>>);

    impl Notifier for Notices {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    fn form_with(name: &str, phone: &str, email: &str, message: &str) -> RefCell<LeadForm> {
        let mut form = LeadForm::new();
        form.set_field(LeadField::Name, name);
        form.set_field(LeadField::Phone, phone);
        form.set_field(LeadField::Email, email);
        form.set_field(LeadField::Message, message);
        RefCell::new(form)
    }

    #[test]
    fn test_blank_required_fields_send_nothing() {
        let cases = [
            ("", "", "jane@example.com", "Need a cake"),
            ("Jane", "", "   ", "Need a cake"),
            ("Jane", "", "jane@example.com", "\n\t"),
        ];
        for (name, phone, email, message) in cases {
            let form = form_with(name, phone, email, message);
            let transport = FakeTransport::answering(Ok(()));
            let notices = Notices::default();

            let result = block_on(submit_lead(&form, &transport, &notices));

            assert_eq!(
                result,
                Err(LeadError::Form(FormError::Invalid(ValidationError::MissingRequired)))
            );
            assert!(transport.sent.borrow().is_empty());
            assert!(!form.borrow().is_submitting());
            assert_eq!(notices.0.borrow().len(), 1);
        }
    }

    #[test]
    fn test_malformed_email_blocked() {
        for email in ["a@b", "abc.com", "a b@c.com"] {
            let form = form_with("Jane", "", email, "Need a cake");
            let transport = FakeTransport::answering(Ok(()));
            let notices = Notices::default();

            let result = block_on(submit_lead(&form, &transport, &notices));

            assert_eq!(result, Err(LeadError::from(ValidationError::InvalidEmail)));
            assert!(transport.sent.borrow().is_empty());
            assert_eq!(
                notices.0.borrow().as_slice(),
                &[Notice::from(ValidationError::InvalidEmail)]
            );
        }
    }

    #[test]
    fn test_success_sends_once_and_resets() {
        let form = form_with("Jane Doe", "", "jane@example.com", "Need a cake");
        let transport = FakeTransport::answering(Ok(()));
        let notices = Notices::default();

        let result = block_on(submit_lead(&form, &transport, &notices));

        assert_eq!(result, Ok(()));
        assert_eq!(
            transport.sent.borrow().as_slice(),
            &[LeadPayload {
                name: "Jane Doe".into(),
                phone: String::new(),
                email: "jane@example.com".into(),
                message: "Need a cake".into(),
            }]
        );
        assert!(form.borrow().fields().is_empty());
        assert!(!form.borrow().is_submitting());
        assert_eq!(notices.0.borrow().as_slice(), &[Notice::enquiry_sent()]);
    }

    #[test]
    fn test_failure_keeps_input() {
        let failures = [
            SubmissionError::Rejected(500),
            SubmissionError::Transport("connection reset".into()),
            SubmissionError::Timeout,
        ];
        for failure in failures {
            let form = form_with("Jane Doe", "", "jane@example.com", "Need a cake");
            let before = form.borrow().fields().clone();
            let transport = FakeTransport::answering(Err(failure.clone()));
            let notices = Notices::default();

            let result = block_on(submit_lead(&form, &transport, &notices));

            assert_eq!(result, Err(LeadError::Submission(failure)));
            assert_eq!(transport.sent.borrow().len(), 1);
            assert_eq!(form.borrow().fields(), &before);
            assert!(!form.borrow().is_submitting());
            assert_eq!(notices.0.borrow().as_slice(), &[Notice::enquiry_failed()]);
        }
    }

    #[test]
    fn test_form_locked_before_future_is_polled() {
        let form = form_with("Jane Doe", "", "jane@example.com", "Need a cake");
        let transport = FakeTransport::answering(Ok(()));
        let notices = Notices::default();

        let first = submit_lead(&form, &transport, &notices);
        assert!(form.borrow().is_submitting());

        let second = block_on(submit_lead(&form, &transport, &notices));
        assert_eq!(second, Err(LeadError::Form(FormError::Busy)));
        assert!(notices.0.borrow().is_empty());

        assert_eq!(block_on(first), Ok(()));
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn test_detached_form_is_not_notified() {
        struct Gone(Cell<bool>);

        impl LeadFormHandle for Gone {
            fn update_form<R>(&self, _: impl FnOnce(&mut LeadForm) -> R) -> Option<R> {
                self.0.set(true);
                None
            }
        }

        let handle = Gone(Cell::new(false));
        let transport = FakeTransport::answering(Ok(()));
        let notices = Notices::default();

        let result = block_on(submit_lead(&handle, &transport, &notices));

        assert_eq!(result, Err(LeadError::Detached));
        assert!(handle.0.get());
        assert!(transport.sent.borrow().is_empty());
        assert!(notices.0.borrow().is_empty());
    }
}
