//! HTTP delivery of enquiries to the form endpoint.

use cakes_core::{LeadPayload, LeadTransport, SubmissionError};
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::config::{FORM_ENDPOINT, SUBMIT_TIMEOUT_MS};

/// Posts enquiries as JSON and races each request against a timer.
#[derive(Debug, Clone)]
pub struct EnquiryService {
    endpoint: String,
    timeout_ms: u32,
}

impl Default for EnquiryService {
    fn default() -> Self {
        Self::new(FORM_ENDPOINT, SUBMIT_TIMEOUT_MS)
    }
}

impl EnquiryService {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, payload: &LeadPayload) -> Result<(), SubmissionError> {
        // `.json()` sets `Content-Type: application/json`
        let request = Request::post(&self.endpoint)
            .json(payload)
            .map_err(|e| SubmissionError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(format!("HTTP request failed: {}", e)))?;

        if !response.ok() {
            return Err(SubmissionError::Rejected(response.status()));
        }
        Ok(())
    }
}

impl LeadTransport for EnquiryService {
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), SubmissionError> {
        let request = Box::pin(self.post(payload));
        let timer = Box::pin(TimeoutFuture::new(self.timeout_ms));

        match select(request, timer).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => {
                log::warn!("⏱️ No answer from {} after {} ms", self.endpoint, self.timeout_ms);
                Err(SubmissionError::Timeout)
            }
        }
    }
}
