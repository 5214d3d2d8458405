//! HTTP client for the form endpoint
//!
//! Posts the flattened quote form as `application/x-www-form-urlencoded`.

use super::{SubmitError, SubmitTransport};
use crate::state::SubmissionPayload;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default form endpoint (Google Apps Script web app)
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxgzLZtcKyo-CT5OWfWoTwGrDMd0I_7__SPCn8UkyNZCMxWOdqKC3O_BHtUmluOVGVV/exec";

/// Fire-and-forget form POST client
pub struct FormPostClient {
    client: reqwest::Client,
    endpoint: String,
}

impl FormPostClient {
    /// Create a client for `endpoint`. Without a timeout a hung request is
    /// awaited indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for FormPostClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, "posting quote form");

        // The response is dropped unread: only dispatch failures are reported.
        self.client
            .post(&self.endpoint)
            .form(payload.fields())
            .send()
            .await?;

        Ok(())
    }
}
