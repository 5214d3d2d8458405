//! Trait abstraction for the submission transport to enable mocking in tests

use super::SubmitError;
use crate::state::SubmissionPayload;
use async_trait::async_trait;

/// Delivers a form payload to the endpoint.
///
/// `Ok(())` means the request left the machine without a network-level
/// error. It does NOT mean the endpoint accepted the data: the response
/// status and body are never inspected, so a rejection on the far side is
/// indistinguishable from success.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Dispatch one submission
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError>;
}
