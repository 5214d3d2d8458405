//! Submission errors

/// The only way a submission can fail as far as the form can tell
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request could not be dispatched (DNS, connect, TLS, timeout)
    #[error("failed to reach form endpoint: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SubmitError::Transport("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "failed to reach form endpoint: connection refused"
        );
    }
}
