//! Classified gateway failures

use thiserror::Error;

/// Shown for any failure to get a response from the service.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Could not reach the analysis service. Check your connection and try again.";

/// Shown when a response arrived but could not be interpreted.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Something went wrong";

/// Why an invocation did not produce a payload.
///
/// The `Display` impl is diagnostic text for logs; use
/// [`GatewayError::user_message`] for what a person should see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request could not be sent or no response arrived
    /// (DNS failure, refused connection, reset, transport timeout).
    #[error("network error: {detail}")]
    Network { detail: String },

    /// The service answered with an error status and a `detail` message.
    #[error("server error (HTTP {status}): {detail}")]
    Server { status: u16, detail: String },

    /// A response arrived but its body was missing, not JSON, or an error
    /// status came without a usable `detail`.
    #[error("unexpected response (HTTP {status}): {reason}")]
    Unexpected { status: u16, reason: String },
}

impl GatewayError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    pub fn server(status: u16, detail: impl Into<String>) -> Self {
        Self::Server {
            status,
            detail: detail.into(),
        }
    }

    pub fn unexpected(status: u16, reason: impl Into<String>) -> Self {
        Self::Unexpected {
            status,
            reason: reason.into(),
        }
    }

    /// The one line shown to the user. Server details pass through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Network { .. } => NETWORK_ERROR_MESSAGE.to_string(),
            GatewayError::Server { detail, .. } => detail.clone(),
            GatewayError::Unexpected { .. } => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }

    /// Short label for logs and machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Network { .. } => "network",
            GatewayError::Server { .. } => "server",
            GatewayError::Unexpected { .. } => "unexpected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_detail_passes_through_verbatim() {
        let err = GatewayError::server(400, "user not found");
        assert_eq!(err.user_message(), "user not found");
    }

    #[test]
    fn test_network_uses_fixed_message() {
        let err = GatewayError::network("connection refused");
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
        assert!(!err.user_message().contains("refused"));
    }

    #[test]
    fn test_unexpected_uses_generic_message() {
        let err = GatewayError::unexpected(200, "expected value at line 1 column 1");
        assert_eq!(err.user_message(), UNEXPECTED_ERROR_MESSAGE);
    }

    #[test]
    fn test_display_keeps_diagnostics() {
        let err = GatewayError::server(503, "warming up");
        assert_eq!(err.to_string(), "server error (HTTP 503): warming up");
        assert_eq!(err.kind(), "server");
    }
}
