use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error kinds raised by the Google Chat integration.
///
/// Codes 9000–9099 are reserved for this integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoogleChatErrorKind {
    /// Transport-level or unexpected failure while building/sending a message.
    Client,
    /// The webhook URL failed validation.
    InvalidWebhook,
    /// The webhook rejected the payload with a non-2xx status.
    SendMessage,
}

struct ErrorInfo {
    code: u16,
    message: &'static str,
    remediation: &'static str,
}

const fn error_info(kind: GoogleChatErrorKind) -> ErrorInfo {
    match kind {
        GoogleChatErrorKind::Client => ErrorInfo {
            code: 9000,
            message: "Google Chat client error occurred",
            remediation: "Verify the webhook URL, networking rules, and retry the request.",
        },
        GoogleChatErrorKind::InvalidWebhook => ErrorInfo {
            code: 9001,
            message: "Invalid Google Chat webhook URL",
            remediation: "Ensure the webhook URL matches the expected Google Chat format.",
        },
        GoogleChatErrorKind::SendMessage => ErrorInfo {
            code: 9002,
            message: "Google Chat message was not accepted",
            remediation: "Review the response payload for details and adjust the request body.",
        },
    }
}

/// Typed error for the Google Chat integration.
///
/// Display shows the (possibly overridden) message; the numeric code and
/// remediation text come from a static per-kind table.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GoogleChatError {
    kind: GoogleChatErrorKind,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl GoogleChatError {
    fn new(kind: GoogleChatErrorKind, message: Option<String>, source: Option<BoxError>) -> Self {
        let message = message.unwrap_or_else(|| error_info(kind).message.to_string());
        Self {
            kind,
            message,
            source,
        }
    }

    pub fn client(message: impl Into<String>, source: Option<BoxError>) -> Self {
        Self::new(GoogleChatErrorKind::Client, Some(message.into()), source)
    }

    pub fn invalid_webhook(message: impl Into<String>) -> Self {
        Self::new(GoogleChatErrorKind::InvalidWebhook, Some(message.into()), None)
    }

    pub fn send_message(message: impl Into<String>) -> Self {
        Self::new(GoogleChatErrorKind::SendMessage, Some(message.into()), None)
    }

    pub fn kind(&self) -> GoogleChatErrorKind {
        self.kind
    }

    /// Numeric error code (9000–9002).
    pub fn code(&self) -> u16 {
        error_info(self.kind).code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Operator-facing remediation hint for this error kind.
    pub fn remediation(&self) -> &'static str {
        error_info(self.kind).remediation
    }
}

pub type Result<T> = std::result::Result<T, GoogleChatError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn codes_and_remediation_come_from_the_table() {
        let err = GoogleChatError::client("boom", None);
        assert_eq!(err.kind(), GoogleChatErrorKind::Client);
        assert_eq!(err.code(), 9000);
        assert!(err.remediation().contains("webhook URL"));

        let err = GoogleChatError::invalid_webhook("bad url");
        assert_eq!(err.code(), 9001);

        let err = GoogleChatError::send_message("rejected");
        assert_eq!(err.code(), 9002);
        assert!(err.remediation().contains("response payload"));
    }

    #[test]
    fn display_uses_override_message() {
        let err = GoogleChatError::send_message("Google Chat webhook returned 404: not found");
        let shown = err.to_string();
        assert!(shown.contains("404"));
        assert!(shown.contains("not found"));
    }

    #[test]
    fn default_message_when_not_overridden() {
        let err = GoogleChatError::new(GoogleChatErrorKind::Client, None, None);
        assert_eq!(err.message(), "Google Chat client error occurred");
        assert!(err.source().is_none());
    }

    #[test]
    fn client_error_chains_the_underlying_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = GoogleChatError::client("Failed to call Google Chat webhook", Some(cause.into()));
        let source = err.source().expect("source should be preserved");
        assert!(source.to_string().contains("refused"));
    }
}
