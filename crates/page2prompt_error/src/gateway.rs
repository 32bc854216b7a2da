//! Completion gateway error types.

/// Specific error conditions when calling the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GatewayErrorKind {
    /// Transport-level failure
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// The service answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the service
        message: String,
    },
    /// The request did not complete in time
    #[display("Request timed out after {} seconds", _0)]
    Timeout(u64),
    /// The service answered without any text
    #[display("Completion service returned an empty response")]
    EmptyResponse,
    /// The caller cancelled the operation
    #[display("Operation cancelled")]
    Cancelled,
    /// No API key was configured
    #[display("API key not set: {}", _0)]
    MissingApiKey(String),
    /// The response body could not be decoded
    #[display("Failed to decode response: {}", _0)]
    ResponseParsing(String),
}

/// Error type for completion gateway calls.
///
/// # Examples
///
/// ```
/// use page2prompt_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::Timeout(30));
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The specific error condition
    pub kind: GatewayErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
