//! Completion-text codec error types.

/// Specific error conditions when decoding completion text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CodecErrorKind {
    /// No JSON object or array could be located in the response
    #[display("No JSON found in response (length: {})", _0)]
    NoJson(usize),
    /// JSON was located but could not be parsed
    #[display("Invalid JSON: {}", _0)]
    InvalidJson(String),
    /// A row lacked a required field
    #[display("Row {} is missing required field '{}'", row, field)]
    MissingField {
        /// Zero-based row index within the response
        row: usize,
        /// Name of the missing field
        field: String,
    },
    /// A field held a value outside its vocabulary
    #[display("Row {} has invalid value '{}' for field '{}'", row, value, field)]
    InvalidValue {
        /// Zero-based row index within the response
        row: usize,
        /// Field name
        field: String,
        /// Offending value
        value: String,
    },
}

/// Error type for completion-text decoding.
///
/// # Examples
///
/// ```
/// use page2prompt_error::{CodecError, CodecErrorKind};
///
/// let err = CodecError::new(CodecErrorKind::NoJson(42));
/// assert!(format!("{}", err).contains("No JSON"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Codec Error: {} at line {} in {}", kind, line, file)]
pub struct CodecError {
    /// The specific error condition
    pub kind: CodecErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CodecError {
    /// Create a new CodecError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CodecErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
