//! Top-level error wrapper types.

use crate::{
    CodecError, ConfigError, GatewayError, GatewayErrorKind, JsonError, RegistryError, StorageError,
};

/// Every error condition surfaced by the Page2Prompt crates.
///
/// # Examples
///
/// ```
/// use page2prompt_error::{Page2PromptError, ConfigError};
///
/// let config_err = ConfigError::new("bad value");
/// let err: Page2PromptError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum Page2PromptErrorKind {
    /// Completion-text decoding error
    #[from(CodecError)]
    Codec(CodecError),
    /// Registry or catalog error
    #[from(RegistryError)]
    Registry(RegistryError),
    /// Completion gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Page2Prompt error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Page2Prompt Error: {}", _0)]
pub struct Page2PromptError(Box<Page2PromptErrorKind>);

impl Page2PromptError {
    /// Create a new error from a kind.
    pub fn new(kind: Page2PromptErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &Page2PromptErrorKind {
        &self.0
    }

    /// Whether this error wraps a gateway failure.
    pub fn is_gateway(&self) -> bool {
        matches!(self.kind(), Page2PromptErrorKind::Gateway(_))
    }

    /// The gateway condition, if this error wraps a gateway failure.
    pub fn gateway_kind(&self) -> Option<&GatewayErrorKind> {
        match self.kind() {
            Page2PromptErrorKind::Gateway(e) => Some(&e.kind),
            _ => None,
        }
    }

    /// Short description without source locations, for user-facing text.
    pub fn cause(&self) -> String {
        match self.gateway_kind() {
            Some(kind) => kind.to_string(),
            None => self.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to Page2PromptErrorKind
impl<T> From<T> for Page2PromptError
where
    T: Into<Page2PromptErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Page2Prompt operations.
pub type Page2PromptResult<T> = std::result::Result<T, Page2PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_omits_location_for_gateway_errors() {
        let err: Page2PromptError = GatewayError::new(GatewayErrorKind::EmptyResponse).into();
        assert_eq!(err.cause(), "Completion service returned an empty response");
        assert_eq!(err.gateway_kind(), Some(&GatewayErrorKind::EmptyResponse));

        let err: Page2PromptError = ConfigError::new("bad value").into();
        assert!(err.gateway_kind().is_none());
        assert!(err.cause().contains("bad value"));
    }
}
