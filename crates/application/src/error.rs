//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// How a weather query failed, as far as the user-facing reply is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The provider does not know the requested location
    NotFound,
    /// Non-success response, transport failure or timeout
    ProviderError,
    /// The provider answered but the payload could not be used
    DecodeError,
}

impl FailureKind {
    /// Short label used in log fields
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::ProviderError => "provider_error",
            Self::DecodeError => "decode_error",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Location unknown to the weather provider
    #[error("Location not found: {0}")]
    NotFound(String),

    /// Weather provider unavailable or returned an error status
    #[error("Weather provider error: {0}")]
    Provider(String),

    /// Weather provider response could not be decoded
    #[error("Invalid provider response: {0}")]
    Decode(String),

    /// Messaging gateway error
    #[error("Messaging error: {0}")]
    Messaging(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Classify a weather query failure
    ///
    /// Returns `None` for errors that do not come from a weather lookup.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::NotFound(_) => Some(FailureKind::NotFound),
            Self::Provider(_) => Some(FailureKind::ProviderError),
            Self::Decode(_) => Some(FailureKind::DecodeError),
            Self::Domain(_) | Self::Messaging(_) | Self::Configuration(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_kind_classification() {
        assert_eq!(
            ApplicationError::NotFound("Atlantis".into()).failure_kind(),
            Some(FailureKind::NotFound)
        );
        assert_eq!(
            ApplicationError::Provider("503".into()).failure_kind(),
            Some(FailureKind::ProviderError)
        );
        assert_eq!(
            ApplicationError::Decode("eof".into()).failure_kind(),
            Some(FailureKind::DecodeError)
        );
        assert_eq!(
            ApplicationError::Messaging("blocked".into()).failure_kind(),
            None
        );
    }

    #[test]
    fn domain_error_converts() {
        let err: ApplicationError = DomainError::InvalidCoordinates.into();
        assert!(matches!(err, ApplicationError::Domain(_)));
        assert!(err.failure_kind().is_none());
    }

    #[test]
    fn failure_kind_labels() {
        assert_eq!(FailureKind::NotFound.to_string(), "not_found");
        assert_eq!(FailureKind::ProviderError.as_str(), "provider_error");
        assert_eq!(FailureKind::DecodeError.as_str(), "decode_error");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ApplicationError::NotFound("Atlantis".into()).to_string(),
            "Location not found: Atlantis"
        );
        assert_eq!(
            ApplicationError::Provider("timeout".into()).to_string(),
            "Weather provider error: timeout"
        );
    }
}
