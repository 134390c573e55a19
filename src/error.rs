//! Error types for identity operations.
//!
//! Three families are kept apart so callers can react to each:
//! configuration problems (the provider was never reached), local precondition
//! failures (no session, incomplete form input) and errors reported by the
//! provider itself, which are passed through untouched.

use serde::{Deserialize, Serialize};

/// Code reported when the provider configuration is absent or unusable.
pub const MISSING_CONFIG_CODE: &str = "app/missing-firebase-config";

/// Message carried by [`AuthError::NoAuthenticatedUser`].
pub const NO_AUTHENTICATED_USER: &str = "NO_AUTHENTICATED_USER";

/// Error reported by the identity provider, e.g. `auth/wrong-password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} ({code})")]
pub struct ProviderError {
    /// Machine-readable provider code
    pub code: String,
    /// Provider's own description
    pub message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Local validation failure of login or signup input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Identifier left empty
    #[error("email is required")]
    MissingEmail,

    /// Password left empty
    #[error("password is required")]
    MissingPassword,

    /// One or more signup fields left empty
    #[error("all fields are required")]
    MissingInput,

    /// Password confirmation does not match
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl FormError {
    /// Returns the provider-style code used by the message table.
    pub fn code(&self) -> &'static str {
        match self {
            FormError::MissingEmail => "auth/missing-email",
            FormError::MissingPassword => "auth/missing-password",
            FormError::MissingInput => "auth/missing-input",
            FormError::PasswordMismatch => "auth/password-mismatch",
        }
    }
}

/// Error returned by every identity gateway operation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// No configuration object was supplied
    #[error("identity provider configuration is missing")]
    MissingConfig,

    /// A configuration object was supplied but is unusable
    #[error("identity provider configuration is malformed: {0}")]
    InvalidConfig(String),

    /// The operation needs a signed-in user and there is none
    #[error("{}", NO_AUTHENTICATED_USER)]
    NoAuthenticatedUser,

    /// Input rejected before contacting the provider
    #[error(transparent)]
    Form(#[from] FormError),

    /// Error reported by the provider
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AuthError {
    /// Returns true for configuration failures.
    pub fn is_config_error(&self) -> bool {
        matches!(self, AuthError::MissingConfig | AuthError::InvalidConfig(_))
    }

    /// Returns the machine-readable code, when one applies.
    pub fn code(&self) -> Option<&str> {
        match self {
            AuthError::MissingConfig | AuthError::InvalidConfig(_) => Some(MISSING_CONFIG_CODE),
            AuthError::NoAuthenticatedUser => None,
            AuthError::Form(err) => Some(err.code()),
            AuthError::Provider(err) => Some(&err.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_share_code() {
        assert_eq!(AuthError::MissingConfig.code(), Some(MISSING_CONFIG_CODE));
        assert_eq!(
            AuthError::InvalidConfig("apiKey is empty".to_string()).code(),
            Some(MISSING_CONFIG_CODE)
        );
        assert!(AuthError::MissingConfig.is_config_error());
        assert!(!AuthError::NoAuthenticatedUser.is_config_error());
    }

    #[test]
    fn test_no_authenticated_user_has_no_code() {
        let err = AuthError::NoAuthenticatedUser;
        assert_eq!(err.code(), None);
        assert_eq!(err.to_string(), "NO_AUTHENTICATED_USER");
    }

    #[test]
    fn test_provider_error_passes_through() {
        let err: AuthError = ProviderError::new("auth/too-many-requests", "slow down").into();
        assert_eq!(err.code(), Some("auth/too-many-requests"));
        assert_eq!(err.to_string(), "slow down (auth/too-many-requests)");
    }

    #[test]
    fn test_form_error_codes() {
        assert_eq!(FormError::MissingEmail.code(), "auth/missing-email");
        assert_eq!(FormError::MissingPassword.code(), "auth/missing-password");
        assert_eq!(FormError::MissingInput.code(), "auth/missing-input");
        assert_eq!(FormError::PasswordMismatch.code(), "auth/password-mismatch");

        let err: AuthError = FormError::PasswordMismatch.into();
        assert_eq!(err.code(), Some("auth/password-mismatch"));
    }

    #[test]
    fn test_provider_error_deserialization() {
        let json = r#"{"code": "auth/user-disabled", "message": "disabled"}"#;
        let err: ProviderError = serde_json::from_str(json).unwrap();
        assert_eq!(err, ProviderError::new("auth/user-disabled", "disabled"));
    }
}
