//! Local checks on credential forms, run before anything reaches the provider.

use crate::error::FormError;

/// Login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    /// Rejects a blank identifier or an empty password.
    ///
    /// ```
    /// # use dxhealth::identity::LoginForm;
    /// # use dxhealth::FormError;
    /// let form = LoginForm::new("  ", "secret");
    /// assert_eq!(form.validate(), Err(FormError::MissingEmail));
    /// ```
    pub fn validate(&self) -> Result<(), FormError> {
        if self.identifier.trim().is_empty() {
            return Err(FormError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        Ok(())
    }
}

/// Signup form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormError::MissingInput);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form() {
        assert_eq!(LoginForm::new("", "pw").validate(), Err(FormError::MissingEmail));
        assert_eq!(
            LoginForm::new("ann@example.com", "").validate(),
            Err(FormError::MissingPassword)
        );
        assert_eq!(LoginForm::new(" ann@example.com ", "pw").validate(), Ok(()));
    }

    #[test]
    fn test_login_checks_identifier_first() {
        assert_eq!(LoginForm::default().validate(), Err(FormError::MissingEmail));
    }

    #[test]
    fn test_signup_form() {
        assert_eq!(
            SignupForm::new("ann@example.com", "pw", "").validate(),
            Err(FormError::MissingInput)
        );
        assert_eq!(
            SignupForm::new("   ", "pw", "pw").validate(),
            Err(FormError::MissingInput)
        );
        assert_eq!(
            SignupForm::new("ann@example.com", "pw1", "pw2").validate(),
            Err(FormError::PasswordMismatch)
        );
        assert_eq!(SignupForm::new("ann@example.com", "pw", "pw").validate(), Ok(()));
    }
}
