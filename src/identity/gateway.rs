//! Lazily initialized facade over the identity provider.

use super::provider::{Connector, IdentityProvider, Subscription};
use crate::config::ConfigSource;
use crate::error::AuthError;
use crate::user::{ProfilePatch, User};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Single entry point for account operations.
///
/// The provider connection is built on first use from the configuration source
/// and reused afterwards. Configuration failures are returned from every
/// operation and retried on the next call; nothing is contacted until the
/// configuration is valid.
pub struct IdentityGateway {
    source: Box<dyn ConfigSource>,
    connector: Box<dyn Connector>,
    provider: RefCell<Option<Rc<dyn IdentityProvider>>>,
}

impl IdentityGateway {
    /// Creates an unconnected gateway.
    ///
    /// # Arguments
    ///
    /// * `source` - Where the Firebase configuration is read from on each
    ///   connection attempt
    /// * `connector` - Builds the provider once a configuration is loaded
    pub fn new(source: impl ConfigSource + 'static, connector: impl Connector + 'static) -> Self {
        Self {
            source: Box::new(source),
            connector: Box::new(connector),
            provider: RefCell::new(None),
        }
    }

    /// Gateway reading `window.FIREBASE_CONFIG` and talking to the Firebase SDK.
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        Self::new(crate::config::GlobalConfig, super::firebase::FirebaseConnector)
    }

    /// True once a provider connection has been made.
    pub fn is_initialized(&self) -> bool {
        self.provider.borrow().is_some()
    }

    /// Returns the provider, connecting on first call.
    pub fn ensure_initialized(&self) -> Result<Rc<dyn IdentityProvider>, AuthError> {
        if let Some(provider) = self.provider.borrow().clone() {
            return Ok(provider);
        }

        let config = self.source.load().inspect_err(|err| {
            tracing::warn!("Identity provider configuration unavailable: {}", err);
        })?;
        let provider = self.connector.connect(&config)?;
        *self.provider.borrow_mut() = Some(provider.clone());
        tracing::trace!("Identity provider initialized for project {}", config.project_id);
        Ok(provider)
    }

    /// Signs in with email and password. The identifier is trimmed.
    pub async fn login_with_email(&self, identifier: &str, password: &str) -> Result<User, AuthError> {
        let provider = self.ensure_initialized()?;
        tracing::trace!("Signing in");
        Ok(provider.sign_in(identifier.trim(), password).await?)
    }

    /// Creates an account. The email is trimmed.
    pub async fn signup_with_email(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let provider = self.ensure_initialized()?;
        tracing::trace!("Creating account");
        Ok(provider.sign_up(email.trim(), password).await?)
    }

    pub async fn logout(&self) -> Result<(), AuthError> {
        let provider = self.ensure_initialized()?;
        tracing::trace!("Signing out");
        Ok(provider.sign_out().await?)
    }

    /// Updates the signed-in user's profile.
    ///
    /// Fails with [`AuthError::NoAuthenticatedUser`] without calling the
    /// provider when nobody is signed in.
    pub async fn update_profile_info(&self, patch: &ProfilePatch) -> Result<(), AuthError> {
        let provider = self.ensure_initialized()?;
        if provider.current_user().is_none() {
            return Err(AuthError::NoAuthenticatedUser);
        }
        Ok(provider.update_profile(patch).await?)
    }

    /// Calls `listener` with the current user and on every session change.
    pub fn observe_auth_state(
        &self,
        listener: impl Fn(Option<User>) + 'static,
    ) -> Result<Subscription, AuthError> {
        let provider = self.ensure_initialized()?;
        Ok(provider.observe_state(Box::new(listener)))
    }

    pub fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.ensure_initialized()?.current_user())
    }
}

impl fmt::Debug for IdentityGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityGateway")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
