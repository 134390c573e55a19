//! Seam between the gateway and a concrete identity provider.

use crate::config::FirebaseConfig;
use crate::error::{AuthError, ProviderError};
use crate::user::{ProfilePatch, User};
use async_trait::async_trait;
use std::fmt;
use std::rc::Rc;

/// Callback receiving the signed-in user, or `None` after sign-out.
pub type StateListener = Box<dyn Fn(Option<User>)>;

/// An email/password identity provider.
///
/// Futures are `!Send`: providers live on the browser's UI thread.
#[async_trait(?Send)]
pub trait IdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, ProviderError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<User, ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Updates the profile of the current user.
    ///
    /// Callers check [`current_user`](Self::current_user) first; providers may
    /// still fail if the session ended in between.
    async fn update_profile(&self, patch: &ProfilePatch) -> Result<(), ProviderError>;

    fn current_user(&self) -> Option<User>;

    /// Registers `listener` for session changes. The provider calls it once
    /// with the current state, then on every change until the returned
    /// subscription is dropped.
    fn observe_state(&self, listener: StateListener) -> Subscription;
}

/// Builds a provider from validated configuration.
pub trait Connector {
    fn connect(&self, config: &FirebaseConfig) -> Result<Rc<dyn IdentityProvider>, AuthError>;
}

impl<F> Connector for F
where
    F: Fn(&FirebaseConfig) -> Result<Rc<dyn IdentityProvider>, AuthError>,
{
    fn connect(&self, config: &FirebaseConfig) -> Result<Rc<dyn IdentityProvider>, AuthError> {
        self(config)
    }
}

/// Active state observation. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to cancel.
    pub fn empty() -> Self {
        Self { cancel: None }
    }

    /// Keeps the observation alive for the rest of the program.
    pub fn forget(mut self) {
        self.cancel = None;
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_drop_cancels_once() {
        let cancelled = Rc::new(Cell::new(0));
        let counter = cancelled.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        assert_eq!(cancelled.get(), 0);

        subscription.unsubscribe();
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn test_forget_keeps_listening() {
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();
        Subscription::new(move || flag.set(true)).forget();
        assert!(!cancelled.get());
    }

    #[test]
    fn test_empty_subscription() {
        let subscription = Subscription::empty();
        assert_eq!(format!("{:?}", subscription), "Subscription { active: false }");
    }
}
