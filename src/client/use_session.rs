//! Session hook exposing the signed-in user to the component tree.
//!
//! The hook subscribes to the identity gateway's state observation once and
//! mirrors it into a signal; account operations go through the gateway and
//! record their error text for display.

use crate::error::AuthError;
use crate::identity::{IdentityGateway, LoginForm, SignupForm, Subscription};
use crate::messages::describe_error;
use crate::user::{ProfilePatch, User};

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Session state exposed by the use_session hook.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Whether a user is signed in
    pub is_authenticated: bool,
    /// Whether the first state notification is still pending
    pub is_loading: bool,
    /// Signed-in user
    pub user: Option<User>,
    /// Display text of the last failure
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            is_loading: true,
            user: None,
            error: None,
        }
    }
}

impl SessionState {
    /// Applies a state notification from the provider.
    pub fn observe(&mut self, user: Option<User>) {
        self.is_loading = false;
        self.is_authenticated = user.is_some();
        self.user = user;
    }

    /// Records a failed operation. A configuration failure also ends loading,
    /// since no state notification will ever arrive.
    pub fn fail(&mut self, error: &AuthError) {
        if error.is_config_error() {
            self.is_loading = false;
        }
        self.error = Some(describe_error(Some(error)));
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Folds an operation result into the state.
    pub fn record<T>(&mut self, result: &Result<T, AuthError>) {
        match result {
            Ok(_) => self.clear_error(),
            Err(err) => self.fail(err),
        }
    }
}

/// Provides session context to the component tree.
///
/// Call once at the root of the application. The state observation lives as
/// long as the calling component.
///
/// # Example
///
/// ```ignore
/// #[component]
/// pub fn App() -> Element {
///     use_session_provider(Rc::new(IdentityGateway::browser()));
///     // ... rest of app
/// }
/// ```
pub fn use_session_provider(gateway: Rc<IdentityGateway>) {
    let state = use_signal(SessionState::default);
    let gateway = use_hook(move || gateway);
    let subscription: Rc<RefCell<Option<Subscription>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect({
        let gateway = gateway.clone();
        move || {
            if subscription.borrow().is_some() {
                return;
            }

            let observed = gateway.observe_auth_state(move |user| {
                let mut state = state;
                state.write().observe(user);
            });
            match observed {
                Ok(active) => {
                    tracing::trace!("Observing session state");
                    *subscription.borrow_mut() = Some(active);
                }
                Err(err) => {
                    tracing::warn!("Session observation unavailable: {}", err);
                    let mut state = state;
                    state.write().fail(&err);
                }
            }
        }
    });

    use_context_provider(|| SessionContext { state, gateway });
}

/// Hook for accessing the session.
///
/// # Panics
///
/// Panics if called without `use_session_provider()` in an ancestor component.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Context object returned by the use_session hook.
#[derive(Clone)]
pub struct SessionContext {
    state: Signal<SessionState>,
    gateway: Rc<IdentityGateway>,
}

impl SessionContext {
    /// Snapshot of the whole state. Reading subscribes the calling component.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[component]
    /// fn Greeting() -> Element {
    ///     let session = use_session();
    ///     let state = session.state();
    ///     if state.is_loading {
    ///         return rsx! { p { "กำลังโหลด..." } };
    ///     }
    ///     rsx! { p { {state.user.and_then(|u| u.display_name).unwrap_or_default()} } }
    /// }
    /// ```
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated
    }

    /// True until the provider reports the session for the first time.
    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    /// Display text of the last failed operation, cleared by the next success.
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn has_error(&self) -> bool {
        self.state.read().error.is_some()
    }

    /// The gateway backing this session, for operations without a wrapper here.
    pub fn gateway(&self) -> &Rc<IdentityGateway> {
        &self.gateway
    }

    /// Checks the form, then signs in.
    pub async fn login(&self, form: &LoginForm) -> Result<User, AuthError> {
        let result = match form.validate() {
            Ok(()) => {
                self.gateway
                    .login_with_email(&form.identifier, &form.password)
                    .await
            }
            Err(err) => Err(err.into()),
        };
        self.record(&result);
        result
    }

    /// Checks the form, then creates the account.
    pub async fn signup(&self, form: &SignupForm) -> Result<User, AuthError> {
        let result = match form.validate() {
            Ok(()) => self.gateway.signup_with_email(&form.email, &form.password).await,
            Err(err) => Err(err.into()),
        };
        self.record(&result);
        result
    }

    /// Signs out. The state observation reports the change.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let result = self.gateway.logout().await;
        self.record(&result);
        result
    }

    pub async fn update_profile(&self, patch: &ProfilePatch) -> Result<(), AuthError> {
        let result = self.gateway.update_profile_info(patch).await;
        self.record(&result);
        result
    }

    fn record<T>(&self, result: &Result<T, AuthError>) {
        let mut state = self.state;
        state.write().record(result);
    }
}
