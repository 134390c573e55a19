//! Account operations against the identity provider.
//!
//! [`IdentityGateway`] is the only entry point. It connects lazily through a
//! [`Connector`] and forwards provider results untouched; the Firebase JS SDK
//! binding is available on wasm32.

#[cfg(target_arch = "wasm32")]
mod firebase;
mod form;
mod gateway;
mod provider;

#[cfg(target_arch = "wasm32")]
pub use firebase::{FirebaseConnector, FirebaseProvider};
pub use form::{LoginForm, SignupForm};
pub use gateway::IdentityGateway;
pub use provider::{Connector, IdentityProvider, StateListener, Subscription};
