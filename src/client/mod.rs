//! Client-side session handling for Dioxus applications.
//!
//! - `use_session`: Dioxus hooks exposing the signed-in user and account
//!   operations
//! - `browser` (wasm32 only): event and timer wiring for toasts and page
//!   switching in a live document
//!
//! # Example
//!
//! ```rust,ignore
//! use dxhealth::client::{use_session, use_session_provider};
//! use dxhealth::identity::{IdentityGateway, LoginForm};
//!
//! // At the root of the app
//! use_session_provider(Rc::new(IdentityGateway::browser()));
//!
//! // In a descendant component
//! let session = use_session();
//! let result = session.login(&LoginForm::new(email, password)).await;
//! ```

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod use_session;

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserCenter, BrowserNotifications, boot, go_to_page};
pub use use_session::{SessionContext, SessionState, use_session, use_session_provider};
