//! # dxhealth
//!
//! Browser client building blocks for AI Health Analyze: toast notifications,
//! single-page section switching and an email/password identity gateway backed
//! by Firebase Auth.
//!
//! ## Overview
//!
//! - **Notification center** ([`toast`]) - transient status cards stacked in
//!   the top-right corner, auto-dismissed after 2.5 s, paused while hovered
//! - **Page switcher** ([`pages`]) - keeps exactly one `.page` section `active`
//! - **Identity gateway** ([`identity`]) - login, signup, logout, profile update
//!   and session observation through a lazily connected provider
//! - **Error messages** ([`messages`]) - maps provider error codes to fixed Thai
//!   text for display
//!
//! The notification center and page switcher work against the [`dom::Dom`]
//! trait and the center reads time from a [`clock::Clock`], so both run
//! unchanged against the in-memory document in tests and the live page in the
//! browser.
//!
//! ## Features
//!
//! ### `client` (default)
//!
//! Enables the Dioxus session hooks (`client::use_session`) and, on wasm32,
//! the browser host wiring events and timers (`client::browser`).
//!
//! **Dependencies**: `dioxus`, plus `web-sys`, `js-sys`, `wasm-bindgen`,
//! `wasm-bindgen-futures` and `serde-wasm-bindgen` on wasm32
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dxhealth::identity::IdentityGateway;
//! use dxhealth::client::BrowserNotifications;
//!
//! let gateway = IdentityGateway::browser();
//! let notifications = BrowserNotifications::new().expect("running in a page");
//!
//! let result = gateway.login_with_email(&email, &password).await;
//! notifications.with_center(|center| center.report_login(&result, &email));
//! ```
//!
//! ## Platform Compatibility
//!
//! | Component | WASM (browser) | Native |
//! |-----------|----------------|--------|
//! | Core types, toast state machine, page switcher | ✅ | ✅ |
//! | `WebDom`, `PerformanceClock`, `GlobalConfig` | ✅ | ❌ (stub or absent) |
//! | Firebase provider | ✅ | ❌ |
//! | Session hooks | ✅ | ✅ |

pub mod clock;
pub mod config;
pub mod dom;
pub mod error;
pub mod identity;
pub mod messages;
pub mod pages;
pub mod toast;
pub mod user;

#[cfg(feature = "client")]
pub mod client;

pub use config::{ConfigSource, EnvConfig, FirebaseConfig, GlobalConfig, InlineConfig};
pub use error::{AuthError, FormError, ProviderError};
pub use identity::IdentityGateway;
pub use messages::{ErrorDetails, describe_error};
pub use pages::PageSwitcher;
pub use toast::{NotificationCenter, ToastKind};
pub use user::{ProfilePatch, User};
