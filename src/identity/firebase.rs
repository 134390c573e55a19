//! Firebase Auth provider backed by the hosted JS SDK.

use super::provider::{Connector, IdentityProvider, StateListener, Subscription};
use crate::config::FirebaseConfig;
use crate::error::{AuthError, ProviderError};
use crate::user::{ProfilePatch, User};
use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(module = "https://www.gstatic.com/firebasejs/10.12.4/firebase-app.js")]
extern "C" {
    #[wasm_bindgen(js_name = initializeApp, catch)]
    fn initialize_app(config: &JsValue) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen(module = "https://www.gstatic.com/firebasejs/10.12.4/firebase-auth.js")]
extern "C" {
    #[wasm_bindgen(js_name = getAuth, catch)]
    fn get_auth(app: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = signInWithEmailAndPassword)]
    fn sign_in_with_email_and_password(auth: &JsValue, email: &str, password: &str) -> Promise;

    #[wasm_bindgen(js_name = createUserWithEmailAndPassword)]
    fn create_user_with_email_and_password(auth: &JsValue, email: &str, password: &str) -> Promise;

    #[wasm_bindgen(js_name = signOut)]
    fn sign_out(auth: &JsValue) -> Promise;

    #[wasm_bindgen(js_name = updateProfile)]
    fn update_profile(user: &JsValue, profile: &JsValue) -> Promise;

    #[wasm_bindgen(js_name = onAuthStateChanged)]
    fn on_auth_state_changed(auth: &JsValue, next: &Function) -> Function;
}

/// Connects to Firebase with `initializeApp` and `getAuth`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirebaseConnector;

impl Connector for FirebaseConnector {
    fn connect(&self, config: &FirebaseConfig) -> Result<Rc<dyn IdentityProvider>, AuthError> {
        let options = serde_wasm_bindgen::to_value(config)
            .map_err(|e| AuthError::InvalidConfig(e.to_string()))?;
        let app = initialize_app(&options)
            .map_err(|e| AuthError::InvalidConfig(provider_error(e).message))?;
        let auth = get_auth(&app).map_err(|e| AuthError::Provider(provider_error(e)))?;
        Ok(Rc::new(FirebaseProvider { auth }))
    }
}

/// A Firebase `Auth` instance.
#[derive(Clone, Debug)]
pub struct FirebaseProvider {
    auth: JsValue,
}

impl FirebaseProvider {
    fn current_user_value(&self) -> Option<JsValue> {
        Reflect::get(&self.auth, &"currentUser".into())
            .ok()
            .filter(|user| !user.is_null() && !user.is_undefined())
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, ProviderError> {
        let credential = settle(sign_in_with_email_and_password(&self.auth, email, password)).await?;
        credential_user(&credential)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<User, ProviderError> {
        let credential =
            settle(create_user_with_email_and_password(&self.auth, email, password)).await?;
        credential_user(&credential)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        settle(sign_out(&self.auth)).await?;
        Ok(())
    }

    async fn update_profile(&self, patch: &ProfilePatch) -> Result<(), ProviderError> {
        let Some(user) = self.current_user_value() else {
            return Err(ProviderError::new("auth/no-current-user", "No user is signed in"));
        };
        let profile = serde_wasm_bindgen::to_value(patch)
            .map_err(|e| ProviderError::new("auth/invalid-profile", e.to_string()))?;
        settle(update_profile(&user, &profile)).await?;
        Ok(())
    }

    fn current_user(&self) -> Option<User> {
        self.current_user_value().map(|user| user_from_js(&user))
    }

    fn observe_state(&self, listener: StateListener) -> Subscription {
        let callback = Closure::<dyn Fn(JsValue)>::new(move |user: JsValue| {
            if user.is_null() || user.is_undefined() {
                listener(None);
            } else {
                listener(Some(user_from_js(&user)));
            }
        });
        let unsubscribe = on_auth_state_changed(&self.auth, callback.as_ref().unchecked_ref());

        Subscription::new(move || {
            if unsubscribe.call0(&JsValue::NULL).is_err() {
                tracing::warn!("Failed to unsubscribe from auth state changes");
            }
            drop(callback);
        })
    }
}

async fn settle(promise: Promise) -> Result<JsValue, ProviderError> {
    JsFuture::from(promise).await.map_err(provider_error)
}

fn credential_user(credential: &JsValue) -> Result<User, ProviderError> {
    let user = Reflect::get(credential, &"user".into()).map_err(provider_error)?;
    if user.is_null() || user.is_undefined() {
        return Err(ProviderError::new("auth/internal-error", "Credential has no user"));
    }
    Ok(user_from_js(&user))
}

fn string_field(value: &JsValue, name: &str) -> Option<String> {
    Reflect::get(value, &name.into())
        .ok()
        .and_then(|field| field.as_string())
}

fn user_from_js(user: &JsValue) -> User {
    User {
        uid: string_field(user, "uid").unwrap_or_default(),
        email: string_field(user, "email"),
        display_name: string_field(user, "displayName"),
        photo_url: string_field(user, "photoURL"),
    }
}

/// Reads `code` and `message` off a rejected SDK promise value.
fn provider_error(err: JsValue) -> ProviderError {
    let code = string_field(&err, "code").unwrap_or_default();
    let message = string_field(&err, "message")
        .or_else(|| err.as_string())
        .unwrap_or_default();
    ProviderError::new(code, message)
}
