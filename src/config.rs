//! Firebase configuration for the identity gateway.
//!
//! The configuration is the web-app object issued by the Firebase console. It is
//! normally published by the page as `window.FIREBASE_CONFIG`; native builds and
//! tests can compile it in from `FIREBASE_*` variables or pass it inline.

use crate::error::AuthError;
use serde::{Deserialize, Serialize};

/// Firebase web-app configuration.
///
/// Field names follow the console's camelCase object so it round-trips with the
/// JS SDK's `initializeApp`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    /// Web API key
    pub api_key: String,

    /// Auth domain, e.g. "my-app.firebaseapp.com"
    pub auth_domain: String,

    /// Project identifier
    pub project_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

impl FirebaseConfig {
    /// Creates a configuration with the three required fields.
    ///
    /// # Example
    ///
    /// ```
    /// # use dxhealth::FirebaseConfig;
    /// let config = FirebaseConfig::new("key", "demo.firebaseapp.com", "demo");
    /// assert_eq!(config.project_id, "demo");
    /// assert!(config.app_id.is_none());
    /// ```
    pub fn new(
        api_key: impl Into<String>,
        auth_domain: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            auth_domain: auth_domain.into(),
            project_id: project_id.into(),
            storage_bucket: None,
            messaging_sender_id: None,
            app_id: None,
            measurement_id: None,
        }
    }

    /// Parses and validates a configuration object.
    ///
    /// `null` is treated as absent; any other non-object value, a missing field
    /// or an empty required field is malformed.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, AuthError> {
        if value.is_null() {
            return Err(AuthError::MissingConfig);
        }
        if !value.is_object() {
            return Err(AuthError::InvalidConfig(
                "expected a configuration object".to_string(),
            ));
        }

        let config: Self = serde_json::from_value(value.clone())
            .map_err(|e| AuthError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the required fields are non-empty.
    pub fn validate(&self) -> Result<(), AuthError> {
        let required = [
            ("apiKey", &self.api_key),
            ("authDomain", &self.auth_domain),
            ("projectId", &self.project_id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AuthError::InvalidConfig(format!("{} is empty", name)));
            }
        }
        Ok(())
    }
}

/// Where the gateway reads its configuration from on first use.
pub trait ConfigSource {
    fn load(&self) -> Result<FirebaseConfig, AuthError>;
}

/// Configuration handed over directly, or deliberately absent.
#[derive(Clone, Debug, Default)]
pub struct InlineConfig(pub Option<serde_json::Value>);

impl InlineConfig {
    pub fn new(value: serde_json::Value) -> Self {
        Self(Some(value))
    }

    pub fn absent() -> Self {
        Self(None)
    }
}

impl From<FirebaseConfig> for InlineConfig {
    fn from(config: FirebaseConfig) -> Self {
        // Serializing a struct of strings cannot fail.
        Self(serde_json::to_value(config).ok())
    }
}

impl ConfigSource for InlineConfig {
    fn load(&self) -> Result<FirebaseConfig, AuthError> {
        match &self.0 {
            Some(value) => FirebaseConfig::from_value(value),
            None => Err(AuthError::MissingConfig),
        }
    }
}

/// Configuration compiled in from `FIREBASE_*` variables (see `build.rs`).
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvConfig;

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<FirebaseConfig, AuthError> {
        let (Some(api_key), Some(auth_domain), Some(project_id)) = (
            option_env!("FIREBASE_API_KEY"),
            option_env!("FIREBASE_AUTH_DOMAIN"),
            option_env!("FIREBASE_PROJECT_ID"),
        ) else {
            return Err(AuthError::MissingConfig);
        };

        let optional = |value: Option<&str>| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
        };

        let config = FirebaseConfig {
            storage_bucket: optional(option_env!("FIREBASE_STORAGE_BUCKET")),
            messaging_sender_id: optional(option_env!("FIREBASE_MESSAGING_SENDER_ID")),
            app_id: optional(option_env!("FIREBASE_APP_ID")),
            measurement_id: optional(option_env!("FIREBASE_MEASUREMENT_ID")),
            ..FirebaseConfig::new(api_key, auth_domain, project_id)
        };
        config.validate()?;
        Ok(config)
    }
}

/// Name of the window property holding the configuration object.
pub const GLOBAL_CONFIG_KEY: &str = "FIREBASE_CONFIG";

/// Configuration published by the page as `window.FIREBASE_CONFIG`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalConfig;

#[cfg(target_arch = "wasm32")]
impl ConfigSource for GlobalConfig {
    fn load(&self) -> Result<FirebaseConfig, AuthError> {
        let window = web_sys::window().ok_or(AuthError::MissingConfig)?;
        let value = js_sys::Reflect::get(&window, &GLOBAL_CONFIG_KEY.into())
            .map_err(|_| AuthError::MissingConfig)?;
        if value.is_undefined() || value.is_null() {
            tracing::warn!("{} not found on window", GLOBAL_CONFIG_KEY);
            return Err(AuthError::MissingConfig);
        }

        let json: serde_json::Value = serde_wasm_bindgen::from_value(value)
            .map_err(|e| AuthError::InvalidConfig(e.to_string()))?;
        FirebaseConfig::from_value(&json)
    }
}

/// Non-WASM stub: there is no window to read from.
#[cfg(not(target_arch = "wasm32"))]
impl ConfigSource for GlobalConfig {
    fn load(&self) -> Result<FirebaseConfig, AuthError> {
        tracing::trace!("No window global outside the browser");
        Err(AuthError::MissingConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn console_object() -> serde_json::Value {
        json!({
            "apiKey": "AIzaTest",
            "authDomain": "aha-test.firebaseapp.com",
            "projectId": "aha-test",
            "storageBucket": "aha-test.appspot.com",
            "messagingSenderId": "1234",
            "appId": "1:1234:web:abcd"
        })
    }

    #[test]
    fn test_from_value_full_object() {
        let config = FirebaseConfig::from_value(&console_object()).unwrap();
        assert_eq!(config.api_key, "AIzaTest");
        assert_eq!(config.auth_domain, "aha-test.firebaseapp.com");
        assert_eq!(config.project_id, "aha-test");
        assert_eq!(config.app_id.as_deref(), Some("1:1234:web:abcd"));
        assert!(config.measurement_id.is_none());
    }

    #[test]
    fn test_from_value_null_is_missing() {
        let err = FirebaseConfig::from_value(&serde_json::Value::Null).unwrap_err();
        assert_eq!(err, AuthError::MissingConfig);
    }

    #[test]
    fn test_from_value_wrong_shape() {
        let err = FirebaseConfig::from_value(&json!("not an object")).unwrap_err();
        assert!(matches!(err, AuthError::InvalidConfig(_)));

        let err = FirebaseConfig::from_value(&json!({ "apiKey": "k" })).unwrap_err();
        assert!(matches!(err, AuthError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_value_empty_required_field() {
        let mut value = console_object();
        value["apiKey"] = json!("  ");
        let err = FirebaseConfig::from_value(&value).unwrap_err();
        assert_eq!(err, AuthError::InvalidConfig("apiKey is empty".to_string()));
    }

    #[test]
    fn test_serialization_uses_console_names() {
        let config = FirebaseConfig::new("key", "demo.firebaseapp.com", "demo");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["apiKey"], "key");
        assert_eq!(json["authDomain"], "demo.firebaseapp.com");
        assert!(json.get("appId").is_none());
    }

    #[test]
    fn test_inline_config_absent() {
        assert_eq!(
            InlineConfig::absent().load().unwrap_err(),
            AuthError::MissingConfig
        );
    }

    #[test]
    fn test_inline_config_round_trip() {
        let config = FirebaseConfig::new("key", "demo.firebaseapp.com", "demo");
        let loaded = InlineConfig::from(config.clone()).load().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_global_config_outside_browser() {
        assert_eq!(GlobalConfig.load().unwrap_err(), AuthError::MissingConfig);
    }

    #[test]
    fn test_env_config() {
        // Depends on FIREBASE_* at compile time; when set, the result must be valid
        // or a configuration error, never anything else.
        match EnvConfig.load() {
            Ok(config) => assert!(!config.api_key.is_empty()),
            Err(err) => assert!(err.is_config_error()),
        }
    }
}
