//! Account data returned by the identity provider.
//!
//! `User` mirrors the subset of the Firebase `User` object the client reads;
//! `ProfilePatch` is the payload of a profile update.

use serde::{Deserialize, Serialize};

/// An authenticated account as seen by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Provider-assigned unique identifier.
    pub uid: String,

    /// Sign-in email, if the account has one.
    #[serde(default)]
    pub email: Option<String>,

    /// Display name set through a profile update.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Avatar URL.
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl User {
    /// Creates a new User with the given uid.
    ///
    /// # Example
    ///
    /// ```
    /// # use dxhealth::User;
    /// let user = User::new("u-123");
    /// assert_eq!(user.uid, "u-123");
    /// assert!(user.email.is_none());
    /// ```
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
            photo_url: None,
        }
    }

    /// Creates a User with an email address.
    pub fn with_email(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::new(uid)
        }
    }

    /// Returns the identifier shown to the user: the trimmed email, or the
    /// trimmed `fallback` when the account has no usable email.
    ///
    /// # Example
    ///
    /// ```
    /// # use dxhealth::User;
    /// let user = User::with_email("u-1", " a@b.co ");
    /// assert_eq!(user.identifier(""), "a@b.co");
    /// assert_eq!(User::new("u-2").identifier(" typed@b.co "), "typed@b.co");
    /// ```
    pub fn identifier<'a>(&'a self, fallback: &'a str) -> &'a str {
        identifier_of(Some(self), fallback)
    }

    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.trim().is_empty())
    }
}

/// Identifier of an optional user, see [`User::identifier`].
pub fn identifier_of<'a>(user: Option<&'a User>, fallback: &'a str) -> &'a str {
    let email = user
        .and_then(|u| u.email.as_deref())
        .map(str::trim)
        .unwrap_or_default();
    if email.is_empty() {
        fallback.trim()
    } else {
        email
    }
}

/// Fields to change in a profile update. `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl ProfilePatch {
    pub fn display_name(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            photo_url: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.photo_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_new() {
        let user = User::new("u-123");
        assert_eq!(user.uid, "u-123");
        assert!(user.email.is_none());
        assert!(user.display_name.is_none());
        assert!(user.photo_url.is_none());
        assert!(!user.has_email());
    }

    #[test]
    fn test_identifier_prefers_email() {
        let user = User::with_email("u-1", "user@example.com");
        assert_eq!(user.identifier("typed@example.com"), "user@example.com");
    }

    #[test]
    fn test_identifier_blank_email_uses_fallback() {
        let user = User::with_email("u-1", "   ");
        assert_eq!(user.identifier(" typed@example.com "), "typed@example.com");
        assert!(!user.has_email());
    }

    #[test]
    fn test_identifier_of_no_user() {
        assert_eq!(identifier_of(None, ""), "");
        assert_eq!(identifier_of(None, "x@y.z"), "x@y.z");
    }

    #[test]
    fn test_deserialization_from_provider_shape() {
        let json = r#"{
            "uid": "abc",
            "email": "user@example.com",
            "displayName": "Somchai",
            "photoURL": "https://example.com/a.png"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.uid, "abc");
        assert_eq!(user.display_name.as_deref(), Some("Somchai"));
        assert_eq!(user.photo_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_deserialization_with_nulls() {
        let json = r#"{"uid": "abc", "email": null, "displayName": null}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user, User::new("abc"));
    }

    #[test]
    fn test_profile_patch_skips_absent_fields() {
        let patch = ProfilePatch::display_name("Somchai");
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "displayName": "Somchai" }));
        assert!(!patch.is_empty());
        assert!(ProfilePatch::default().is_empty());
    }
}
