//! Human-readable text for error-like values.
//!
//! Errors are shown to the user as toast bodies. A value exposing a known code is
//! translated through [`ERROR_MESSAGES`]; anything else falls back to its own
//! message, then to [`DEFAULT_ERROR_MESSAGE`].

use crate::error::{AuthError, FormError, ProviderError};

/// Shown when an error has neither a known code nor a message.
pub const DEFAULT_ERROR_MESSAGE: &str = "เกิดข้อผิดพลาดที่ไม่ทราบสาเหตุ";

/// Shown when an operation needs a signed-in user and there is none.
pub const NO_SESSION_MESSAGE: &str = "ไม่พบผู้ใช้ กรุณาเข้าสู่ระบบก่อน";

/// Fixed code to message table. Exact match only.
pub const ERROR_MESSAGES: [(&str, &str); 18] = [
    ("auth/invalid-email", "อีเมลไม่ถูกต้อง"),
    ("auth/missing-email", "กรุณากรอกอีเมล"),
    ("auth/missing-input", "กรุณากรอกข้อมูลให้ครบถ้วน"),
    ("auth/user-disabled", "บัญชีนี้ถูกระงับการใช้งาน"),
    ("auth/user-not-found", "ไม่พบบัญชีผู้ใช้"),
    ("auth/wrong-password", "รหัสผ่านไม่ถูกต้อง"),
    ("auth/invalid-credential", "ข้อมูลเข้าสู่ระบบไม่ถูกต้อง"),
    ("auth/email-already-in-use", "อีเมลนี้ถูกใช้งานแล้ว"),
    ("auth/weak-password", "รหัสผ่านสั้นเกินไป"),
    ("auth/missing-password", "กรุณากรอกรหัสผ่าน"),
    ("auth/password-mismatch", "กรุณายืนยันรหัสผ่านให้ตรงกัน"),
    (
        "auth/too-many-requests",
        "พยายามเข้าสู่ระบบบ่อยเกินไป โปรดลองใหม่ภายหลัง",
    ),
    ("auth/network-request-failed", "ไม่สามารถเชื่อมต่อเครือข่ายได้"),
    ("auth/operation-not-allowed", "วิธีการนี้ยังไม่เปิดใช้งาน"),
    ("auth/popup-closed-by-user", "คุณปิดหน้าต่างก่อนดำเนินการเสร็จ"),
    (
        "auth/requires-recent-login",
        "กรุณาเข้าสู่ระบบอีกครั้งเพื่อดำเนินการ",
    ),
    (
        "auth/credential-already-in-use",
        "บัญชีนี้เชื่อมโยงกับบริการอื่นแล้ว",
    ),
    (
        "app/missing-firebase-config",
        "ระบบยังไม่ได้ตั้งค่าการเชื่อมต่อกับ Firebase",
    ),
];

/// An error-like value that may expose a code and a message.
pub trait ErrorDetails {
    fn code(&self) -> Option<&str>;
    fn message(&self) -> Option<&str>;
}

impl ErrorDetails for ProviderError {
    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }

    fn message(&self) -> Option<&str> {
        Some(&self.message)
    }
}

impl ErrorDetails for FormError {
    fn code(&self) -> Option<&str> {
        Some(FormError::code(self))
    }

    fn message(&self) -> Option<&str> {
        None
    }
}

impl ErrorDetails for AuthError {
    fn code(&self) -> Option<&str> {
        AuthError::code(self)
    }

    fn message(&self) -> Option<&str> {
        match self {
            AuthError::Provider(err) => Some(&err.message),
            AuthError::NoAuthenticatedUser => Some(NO_SESSION_MESSAGE),
            _ => None,
        }
    }
}

/// Reads `code` and `message` string fields of a JSON object.
impl ErrorDetails for serde_json::Value {
    fn code(&self) -> Option<&str> {
        self.get("code").and_then(serde_json::Value::as_str)
    }

    fn message(&self) -> Option<&str> {
        self.get("message").and_then(serde_json::Value::as_str)
    }
}

/// Looks up the fixed message for `code`.
pub fn message_for_code(code: &str) -> Option<&'static str> {
    ERROR_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, text)| *text)
}

/// Derives the text shown for `error`.
///
/// # Example
///
/// ```
/// # use dxhealth::messages::{describe_error, DEFAULT_ERROR_MESSAGE};
/// # use dxhealth::ProviderError;
/// let err = ProviderError::new("auth/wrong-password", "wrong password");
/// assert_eq!(describe_error(Some(&err)), "รหัสผ่านไม่ถูกต้อง");
/// assert_eq!(describe_error(None::<&ProviderError>), DEFAULT_ERROR_MESSAGE);
/// ```
pub fn describe_error<E: ErrorDetails + ?Sized>(error: Option<&E>) -> String {
    let Some(error) = error else {
        return DEFAULT_ERROR_MESSAGE.to_string();
    };

    if let Some(text) = error.code().and_then(message_for_code) {
        return text.to_string();
    }

    match error.message().map(str::trim) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => DEFAULT_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_code_uses_table() {
        let err = ProviderError::new("auth/wrong-password", "Firebase: Error");
        assert_eq!(describe_error(Some(&err)), "รหัสผ่านไม่ถูกต้อง");
    }

    #[test]
    fn test_unknown_code_uses_message() {
        let err = ProviderError::new("auth/internal-error", "X");
        assert_eq!(describe_error(Some(&err)), "X");
    }

    #[test]
    fn test_message_is_trimmed() {
        let err = json!({ "message": "  offline  " });
        assert_eq!(describe_error(Some(&err)), "offline");
    }

    #[test]
    fn test_neither_code_nor_message_uses_default() {
        let err = json!({});
        assert_eq!(describe_error(Some(&err)), DEFAULT_ERROR_MESSAGE);

        let blank = ProviderError::new("auth/unknown", "   ");
        assert_eq!(describe_error(Some(&blank)), DEFAULT_ERROR_MESSAGE);

        assert_eq!(describe_error(None::<&AuthError>), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_non_string_fields_are_ignored() {
        let err = json!({ "code": 42, "message": "fallback" });
        assert_eq!(describe_error(Some(&err)), "fallback");
    }

    #[test]
    fn test_config_error_message() {
        assert_eq!(
            describe_error(Some(&AuthError::MissingConfig)),
            "ระบบยังไม่ได้ตั้งค่าการเชื่อมต่อกับ Firebase"
        );
    }

    #[test]
    fn test_form_error_message() {
        let err = AuthError::from(FormError::PasswordMismatch);
        assert_eq!(
            describe_error(Some(&err)),
            "กรุณายืนยันรหัสผ่านให้ตรงกัน"
        );
    }

    #[test]
    fn test_missing_session_message() {
        assert_eq!(
            describe_error(Some(&AuthError::NoAuthenticatedUser)),
            NO_SESSION_MESSAGE
        );
    }

    #[test]
    fn test_no_wildcard_matching() {
        assert!(message_for_code("auth/wrong-password").is_some());
        assert!(message_for_code("auth/wrong").is_none());
        assert!(message_for_code("AUTH/WRONG-PASSWORD").is_none());
    }

    #[test]
    fn test_table_codes_are_unique() {
        for (i, (code, _)) in ERROR_MESSAGES.iter().enumerate() {
            assert!(
                ERROR_MESSAGES[i + 1..].iter().all(|(other, _)| other != code),
                "duplicate code {code}"
            );
        }
    }
}
