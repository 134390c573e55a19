//! Fixed toasts reporting the outcome of account operations.

use super::center::{NotificationCenter, ToastHandle};
use crate::clock::Clock;
use crate::dom::Dom;
use crate::error::AuthError;
use crate::messages::{ErrorDetails, describe_error};
use crate::user::{User, identifier_of};

pub const LOGIN_SUCCESS_TITLE: &str = "เข้าสู่ระบบสำเร็จ";
pub const LOGIN_ERROR_TITLE: &str = "เข้าสู่ระบบไม่สำเร็จ";
pub const SIGNUP_SUCCESS_TITLE: &str = "สมัครสมาชิกสำเร็จ";
pub const SIGNUP_ERROR_TITLE: &str = "สมัครสมาชิกไม่สำเร็จ";
pub const SIGNUP_WELCOME: &str = "ยินดีต้อนรับสู่ AI Health Analyze";
pub const LOGOUT_SUCCESS_TITLE: &str = "ออกจากระบบแล้ว";
pub const LOGOUT_SUCCESS_BODY: &str = "กลับมาเมื่อไรก็ยินดีต้อนรับ";
pub const LOGOUT_ERROR_TITLE: &str = "ออกจากระบบไม่สำเร็จ";
pub const PROFILE_SUCCESS_TITLE: &str = "อัปเดตโปรไฟล์สำเร็จ";
pub const PROFILE_ERROR_TITLE: &str = "อัปเดตโปรไฟล์ไม่สำเร็จ";
pub const PROFILE_MISSING_USER: &str = crate::messages::NO_SESSION_MESSAGE;
pub const AUTHENTICATED_TITLE: &str = "เข้าสู่ระบบแล้ว";

/// "บัญชี: <identifier>", or empty when there is nothing to show.
pub fn account_subtitle(user: Option<&User>, fallback: &str) -> String {
    let identifier = identifier_of(user, fallback);
    if identifier.is_empty() {
        String::new()
    } else {
        format!("บัญชี: {}", identifier)
    }
}

impl<D: Dom, C: Clock> NotificationCenter<D, C> {
    pub fn login_succeeded(&mut self, user: Option<&User>, identifier: &str) -> ToastHandle<D::Node> {
        let subtitle = account_subtitle(user, identifier);
        self.show_success(LOGIN_SUCCESS_TITLE, &subtitle)
    }

    pub fn login_failed<E: ErrorDetails + ?Sized>(&mut self, error: Option<&E>) -> ToastHandle<D::Node> {
        self.show_error(LOGIN_ERROR_TITLE, &describe_error(error))
    }

    pub fn signup_succeeded(&mut self, user: Option<&User>, identifier: &str) -> ToastHandle<D::Node> {
        let subtitle = account_subtitle(user, identifier);
        let body = if subtitle.is_empty() {
            SIGNUP_WELCOME
        } else {
            subtitle.as_str()
        };
        self.show_success(SIGNUP_SUCCESS_TITLE, body)
    }

    pub fn signup_failed<E: ErrorDetails + ?Sized>(&mut self, error: Option<&E>) -> ToastHandle<D::Node> {
        self.show_error(SIGNUP_ERROR_TITLE, &describe_error(error))
    }

    pub fn logout_succeeded(&mut self) -> ToastHandle<D::Node> {
        self.show_success(LOGOUT_SUCCESS_TITLE, LOGOUT_SUCCESS_BODY)
    }

    pub fn logout_failed<E: ErrorDetails + ?Sized>(&mut self, error: Option<&E>) -> ToastHandle<D::Node> {
        self.show_error(LOGOUT_ERROR_TITLE, &describe_error(error))
    }

    pub fn profile_updated(&mut self) -> ToastHandle<D::Node> {
        self.show_success(PROFILE_SUCCESS_TITLE, "")
    }

    pub fn profile_update_failed<E: ErrorDetails + ?Sized>(
        &mut self,
        error: Option<&E>,
    ) -> ToastHandle<D::Node> {
        self.show_error(PROFILE_ERROR_TITLE, &describe_error(error))
    }

    pub fn profile_missing_user(&mut self) -> ToastHandle<D::Node> {
        self.show_error(PROFILE_ERROR_TITLE, PROFILE_MISSING_USER)
    }

    /// Info toast for a session that was already signed in.
    pub fn already_authenticated(&mut self, user: Option<&User>) -> ToastHandle<D::Node> {
        let subtitle = account_subtitle(user, "");
        self.show_info(AUTHENTICATED_TITLE, &subtitle)
    }

    /// Reports a finished login attempt.
    pub fn report_login(
        &mut self,
        result: &Result<User, AuthError>,
        identifier: &str,
    ) -> ToastHandle<D::Node> {
        match result {
            Ok(user) => self.login_succeeded(Some(user), identifier),
            Err(err) => self.login_failed(Some(err)),
        }
    }

    /// Reports a finished signup attempt.
    pub fn report_signup(
        &mut self,
        result: &Result<User, AuthError>,
        identifier: &str,
    ) -> ToastHandle<D::Node> {
        match result {
            Ok(user) => self.signup_succeeded(Some(user), identifier),
            Err(err) => self.signup_failed(Some(err)),
        }
    }

    pub fn report_logout(&mut self, result: &Result<(), AuthError>) -> ToastHandle<D::Node> {
        match result {
            Ok(()) => self.logout_succeeded(),
            Err(err) => self.logout_failed(Some(err)),
        }
    }

    /// Reports a profile update. A missing session gets its own message.
    pub fn report_profile_update(&mut self, result: &Result<(), AuthError>) -> ToastHandle<D::Node> {
        match result {
            Ok(()) => self.profile_updated(),
            Err(AuthError::NoAuthenticatedUser) => self.profile_missing_user(),
            Err(err) => self.profile_update_failed(Some(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::VirtualClock;
    use crate::dom::MemoryDom;
    use crate::error::{FormError, ProviderError};
    use crate::messages::DEFAULT_ERROR_MESSAGE;
    use crate::toast::ToastKind;

    fn center() -> (NotificationCenter<MemoryDom, VirtualClock>, MemoryDom) {
        let dom = MemoryDom::new();
        (NotificationCenter::new(dom.clone(), VirtualClock::new()), dom)
    }

    /// Title and body text of a card.
    fn lines(dom: &MemoryDom, card: &crate::dom::MemoryNode) -> Vec<String> {
        let content = dom.children(card)[1];
        dom.children(&content).iter().map(|p| dom.text(p)).collect()
    }

    #[test]
    fn test_account_subtitle() {
        let user = User::with_email("u1", "  ann@example.com ");
        assert_eq!(account_subtitle(Some(&user), "x"), "บัญชี: ann@example.com");
        assert_eq!(account_subtitle(None, " bob@example.com"), "บัญชี: bob@example.com");
        assert_eq!(account_subtitle(None, "  "), "");
    }

    #[test]
    fn test_login_succeeded_uses_email() {
        let (mut center, dom) = center();
        let user = User::with_email("u1", "ann@example.com");
        let handle = center.login_succeeded(Some(&user), "typed@example.com");
        assert_eq!(
            lines(&dom, &handle.element),
            vec!["เข้าสู่ระบบสำเร็จ", "บัญชี: ann@example.com"]
        );
        assert_eq!(center.kind(handle.id), Some(ToastKind::Success));
    }

    #[test]
    fn test_login_failed_translates_code() {
        let (mut center, dom) = center();
        let err = ProviderError::new("auth/wrong-password", "Firebase: wrong password");
        let handle = center.login_failed(Some(&err));
        assert_eq!(
            lines(&dom, &handle.element),
            vec!["เข้าสู่ระบบไม่สำเร็จ", "รหัสผ่านไม่ถูกต้อง"]
        );
        assert_eq!(center.kind(handle.id), Some(ToastKind::Error));
    }

    #[test]
    fn test_failure_without_error_uses_default() {
        let (mut center, dom) = center();
        let handle = center.logout_failed(None::<&AuthError>);
        assert_eq!(
            lines(&dom, &handle.element),
            vec![LOGOUT_ERROR_TITLE, DEFAULT_ERROR_MESSAGE]
        );
    }

    #[test]
    fn test_signup_welcome_fallback() {
        let (mut center, dom) = center();
        let handle = center.signup_succeeded(Some(&User::new("u1")), "");
        assert_eq!(
            lines(&dom, &handle.element),
            vec![SIGNUP_SUCCESS_TITLE, SIGNUP_WELCOME]
        );

        let handle = center.signup_succeeded(None, "new@example.com");
        assert_eq!(
            lines(&dom, &handle.element),
            vec![SIGNUP_SUCCESS_TITLE, "บัญชี: new@example.com"]
        );
    }

    #[test]
    fn test_logout_and_profile_success() {
        let (mut center, dom) = center();
        let handle = center.logout_succeeded();
        assert_eq!(
            lines(&dom, &handle.element),
            vec![LOGOUT_SUCCESS_TITLE, LOGOUT_SUCCESS_BODY]
        );

        let handle = center.profile_updated();
        assert_eq!(lines(&dom, &handle.element), vec![PROFILE_SUCCESS_TITLE]);
    }

    #[test]
    fn test_already_authenticated_is_info() {
        let (mut center, dom) = center();
        let user = User::with_email("u1", "ann@example.com");
        let handle = center.already_authenticated(Some(&user));
        assert_eq!(center.kind(handle.id), Some(ToastKind::Info));
        assert_eq!(
            lines(&dom, &handle.element),
            vec![AUTHENTICATED_TITLE, "บัญชี: ann@example.com"]
        );
    }

    #[test]
    fn test_report_profile_update_without_user() {
        let (mut center, dom) = center();
        let handle = center.report_profile_update(&Err(AuthError::NoAuthenticatedUser));
        assert_eq!(
            lines(&dom, &handle.element),
            vec![PROFILE_ERROR_TITLE, PROFILE_MISSING_USER]
        );
    }

    #[test]
    fn test_report_login_form_error() {
        let (mut center, dom) = center();
        let result = Err(AuthError::from(FormError::MissingPassword));
        let handle = center.report_login(&result, "ann@example.com");
        assert_eq!(
            lines(&dom, &handle.element)[1],
            describe_error(Some(&FormError::MissingPassword))
        );
    }

    #[test]
    fn test_report_signup_config_error() {
        let (mut center, dom) = center();
        let handle = center.report_signup(&Err(AuthError::MissingConfig), "ann@example.com");
        assert_eq!(
            lines(&dom, &handle.element),
            vec![SIGNUP_ERROR_TITLE, "ระบบยังไม่ได้ตั้งค่าการเชื่อมต่อกับ Firebase"]
        );
    }
}
