//! Session identity and the ownership/admin policy.
//!
//! Sign-in is performed by the authenticating reverse proxy in front of the
//! server; it forwards the verified identity as request headers. Handlers
//! receive that identity explicitly through the [`Authenticated`] and
//! [`MaybeAuthenticated`] extractors.

use crate::error::ApiError;
use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpRequest};
use common::model::location::Location;
use common::model::session::SessionUser;
use std::future::{ready, Ready};

pub const EMAIL_HEADER: &str = "X-Forwarded-Email";
pub const PREFERRED_USERNAME_HEADER: &str = "X-Forwarded-Preferred-Username";
pub const USER_HEADER: &str = "X-Forwarded-User";
pub const AVATAR_HEADER: &str = "X-Forwarded-Avatar";

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Builds the session from proxy headers. The email is mandatory; the
/// display name falls back to the username and then to the email.
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionUser> {
    let email = header(headers, EMAIL_HEADER)?;
    let name = header(headers, PREFERRED_USERNAME_HEADER)
        .or_else(|| header(headers, USER_HEADER))
        .unwrap_or(email);
    Some(SessionUser {
        email: email.to_string(),
        name: name.to_string(),
        image: header(headers, AVATAR_HEADER).map(str::to_string),
    })
}

/// Extractor for routes that require a session; rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct Authenticated(pub SessionUser);

impl FromRequest for Authenticated {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            session_from_headers(req.headers())
                .map(Authenticated)
                .ok_or(ApiError::Unauthorized),
        )
    }
}

/// Extractor for routes that behave differently when signed in.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<SessionUser>);

impl FromRequest for MaybeAuthenticated {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(MaybeAuthenticated(session_from_headers(req.headers()))))
    }
}

/// One-address admin allowlist plus the creator-or-admin rule used for both
/// edits and deletes.
#[derive(Debug, Clone, Default)]
pub struct AdminPolicy {
    admin_email: Option<String>,
}

impl AdminPolicy {
    /// A blank address disables the admin override entirely.
    pub fn new(admin_email: Option<String>) -> Self {
        Self {
            admin_email: admin_email
                .map(|email| email.trim().to_string())
                .filter(|email| !email.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.admin_email.is_some()
    }

    /// Exact, case-sensitive comparison against the configured address.
    pub fn is_admin(&self, user: &SessionUser) -> bool {
        self.admin_email.as_deref() == Some(user.email.as_str())
    }

    pub fn may_modify(&self, user: &SessionUser, location: &Location) -> bool {
        location.is_owned_by(&user.email) || self.is_admin(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{location_owned_by, user};
    use actix_web::test::TestRequest;

    #[test]
    fn reads_identity_from_proxy_headers() {
        let req = TestRequest::default()
            .insert_header((EMAIL_HEADER, "ana@example.com"))
            .insert_header((PREFERRED_USERNAME_HEADER, "Ana"))
            .insert_header((AVATAR_HEADER, "https://img.example.com/ana.png"))
            .to_http_request();
        let session = session_from_headers(req.headers()).unwrap();
        assert_eq!(session.email, "ana@example.com");
        assert_eq!(session.name, "Ana");
        assert_eq!(session.image.as_deref(), Some("https://img.example.com/ana.png"));
    }

    #[test]
    fn display_name_falls_back() {
        let req = TestRequest::default()
            .insert_header((EMAIL_HEADER, "bo@example.com"))
            .insert_header((USER_HEADER, "bo"))
            .to_http_request();
        assert_eq!(session_from_headers(req.headers()).unwrap().name, "bo");

        let req = TestRequest::default()
            .insert_header((EMAIL_HEADER, "bo@example.com"))
            .to_http_request();
        assert_eq!(session_from_headers(req.headers()).unwrap().name, "bo@example.com");
    }

    #[test]
    fn missing_or_blank_email_means_signed_out() {
        let req = TestRequest::default()
            .insert_header((USER_HEADER, "bo"))
            .to_http_request();
        assert!(session_from_headers(req.headers()).is_none());

        let req = TestRequest::default()
            .insert_header((EMAIL_HEADER, "  "))
            .to_http_request();
        assert!(session_from_headers(req.headers()).is_none());
    }

    #[test]
    fn admin_is_a_single_exact_address() {
        let policy = AdminPolicy::new(Some(" admin@example.com ".into()));
        assert!(policy.is_admin(&user("admin@example.com", "Admin")));
        assert!(!policy.is_admin(&user("Admin@example.com", "Admin")));

        let nobody = AdminPolicy::new(Some(String::new()));
        assert!(!nobody.is_configured());
        assert!(!nobody.is_admin(&user("", "Empty")));
        assert!(!AdminPolicy::new(None).is_admin(&user("admin@example.com", "Admin")));
    }

    #[test]
    fn owner_or_admin_may_modify() {
        let policy = AdminPolicy::new(Some("admin@example.com".into()));
        let location = location_owned_by("ana@example.com");
        assert!(policy.may_modify(&user("ana@example.com", "Ana"), &location));
        assert!(policy.may_modify(&user("admin@example.com", "Admin"), &location));
        assert!(!policy.may_modify(&user("bo@example.com", "Bo"), &location));
    }
}
