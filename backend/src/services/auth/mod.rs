//! # Session Service Module
//!
//! Read-only views of the proxy-provided session, mounted under `/api/auth`.
//!
//! ## Sub-modules:
//! - `session`: the signed-in user, or `null`.
//! - `check_admin`: whether that user holds the admin address.

mod check_admin;
mod session;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/auth";

/// # Registered Routes:
///
/// *   **`GET /session`** → `session::process`: `{user}`.
/// *   **`GET /check-admin`** → `check_admin::process`: `{isAdmin}`, false when signed out.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/session", get().to(session::process))
        .route("/check-admin", get().to(check_admin::process))
}
