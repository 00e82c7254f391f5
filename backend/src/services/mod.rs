//! HTTP handlers, grouped by route prefix. Each group exposes a
//! `configure_routes()` that `main` mounts on the app.

pub mod auth;
pub mod contact;
pub mod locations;
pub mod pages;

use chrono::{DateTime, SubsecRound, Utc};

/// Mutation timestamp, truncated to the store's microsecond precision so the
/// record returned to the client equals the one read back later.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
