//! Fixtures shared by the handler and store tests.

use crate::auth::{AdminPolicy, EMAIL_HEADER, PREFERRED_USERNAME_HEADER};
use crate::services::contact::ContactWebhook;
use crate::state::AppState;
use crate::store::{LocationStore, MemoryLocationStore, NewLocation};
use actix_web::test::TestRequest;
use chrono::{DateTime, TimeZone, Utc};
use common::model::location::Location;
use common::model::session::SessionUser;
use std::sync::Arc;

pub const ADMIN: &str = "admin@example.com";

pub fn user(email: &str, name: &str) -> SessionUser {
    SessionUser {
        email: email.to_string(),
        name: name.to_string(),
        image: None,
    }
}

pub fn ana() -> SessionUser {
    user("ana@example.com", "Ana")
}

pub fn bo() -> SessionUser {
    user("bo@example.com", "Bo")
}

pub fn admin() -> SessionUser {
    user(ADMIN, "Admin")
}

pub fn at_minute(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + chrono::Duration::minutes(minute.into())
}

pub fn location_owned_by(email: &str) -> Location {
    Location {
        id: "loc-1".to_string(),
        name: "Coffee Shop".to_string(),
        jam_link: "https://example.com/jam".to_string(),
        created_by: email.to_string(),
        created_by_name: "Owner".to_string(),
        updated_by: email.to_string(),
        updated_by_name: "Owner".to_string(),
        updated_at: at_minute(0),
    }
}

/// State over an empty in-memory store, `admin@example.com` as admin and no
/// contact webhook.
pub fn memory_state() -> AppState {
    AppState {
        store: Arc::new(MemoryLocationStore::new()),
        admin: AdminPolicy::new(Some(ADMIN.to_string())),
        contact: ContactWebhook::new(None).unwrap(),
        page_limit: 10,
    }
}

/// Inserts a record owned by `owner` stamped `minute` minutes into the fixture day.
pub fn seed(state: &AppState, name: &str, jam_link: &str, owner: &SessionUser, minute: u32) -> Location {
    state
        .store
        .insert(NewLocation {
            name: name.to_string(),
            jam_link: jam_link.to_string(),
            creator: owner.clone(),
            created_at: at_minute(minute),
        })
        .unwrap()
}

/// Adds the proxy identity headers for `user`.
pub fn signed_in(req: TestRequest, user: &SessionUser) -> TestRequest {
    req.insert_header((EMAIL_HEADER, user.email.as_str()))
        .insert_header((PREFERRED_USERNAME_HEADER, user.name.as_str()))
}
