//! # Location Service Module
//!
//! CRUD, search and lookup over the `locations` collection, mounted under
//! `/api/locations`.
//!
//! ## Sub-modules:
//! - `list`: paginated listing, newest update first.
//! - `search`: case-insensitive substring search on names.
//! - `create`: authenticated insert with naming, link and content checks.
//! - `check_duplicate`: advisory name-taken probe used by the create modal.
//! - `by_slug`: detail payload (record + QR) for the `/locations/{slug}` page.
//! - `update`: owner/admin link edit.
//! - `remove`: owner/admin physical delete.

mod by_slug;
mod check_duplicate;
mod create;
mod list;
mod remove;
mod search;
mod update;

pub use by_slug::find_by_slug;

use crate::error::ApiError;
use actix_web::web::{delete, get, patch, post, scope};
use actix_web::Scope;
use url::Url;

const API_PATH: &str = "/api/locations";

/// Configures and returns the Actix `Scope` for all location routes.
///
/// # Registered Routes:
///
/// *   **`GET ?page&limit`** → `list::process`: `{locations, hasMore}`.
/// *   **`POST`** → `create::process`: body `{name, jamLink}`, session required.
/// *   **`GET /search?q`** → `search::process`: `{locations}`, empty for a blank `q`.
/// *   **`POST /check-duplicate`** → `check_duplicate::process`: `{exists}`.
/// *   **`GET /slug/{slug}`** → `by_slug::process`: `{location, qrCode}` or 404.
/// *   **`PATCH /{id}`** → `update::process`: body `{jamLink}`, owner or admin.
/// *   **`DELETE /{id}`** → `remove::process`: owner or admin.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/search", get().to(search::process))
        .route("/check-duplicate", post().to(check_duplicate::process))
        .route("/slug/{slug}", get().to(by_slug::process))
        .route("/{id}", patch().to(update::process))
        .route("/{id}", delete().to(remove::process))
}

/// Checks that a jam link is an absolute http(s) URL and returns it trimmed.
fn validate_jam_link(raw: &str) -> Result<String, ApiError> {
    let link = raw.trim();
    if link.is_empty() {
        return Err(ApiError::Validation("Jam link is required".to_string()));
    }
    match Url::parse(link) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(link.to_string())
        }
        _ => Err(ApiError::Validation(
            "Jam link must be a valid http(s) URL".to_string(),
        )),
    }
}
