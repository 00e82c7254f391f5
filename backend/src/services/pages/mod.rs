//! # Page Routes
//!
//! Browser-facing routes that sit beside the embedded single-page app. Only
//! `/locations/{slug}/link` is handled on the server; `/locations/{slug}`
//! itself falls through to the SPA, which renders the detail page.

mod link;

use actix_web::web::{get, resource};
use actix_web::Resource;

/// *   **`GET /locations/{slug}/link`** → `link::process`: `302` to the jam
///     link, to the detail page when the link is empty, or home when the slug
///     is unknown.
pub fn configure_routes() -> Resource {
    resource("/locations/{slug}/link").route(get().to(link::process))
}
