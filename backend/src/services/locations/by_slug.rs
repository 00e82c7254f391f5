//! `GET /api/locations/slug/{slug}`: record plus QR code for the detail page.

use crate::error::ApiError;
use crate::qr;
use crate::state::AppState;
use crate::store::LocationStore;
use actix_web::{web, HttpResponse};
use common::model::location::Location;
use common::responses::LocationDetail;
use common::slug::name_from_slug;
use log::warn;

pub(crate) async fn process(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let location = find_by_slug(state.store.as_ref(), &slug)?
        .ok_or_else(|| ApiError::NotFound("Location not found".to_string()))?;
    let qr_code = qr_for(&location);
    Ok(HttpResponse::Ok().json(LocationDetail { location, qr_code }))
}

/// `coffee-shop` resolves to the record named `Coffee Shop`, ignoring case.
pub fn find_by_slug(store: &dyn LocationStore, slug: &str) -> Result<Option<Location>, ApiError> {
    let name = name_from_slug(slug);
    if name.trim().is_empty() {
        return Ok(None);
    }
    store
        .find_by_name(&name)
        .map_err(ApiError::storage("Failed to fetch location"))
}

fn qr_for(location: &Location) -> Option<String> {
    if !location.has_jam_link() {
        return None;
    }
    qr::data_url(&location.jam_link)
        .map_err(|e| warn!("QR generation failed for '{}': {e}", location.name))
        .ok()
}
