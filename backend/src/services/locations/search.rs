//! `GET /api/locations/search?q`: unpaginated name search.

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::LocationStore;
use actix_web::{web, HttpResponse};
use common::responses::SearchResults;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

pub(crate) async fn process(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let results = search_locations(state.store.as_ref(), &query.q)?;
    Ok(HttpResponse::Ok().json(results))
}

/// A blank query matches nothing rather than everything.
pub fn search_locations(store: &dyn LocationStore, q: &str) -> Result<SearchResults, ApiError> {
    let needle = q.trim();
    if needle.is_empty() {
        return Ok(SearchResults { locations: Vec::new() });
    }
    let locations = store
        .search(needle)
        .map_err(ApiError::storage("Failed to search locations"))?;
    Ok(SearchResults { locations })
}
