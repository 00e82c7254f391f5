//! `POST /api/locations/check-duplicate`: advisory name probe for the
//! create form. The store's unique index is what actually prevents duplicates.

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::LocationStore;
use actix_web::{web, HttpResponse};
use common::requests::CheckDuplicateRequest;
use common::responses::DuplicateCheck;
use common::slug::normalize_name;

pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<CheckDuplicateRequest>,
) -> Result<HttpResponse, ApiError> {
    let exists = name_exists(state.store.as_ref(), &payload.name)?;
    Ok(HttpResponse::Ok().json(DuplicateCheck { exists }))
}

pub fn name_exists(store: &dyn LocationStore, raw: &str) -> Result<bool, ApiError> {
    let name = normalize_name(raw);
    if name.is_empty() {
        return Ok(false);
    }
    let found = store
        .find_by_name(&name)
        .map_err(ApiError::storage("Failed to check for duplicates"))?;
    Ok(found.is_some())
}
