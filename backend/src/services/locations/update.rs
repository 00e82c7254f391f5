//! `PATCH /api/locations/{id}`: replace or clear the jam link.

use super::validate_jam_link;
use crate::auth::{AdminPolicy, Authenticated};
use crate::error::ApiError;
use crate::services::now;
use crate::state::AppState;
use crate::store::LocationStore;
use actix_web::{web, HttpResponse};
use common::model::location::Location;
use common::model::session::SessionUser;
use common::requests::UpdateLocationRequest;
use log::info;

pub(crate) async fn process(
    state: web::Data<AppState>,
    Authenticated(user): Authenticated,
    id: web::Path<String>,
    payload: web::Json<UpdateLocationRequest>,
) -> Result<HttpResponse, ApiError> {
    let updated = update_jam_link(
        state.store.as_ref(),
        &state.admin,
        &user,
        &id,
        &payload.jam_link,
    )?;
    info!("{} updated the jam link of '{}'", user.email, updated.name);
    Ok(HttpResponse::Ok().json(updated))
}

/// An empty (or blank) link clears it. Nothing is written unless the record
/// exists and `user` is its creator or the admin; the link is only checked
/// once both hold.
pub fn update_jam_link(
    store: &dyn LocationStore,
    policy: &AdminPolicy,
    user: &SessionUser,
    id: &str,
    raw_link: &str,
) -> Result<Location, ApiError> {
    let existing = store
        .find_by_id(id)
        .map_err(ApiError::storage("Failed to update location"))?
        .ok_or_else(|| ApiError::NotFound("Location not found".to_string()))?;
    if !policy.may_modify(user, &existing) {
        return Err(ApiError::Forbidden(
            "Only the creator or an admin can edit this location".to_string(),
        ));
    }
    let jam_link = if raw_link.trim().is_empty() {
        String::new()
    } else {
        validate_jam_link(raw_link)?
    };

    store
        .update_link(id, &jam_link, user, now())
        .map_err(ApiError::storage("Failed to update location"))?
        .ok_or_else(|| ApiError::NotFound("Location not found".to_string()))
}
