//! `DELETE /api/locations/{id}`: physical delete by the creator or the admin.

use crate::auth::{AdminPolicy, Authenticated};
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::LocationStore;
use actix_web::{web, HttpResponse};
use common::model::session::SessionUser;
use common::responses::SuccessResponse;
use log::info;

pub(crate) async fn process(
    state: web::Data<AppState>,
    Authenticated(user): Authenticated,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    delete_location(state.store.as_ref(), &state.admin, &user, &id)?;
    info!("{} deleted location {}", user.email, id.as_str());
    Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
}

pub fn delete_location(
    store: &dyn LocationStore,
    policy: &AdminPolicy,
    user: &SessionUser,
    id: &str,
) -> Result<(), ApiError> {
    let existing = store
        .find_by_id(id)
        .map_err(ApiError::storage("Failed to delete location"))?
        .ok_or_else(|| ApiError::NotFound("Location not found".to_string()))?;
    if !policy.may_modify(user, &existing) {
        return Err(ApiError::Forbidden(
            "Only the creator or an admin can delete this location".to_string(),
        ));
    }

    let deleted = store
        .delete(id)
        .map_err(ApiError::storage("Failed to delete location"))?;
    if deleted {
        Ok(())
    } else {
        Err(ApiError::NotFound("Location not found".to_string()))
    }
}
