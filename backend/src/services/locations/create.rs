//! `POST /api/locations`: authenticated insert.

use super::validate_jam_link;
use crate::auth::Authenticated;
use crate::error::ApiError;
use crate::services::now;
use crate::state::AppState;
use crate::store::{LocationStore, NewLocation};
use actix_web::{web, HttpResponse};
use common::filter::contains_inappropriate_content;
use common::model::location::Location;
use common::model::session::SessionUser;
use common::requests::CreateLocationRequest;
use common::slug::validate_name;
use log::info;

pub(crate) async fn process(
    state: web::Data<AppState>,
    Authenticated(user): Authenticated,
    payload: web::Json<CreateLocationRequest>,
) -> Result<HttpResponse, ApiError> {
    let created = create_location(state.store.as_ref(), &user, &payload)?;
    info!("{} created location '{}' ({})", user.email, created.name, created.id);
    Ok(HttpResponse::Created().json(created))
}

/// Runs the naming, link and content checks, then inserts with the
/// caller's identity as both creator and last editor.
pub fn create_location(
    store: &dyn LocationStore,
    user: &SessionUser,
    payload: &CreateLocationRequest,
) -> Result<Location, ApiError> {
    let name = validate_name(&payload.name).map_err(|e| ApiError::Validation(e.to_string()))?;
    let jam_link = validate_jam_link(&payload.jam_link)?;
    if contains_inappropriate_content(&name) {
        return Err(ApiError::ContentPolicy(
            "Please choose an appropriate name".to_string(),
        ));
    }

    store
        .insert(NewLocation {
            name,
            jam_link,
            creator: user.clone(),
            created_at: now(),
        })
        .map_err(ApiError::storage("Failed to create location"))
}
