use crate::auth::MaybeAuthenticated;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::responses::AdminCheck;

pub(crate) async fn process(
    state: web::Data<AppState>,
    MaybeAuthenticated(user): MaybeAuthenticated,
) -> HttpResponse {
    let is_admin = user.as_ref().is_some_and(|user| state.admin.is_admin(user));
    HttpResponse::Ok().json(AdminCheck { is_admin })
}
