use crate::auth::MaybeAuthenticated;
use actix_web::HttpResponse;
use common::responses::SessionInfo;

pub(crate) async fn process(MaybeAuthenticated(user): MaybeAuthenticated) -> HttpResponse {
    HttpResponse::Ok().json(SessionInfo { user })
}
