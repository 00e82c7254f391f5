use crate::error::ApiError;
use crate::services::locations::find_by_slug;
use crate::state::AppState;
use crate::store::LocationStore;
use actix_web::http::header;
use actix_web::{web, HttpResponse};

/// Where a `/locations/{slug}/link` visit ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Home,
    Detail(String),
    External(String),
}

impl LinkTarget {
    fn location(&self) -> String {
        match self {
            LinkTarget::Home => "/".to_string(),
            LinkTarget::Detail(slug) => format!("/locations/{slug}"),
            LinkTarget::External(url) => url.clone(),
        }
    }
}

pub(crate) async fn process(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let target = resolve(state.store.as_ref(), &slug)?;
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, target.location()))
        .finish())
}

pub fn resolve(store: &dyn LocationStore, slug: &str) -> Result<LinkTarget, ApiError> {
    Ok(match find_by_slug(store, slug)? {
        None => LinkTarget::Home,
        Some(location) if !location.has_jam_link() => LinkTarget::Detail(location.slug()),
        Some(location) => LinkTarget::External(location.jam_link),
    })
}
