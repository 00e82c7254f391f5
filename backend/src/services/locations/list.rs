//! `GET /api/locations?page&limit`: one page of the listing, newest update first.

use crate::error::ApiError;
use crate::state::{AppState, MAX_PAGE_LIMIT};
use crate::store::LocationStore;
use actix_web::{web, HttpResponse};
use common::responses::LocationPage;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<u32>,
    limit: Option<u32>,
}

pub(crate) async fn process(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = list_locations(
        state.store.as_ref(),
        query.page.unwrap_or(1),
        query.limit.unwrap_or(state.page_limit),
    )?;
    Ok(HttpResponse::Ok().json(page))
}

/// Fetches 1-based page `page`. `has_more` is true while `page * limit` is
/// short of the total.
pub fn list_locations(
    store: &dyn LocationStore,
    page: u32,
    limit: u32,
) -> Result<LocationPage, ApiError> {
    if page == 0 {
        return Err(ApiError::Validation("page must be at least 1".to_string()));
    }
    if limit == 0 || limit > MAX_PAGE_LIMIT {
        return Err(ApiError::Validation(format!(
            "limit must be between 1 and {MAX_PAGE_LIMIT}"
        )));
    }

    let offset = u64::from(page - 1) * u64::from(limit);
    let (locations, total) = store
        .list_page(offset, limit.into())
        .map_err(ApiError::storage("Failed to fetch locations"))?;

    Ok(LocationPage {
        locations,
        has_more: u64::from(page) * u64::from(limit) < total,
    })
}

#[cfg(test)]
mod tests {
    use crate::test_support::{ana, memory_state, seed};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::responses::{ErrorResponse, LocationPage};

    fn seeded_state(count: u32) -> crate::state::AppState {
        let state = memory_state();
        for minute in 0..count {
            seed(&state, &format!("Spot {minute}"), "https://example.com/j", &ana(), minute);
        }
        state
    }

    #[actix_web::test]
    async fn pages_through_twenty_five_records() {
        let app = test::init_service(App::new().configure(crate::configure_api(seeded_state(25)))).await;

        let req = test::TestRequest::get().uri("/api/locations?page=1&limit=10").to_request();
        let page: LocationPage = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page.locations.len(), 10);
        assert!(page.has_more);
        assert_eq!(page.locations[0].name, "Spot 24");

        let req = test::TestRequest::get().uri("/api/locations?page=3&limit=10").to_request();
        let page: LocationPage = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page.locations.len(), 5);
        assert!(!page.has_more);
        assert_eq!(page.locations[4].name, "Spot 0");
    }

    #[actix_web::test]
    async fn defaults_to_first_page_of_configured_size() {
        let app = test::init_service(App::new().configure(crate::configure_api(seeded_state(12)))).await;
        let req = test::TestRequest::get().uri("/api/locations").to_request();
        let page: LocationPage = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page.locations.len(), 10);
        assert!(page.has_more);
    }

    #[actix_web::test]
    async fn exact_multiple_has_no_more() {
        let app = test::init_service(App::new().configure(crate::configure_api(seeded_state(20)))).await;
        let req = test::TestRequest::get().uri("/api/locations?page=2&limit=10").to_request();
        let page: LocationPage = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page.locations.len(), 10);
        assert!(!page.has_more);
    }

    #[actix_web::test]
    async fn rejects_bad_paging_parameters() {
        let app = test::init_service(App::new().configure(crate::configure_api(memory_state()))).await;
        for uri in [
            "/api/locations?page=0",
            "/api/locations?limit=0",
            "/api/locations?limit=101",
            "/api/locations?page=abc",
        ] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body: ErrorResponse = test::read_body_json(resp).await;
            assert!(!body.error.is_empty());
        }
    }
}
