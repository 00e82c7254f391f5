//! Thin wrappers over the `/api` endpoints.
//!
//! Every call resolves to `Result<T, String>`; the error is the server's
//! `{error}` message when it sent one, so views can show it verbatim.

use common::model::location::Location;
use common::requests::{
    CheckDuplicateRequest, ContactAdminRequest, CreateLocationRequest, UpdateLocationRequest,
};
use common::responses::{
    AdminCheck, DuplicateCheck, ErrorResponse, LocationDetail, LocationPage, SearchResults,
    SessionInfo, SuccessResponse,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const LOCATIONS: &str = "/api/locations";

async fn read<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, String> {
    if response.ok() {
        return response.json::<T>().await.map_err(|e| e.to_string());
    }
    match response.json::<ErrorResponse>().await {
        Ok(body) if !body.error.is_empty() => Err(body.error),
        _ => Err(format!("{fallback} ({})", response.status())),
    }
}

fn network(e: gloo_net::Error) -> String {
    format!("Network error: {e}")
}

pub async fn fetch_page(page: u32, limit: u32) -> Result<LocationPage, String> {
    let response = Request::get(LOCATIONS)
        .query([("page", page.to_string()), ("limit", limit.to_string())])
        .send()
        .await
        .map_err(network)?;
    read(response, "Failed to fetch locations").await
}

pub async fn search(query: &str) -> Result<Vec<Location>, String> {
    let response = Request::get(&format!("{LOCATIONS}/search"))
        .query([("q", query)])
        .send()
        .await
        .map_err(network)?;
    read::<SearchResults>(response, "Failed to search locations")
        .await
        .map(|found| found.locations)
}

pub async fn create(name: &str, jam_link: &str) -> Result<Location, String> {
    let body = CreateLocationRequest {
        name: name.to_string(),
        jam_link: jam_link.to_string(),
    };
    let response = Request::post(LOCATIONS)
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(network)?;
    read(response, "Failed to add location").await
}

pub async fn check_duplicate(name: &str) -> Result<bool, String> {
    let body = CheckDuplicateRequest {
        name: name.to_string(),
    };
    let response = Request::post(&format!("{LOCATIONS}/check-duplicate"))
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(network)?;
    read::<DuplicateCheck>(response, "Failed to check the name")
        .await
        .map(|check| check.exists)
}

pub async fn update_link(id: &str, jam_link: &str) -> Result<Location, String> {
    let body = UpdateLocationRequest {
        jam_link: jam_link.to_string(),
    };
    let response = Request::patch(&format!("{LOCATIONS}/{id}"))
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(network)?;
    read(response, "Failed to update the jam link").await
}

pub async fn delete(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{LOCATIONS}/{id}"))
        .send()
        .await
        .map_err(network)?;
    read::<SuccessResponse>(response, "Failed to delete location")
        .await
        .map(|_| ())
}

/// `Ok(None)` when the slug does not resolve.
pub async fn by_slug(slug: &str) -> Result<Option<LocationDetail>, String> {
    let response = Request::get(&format!("{LOCATIONS}/slug/{slug}"))
        .send()
        .await
        .map_err(network)?;
    if response.status() == 404 {
        return Ok(None);
    }
    read(response, "Failed to fetch location").await.map(Some)
}

pub async fn session() -> Result<SessionInfo, String> {
    let response = Request::get("/api/auth/session")
        .send()
        .await
        .map_err(network)?;
    read(response, "Failed to read the session").await
}

pub async fn check_admin() -> Result<bool, String> {
    let response = Request::get("/api/auth/check-admin")
        .send()
        .await
        .map_err(network)?;
    read::<AdminCheck>(response, "Failed to check admin status")
        .await
        .map(|check| check.is_admin)
}

pub async fn contact_admin(message: &str) -> Result<(), String> {
    let body = ContactAdminRequest {
        message: message.to_string(),
    };
    let response = Request::post("/api/contact-admin")
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(network)?;
    read::<SuccessResponse>(response, "Failed to send message")
        .await
        .map(|_| ())
}
