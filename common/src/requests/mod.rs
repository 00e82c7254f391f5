//! JSON bodies the browser sends to the `/api` endpoints.
//!
//! Identity fields are deliberately absent: the server takes the creator and
//! editor from the session, never from the payload.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/locations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub jam_link: String,
}

/// Body of `PATCH /api/locations/{id}`. An empty link clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationRequest {
    pub jam_link: String,
}

/// Body of `POST /api/locations/check-duplicate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckDuplicateRequest {
    #[serde(default)]
    pub name: String,
}

/// Body of `POST /api/contact-admin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactAdminRequest {
    #[serde(default)]
    pub message: String,
}
