//! # Contact Service Module
//!
//! Lets a signed-in user send a short message to the site admin. The message
//! is relayed to a chat webhook (`CONTACT_WEBHOOK_URL`) as a JSON
//! `{"message": ...}` POST.

mod send;

use crate::error::ApiError;
use actix_web::web::{post, resource};
use actix_web::Resource;
use common::model::session::SessionUser;
use log::{error, info};
use serde::Serialize;
use std::time::Duration;
use url::Url;

const API_PATH: &str = "/api/contact-admin";

/// *   **`POST /api/contact-admin`** → `send::process`: body `{message}`,
///     session required, answers `{success: true}` once the webhook accepted it.
pub fn configure_routes() -> Resource {
    resource(API_PATH).route(post().to(send::process))
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    message: &'a str,
}

/// Outbound webhook client. Cloned into every worker with the app state; the
/// underlying `reqwest::Client` shares its connection pool across clones.
#[derive(Clone)]
pub struct ContactWebhook {
    client: reqwest::Client,
    url: Option<Url>,
}

impl ContactWebhook {
    /// Fails only when the HTTP client cannot be built, e.g. when the TLS
    /// backend does not initialize.
    pub fn new(url: Option<Url>) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, url })
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Text posted to the webhook: a code-formatted header naming the sender,
    /// a blank line, then the message verbatim.
    pub fn format_message(from: &SessionUser, message: &str) -> String {
        format!(
            "```Message from {} ({}):```\n\n{}",
            from.name, from.email, message
        )
    }

    pub async fn forward(&self, from: &SessionUser, message: &str) -> Result<(), ApiError> {
        let Some(url) = &self.url else {
            return Err(ApiError::Upstream(
                "Contacting the admin is not configured on this server".to_string(),
            ));
        };

        let text = Self::format_message(from, message);
        let response = self
            .client
            .post(url.clone())
            .json(&WebhookPayload { message: &text })
            .send()
            .await
            .map_err(|e| {
                error!("Contact webhook request failed: {e}");
                ApiError::Upstream("Failed to send message".to_string())
            })?;

        if !response.status().is_success() {
            error!("Contact webhook answered {}", response.status());
            return Err(ApiError::Upstream("Failed to send message".to_string()));
        }
        info!("Forwarded a message from {} to the admin", from.email);
        Ok(())
    }
}
