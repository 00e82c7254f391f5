//! Shared application state handed to every handler as `web::Data<AppState>`.
//!
//! Built once in `main` from the [`Config`]; each actix worker clones it,
//! which only bumps reference counts.

use crate::auth::AdminPolicy;
use crate::config::Config;
use crate::services::contact::ContactWebhook;
use crate::store::LocationStore;
use std::sync::Arc;

/// Largest page a client may request.
pub const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Clone)]
pub struct AppState {
    /// Handle to the `locations` collection.
    pub store: Arc<dyn LocationStore>,
    pub admin: AdminPolicy,
    pub contact: ContactWebhook,
    /// Page size applied when `limit` is omitted.
    pub page_limit: u32,
}

impl AppState {
    pub fn new(store: Arc<dyn LocationStore>, config: &Config) -> reqwest::Result<Self> {
        Ok(Self {
            store,
            admin: AdminPolicy::new(config.admin_email.clone()),
            contact: ContactWebhook::new(config.contact_webhook.clone())?,
            page_limit: config.page_limit.clamp(1, MAX_PAGE_LIMIT),
        })
    }
}
