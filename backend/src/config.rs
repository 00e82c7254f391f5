//! Server configuration, read from the command line with environment fallbacks.

use clap::Parser;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "jamspots", about = "Share jam session links for named locations")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "JAMSPOTS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "JAMSPOTS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite file holding the `locations` collection. Created on first start.
    #[arg(long, env = "JAMSPOTS_DATABASE", default_value = "jamspots.sqlite")]
    pub database: PathBuf,

    /// The single email granted admin rights (delete/edit any location).
    #[arg(long, env = "ADMIN_EMAIL")]
    pub admin_email: Option<String>,

    /// Endpoint that receives "contact admin" messages as JSON.
    #[arg(long, env = "CONTACT_WEBHOOK_URL")]
    pub contact_webhook: Option<Url>,

    /// Page size used when a listing request omits `limit`.
    #[arg(long, env = "JAMSPOTS_PAGE_LIMIT", default_value_t = 10)]
    pub page_limit: u32,
}

impl Config {
    pub fn bind_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
