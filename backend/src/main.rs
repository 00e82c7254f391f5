mod auth;
mod config;
mod error;
mod qr;
mod services;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::SqliteLocationStore;
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::sync::Arc;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Largest JSON body accepted by the API.
const JSON_LIMIT: usize = 64 * 1024;

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

/// Registers the shared state, extractor error handlers and every API and
/// page route. Used by `main` and by the handler tests.
pub(crate) fn configure_api(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(
                web::JsonConfig::default()
                    .limit(JSON_LIMIT)
                    .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
            )
            .app_data(
                web::QueryConfig::default()
                    .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
            )
            .service(services::locations::configure_routes())
            .service(services::auth::configure_routes())
            .service(services::contact::configure_routes())
            .service(services::pages::configure_routes());
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    let store = SqliteLocationStore::open(&config.database).map_err(std::io::Error::other)?;
    info!("Using database {}", config.database.display());

    let state = AppState::new(Arc::new(store), &config).map_err(std::io::Error::other)?;
    if state.admin.is_configured() {
        info!("Admin override enabled");
    }
    if !state.contact.is_configured() {
        warn!("CONTACT_WEBHOOK_URL is not set; contact-admin messages will be refused");
    }

    info!("Server running at {}", config.bind_url());

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure_api(state.clone()))
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
