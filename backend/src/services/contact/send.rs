use crate::auth::Authenticated;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::ContactAdminRequest;
use common::responses::SuccessResponse;

/// Longest message relayed to the webhook, in characters.
pub const MAX_MESSAGE_LEN: usize = 2000;

pub(crate) async fn process(
    state: web::Data<AppState>,
    Authenticated(user): Authenticated,
    payload: web::Json<ContactAdminRequest>,
) -> Result<HttpResponse, ApiError> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(ApiError::Validation("Message is required".to_string()));
    }
    if message.chars().count() > MAX_MESSAGE_LEN {
        return Err(ApiError::Validation(format!(
            "Message must be at most {MAX_MESSAGE_LEN} characters"
        )));
    }

    state.contact.forward(&user, message).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use crate::services::contact::ContactWebhook;
    use crate::test_support::{ana, memory_state, signed_in};
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse, HttpServer};
    use common::responses::{ErrorResponse, SuccessResponse};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use url::Url;

    /// Local stand-in for the chat webhook; records every JSON body and
    /// answers with `status`.
    fn spawn_webhook(status: StatusCode) -> (Url, Arc<Mutex<Vec<Value>>>, actix_web::dev::ServerHandle) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = web::Data::from(received.clone());
        let server = HttpServer::new(move || {
            App::new().app_data(sink.clone()).route(
                "/hook",
                web::post().to(move |sink: web::Data<Mutex<Vec<Value>>>, body: web::Json<Value>| async move {
                    sink.lock().unwrap().push(body.into_inner());
                    HttpResponse::build(status).finish()
                }),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        let url = Url::parse(&format!("http://{addr}/hook")).unwrap();
        (url, received, handle)
    }

    fn contact(message: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/contact-admin")
            .set_json(json!({ "message": message }))
    }

    #[actix_web::test]
    async fn relays_message_to_webhook() {
        let (url, received, handle) = spawn_webhook(StatusCode::NO_CONTENT);
        let mut state = memory_state();
        state.contact = ContactWebhook::new(Some(url)).unwrap();
        let app = test::init_service(App::new().configure(crate::configure_api(state))).await;

        let req = signed_in(contact("  The Coffee Shop link is broken "), &ana()).to_request();
        let done: SuccessResponse = test::call_and_read_body_json(&app, req).await;
        assert!(done.success);

        let bodies = received.lock().unwrap().clone();
        assert_eq!(
            bodies,
            vec![json!({
                "message": "```Message from Ana (ana@example.com):```\n\nThe Coffee Shop link is broken"
            })]
        );
        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn webhook_failure_is_reported() {
        let (url, _received, handle) = spawn_webhook(StatusCode::BAD_GATEWAY);
        let mut state = memory_state();
        state.contact = ContactWebhook::new(Some(url)).unwrap();
        let app = test::init_service(App::new().configure(crate::configure_api(state))).await;

        let resp = test::call_service(&app, signed_in(contact("hello"), &ana()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Failed to send message");
        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn blank_message_and_missing_session_are_rejected() {
        let app = test::init_service(App::new().configure(crate::configure_api(memory_state()))).await;

        let resp = test::call_service(&app, signed_in(contact("   "), &ana()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(&app, contact("hello").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
