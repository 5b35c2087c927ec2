//! Axum router configuration with middleware.
//!
//! Routes:
//! - POST /api/message
//! - GET  /api/history
//! - GET  /health
//!
//! Middleware: CORS (single allowed origin) and request tracing.

use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
///
/// Fails only if the configured origin is not a valid header value.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let origin = HeaderValue::from_str(&state.config.allowed_origin)
        .with_context(|| format!("invalid allowed origin '{}'", state.config.allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/message", post(handlers::message::send_message))
        .route("/history", get(handlers::history::get_history));

    let router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

/// GET /health - Simple liveness check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::Json;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use parley_types::config::RelayConfig;

    /// Fake generation service: echoes, except "fail" which returns 500.
    async fn spawn_upstream() -> String {
        let app = Router::new().route(
            "/chat",
            post(|Json(body): Json<Value>| async move {
                let message = body["message"].as_str().unwrap_or_default().to_string();
                if message == "fail" {
                    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"})))
                } else if message == "hi" {
                    (StatusCode::OK, Json(json!({"response": "hello"})))
                } else {
                    (StatusCode::OK, Json(json!({"response": format!("echo: {message}")})))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/chat")
    }

    fn test_state(upstream_url: String, max_history_size: usize) -> AppState {
        AppState::new(RelayConfig {
            upstream_url,
            max_history_size,
            upstream_timeout_secs: 2,
            ..Default::default()
        })
        .unwrap()
    }

    fn post_message(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/message")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_history() -> Request<Body> {
        Request::builder()
            .uri("/api/history")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_message_success_returns_reply_and_records_history() {
        let state = test_state(spawn_upstream().await, 20);
        let app = build_router(state).unwrap();

        let resp = app.clone().oneshot(post_message(r#"{"message": "hi"}"#)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"response": "hello"}));

        let resp = app.oneshot(get_history()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!([
                {"role": "user", "text": "hi"},
                {"role": "ai", "text": "hello"}
            ])
        );
    }

    #[tokio::test]
    async fn test_message_validation_errors_return_400_without_history() {
        let state = test_state(spawn_upstream().await, 20);
        let app = build_router(state.clone()).unwrap();

        for body in [
            r#"{"message": ""}"#,
            r#"{"message": "   "}"#,
            r#"{}"#,
            r#"{"message": null}"#,
            r#"{"message": 42}"#,
            "not json",
        ] {
            let resp = app.clone().oneshot(post_message(body)).await.unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(
                body_json(resp).await,
                json!({"response": "Message cannot be empty."})
            );
        }

        assert!(state.relay.handle_history().is_empty());
    }

    #[tokio::test]
    async fn test_message_upstream_failure_returns_500() {
        let state = test_state(spawn_upstream().await, 20);
        let app = build_router(state).unwrap();

        let resp = app.clone().oneshot(post_message(r#"{"message": "fail"}"#)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(resp).await,
            json!({"response": "Error connecting to AI service."})
        );

        let resp = app.oneshot(get_history()).await.unwrap();
        assert_eq!(
            body_json(resp).await,
            json!([
                {"role": "user", "text": "fail"},
                {"role": "error", "text": "Error connecting to AI service."}
            ])
        );
    }

    #[tokio::test]
    async fn test_message_unreachable_upstream_returns_500() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let state = test_state(format!("http://{addr}/chat"), 20);
        let app = build_router(state.clone()).unwrap();

        let resp = app.oneshot(post_message(r#"{"message": "hi"}"#)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let history = state.relay.handle_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].text, "Error connecting to AI service.");
    }

    #[tokio::test]
    async fn test_history_is_capped() {
        let state = test_state(spawn_upstream().await, 3);
        let app = build_router(state).unwrap();

        for i in 0..3 {
            let body = format!(r#"{{"message": "m{i}"}}"#);
            let resp = app.clone().oneshot(post_message(&body)).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let resp = app.oneshot(get_history()).await.unwrap();
        assert_eq!(
            body_json(resp).await,
            json!([
                {"role": "ai", "text": "echo: m1"},
                {"role": "user", "text": "m2"},
                {"role": "ai", "text": "echo: m2"}
            ])
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_configured_origin() {
        let state = test_state(spawn_upstream().await, 20);
        let app = build_router(state).unwrap();

        let req = Request::builder()
            .method("OPTIONS")
            .uri("/api/message")
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:3000")
        );
    }

    #[tokio::test]
    async fn test_cors_ignores_other_origins() {
        let state = test_state(spawn_upstream().await, 20);
        let app = build_router(state).unwrap();

        let req = Request::builder()
            .uri("/api/history")
            .header("origin", "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get("access-control-allow-origin").is_none());
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = test_state(spawn_upstream().await, 20);
        let app = build_router(state).unwrap();

        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "ok");
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let state = AppState::new(RelayConfig {
            allowed_origin: "http://bad\norigin".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert!(build_router(state).is_err());
    }
}
