//! Routes and handlers

use crate::error::ServerError;
use crate::AppState;
use app_core::AnalyticsEvent;
use app_ui::Context;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::SecondsFormat;
use serde_json::{json, Value};
use std::collections::HashMap;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Optional caller identity
pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");
/// Mode the descriptor was composed for
pub const UI_MODE_HEADER: HeaderName = HeaderName::from_static("x-ui-mode");
/// Descriptor generation time
pub const GENERATED_AT_HEADER: HeaderName = HeaderName::from_static("x-generated-at");

/// Router with every endpoint, CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, USER_ID_HEADER])
        .expose_headers([UI_MODE_HEADER, GENERATED_AT_HEADER]);

    Router::new()
        .route("/api/ui-config", get(ui_config))
        .route("/api/products/:id", get(product_detail))
        .route("/api/analytics", post(analytics))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /api/ui-config`: compose the descriptor for `screen`
///
/// Every query parameter other than `screen` is passed to the screen.
async fn ui_config(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(mut params): Query<HashMap<String, String>>,
) -> Response {
    let route = params
        .remove("screen")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "/".to_string());
    let user_id = headers
        .get(&USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let ctx = Context::new(route, state.clock.now())
        .with_params(params)
        .with_user(user_id);
    let mode = state.mode_for(&ctx);

    info!(
        screen = %ctx.route,
        %mode,
        user = ctx.user_id.as_deref().unwrap_or(""),
        "UI config request"
    );

    let descriptor = state.composer.compose_context(&ctx, mode);
    if let Err(e) = descriptor.validate() {
        warn!(screen = %ctx.route, %mode, error = %e, "Serving descriptor that failed validation");
    }

    let generated_at = HeaderValue::from_str(&descriptor.metadata.timestamp).ok();
    let mut response = Json(descriptor).into_response();
    let response_headers = response.headers_mut();
    response_headers.insert(UI_MODE_HEADER, HeaderValue::from_static(mode.as_str()));
    if let Some(value) = generated_at {
        response_headers.insert(GENERATED_AT_HEADER, value);
    }
    response
}

/// `GET /api/products/:id`: catalog lookup, sentinel on a miss
async fn product_detail(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    Json(state.catalog.lookup(&id))
}

/// `POST /api/analytics`: record a JSON object event
async fn analytics(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, ServerError> {
    let event: AnalyticsEvent = serde_json::from_slice(&body)
        .map_err(|e| ServerError::BadRequest(format!("Invalid JSON: {}", e)))?;
    state.analytics.record(event).await?;
    Ok(Json(json!({ "status": "ok" })))
}

/// `GET /health`
async fn health(State(state): State<AppState>) -> Json<Value> {
    let now = state.clock.now();
    let ctx = Context::new("/", now);
    Json(json!({
        "status": "healthy",
        "timestamp": now.to_rfc3339_opts(SecondsFormat::Secs, true),
        "mode": state.mode_for(&ctx),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::{AnalyticsError, AnalyticsSink, FixedClock, StaticCatalog};
    use app_ui::Mode;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use mockall::mock;
    use std::sync::Arc;
    use tower::ServiceExt;

    mock! {
        pub Sink {}

        #[async_trait]
        impl AnalyticsSink for Sink {
            async fn record(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError>;
        }
    }

    fn state_at(hour: u32, sink: MockSink) -> AppState {
        let clock = FixedClock::at(hour, 0).unwrap();
        AppState::new(Arc::new(StaticCatalog::new()), Arc::new(clock), Arc::new(sink))
    }

    fn quiet_sink() -> MockSink {
        let mut sink = MockSink::new();
        sink.expect_record().never();
        sink
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    // =========================================================================
    // UI Config Tests
    // =========================================================================

    #[tokio::test]
    async fn test_ui_config_defaults_to_home() {
        let app = build_router(state_at(10, quiet_sink()));
        let response = app.oneshot(get_request("/api/ui-config")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[&UI_MODE_HEADER], "day");
        assert_eq!(
            response.headers()[&GENERATED_AT_HEADER],
            "2025-01-15T10:00:00Z"
        );
        let json = body_json(response).await;
        assert_eq!(json["screen_id"], "home");
        assert_eq!(json["metadata"]["mode"], "day");
    }

    #[tokio::test]
    async fn test_ui_config_mode_override() {
        let state = state_at(10, quiet_sink()).with_mode_override(Some(Mode::Night));
        let app = build_router(state);
        let response = app
            .oneshot(get_request("/api/ui-config?screen=/search"))
            .await
            .unwrap();

        assert_eq!(response.headers()[&UI_MODE_HEADER], "night");
        let json = body_json(response).await;
        assert_eq!(json["screen_id"], "search");
        assert_eq!(json["navigation"]["bottom_nav"][1]["label"], "Explore");
        assert_eq!(json["navigation"]["bottom_nav"][1]["is_active"], true);
    }

    #[tokio::test]
    async fn test_ui_config_product_param() {
        let app = build_router(state_at(15, quiet_sink()));
        let request = Request::builder()
            .uri("/api/ui-config?screen=/product&id=prod_2")
            .header("X-User-ID", "user-7")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        let json = body_json(response).await;
        assert_eq!(json["screen_id"], "product");
        assert_eq!(json["metadata"]["mode"], "afternoon");
        let info = &json["components"][1];
        assert_eq!(info["id"], "product-info");
        assert_eq!(info["children"][0]["props"]["title"], "Silk Evening Dress");
    }

    // =========================================================================
    // Catalog and Health Tests
    // =========================================================================

    #[tokio::test]
    async fn test_product_detail() {
        let app = build_router(state_at(10, quiet_sink()));
        let response = app.oneshot(get_request("/api/products/prod_1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["name"], "Premium Leather Jacket");
    }

    #[tokio::test]
    async fn test_product_detail_sentinel() {
        let app = build_router(state_at(10, quiet_sink()));
        let response = app.oneshot(get_request("/api/products/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["id"], "nope");
        assert_eq!(json["name"], "Unknown Product");
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(state_at(21, quiet_sink()));
        let response = app.oneshot(get_request("/health")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["mode"], "night");
        assert_eq!(json["timestamp"], "2025-01-15T21:00:00Z");
    }

    // =========================================================================
    // Analytics Tests
    // =========================================================================

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analytics")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_analytics_records_event() {
        let mut sink = MockSink::new();
        sink.expect_record()
            .withf(|event| event.name() == Some("tap"))
            .times(1)
            .returning(|_| Ok(()));
        let app = build_router(state_at(10, sink));

        let response = app
            .oneshot(post_json(r#"{"event":"tap","target":"buy-button"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_analytics_rejects_malformed_json() {
        let app = build_router(state_at(10, quiet_sink()));
        let response = app.oneshot(post_json("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analytics_rejects_non_object() {
        let app = build_router(state_at(10, quiet_sink()));
        let response = app.oneshot(post_json("[1, 2, 3]")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analytics_wrong_method() {
        let app = build_router(state_at(10, quiet_sink()));
        let response = app.oneshot(get_request("/api/analytics")).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_analytics_sink_failure() {
        let mut sink = MockSink::new();
        sink.expect_record()
            .returning(|_| Err(AnalyticsError::Unavailable("down".into())));
        let app = build_router(state_at(10, sink));
        let response = app.oneshot(post_json(r#"{"event":"tap"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    // =========================================================================
    // CORS Tests
    // =========================================================================

    #[tokio::test]
    async fn test_cors_preflight() {
        let app = build_router(state_at(10, quiet_sink()));
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/ui-config")
            .header("Origin", "https://shop.example")
            .header("Access-Control-Request-Method", "GET")
            .header("Access-Control-Request-Headers", "x-user-id")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        let methods = response.headers()["access-control-allow-methods"]
            .to_str()
            .unwrap();
        assert!(methods.contains("DELETE"));
    }
}
