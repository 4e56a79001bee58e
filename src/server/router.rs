use std::any::Any;

use axum::extract::DefaultBodyLimit;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use super::error::ApiError;
use super::handlers::{health, simulate, sms_demo};
use super::state::AppState;

/// Build the complete Axum router with all routes
pub fn build_router(state: AppState) -> Router {
    with_transport_layers(
        Router::new()
            .nest("/api", api_router())
            .route("/health", get(health))
            .with_state(state),
    )
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/simulate", post(simulate))
        .route("/sms-demo", post(sms_demo))
}

/// Layers shared by every route: no request body cap (project descriptions
/// have no length limit) and panics mapped to the JSON 500 body.
pub(crate) fn with_transport_layers(router: Router) -> Router {
    router
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::custom(panic_response))
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");

    ApiError::internal(
        "Internal server error",
        anyhow::anyhow!("handler panicked: {}", detail),
    )
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn explode() -> &'static str {
        panic!("scorer invariant broken")
    }

    #[tokio::test]
    async fn test_panic_maps_to_json_500() {
        let router = with_transport_layers(Router::new().route("/boom", get(explode)));
        let request = Request::builder().uri("/boom").body(Body::empty()).unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }
}
