//! CORS layer built from server configuration.

use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ServerConfig;

/// Builds the CORS layer for the configured origins.
///
/// `*` allows any origin. Origins that are not valid header values are
/// skipped with a warning. An empty list allows no cross-origin requests.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let configured = config.cors_origins_list();
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    if configured.iter().any(|origin| origin == "*") {
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = configured
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::routing::post;
    use axum::Router;
    use http::header::{
        ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
    };
    use http::Request;
    use tower::ServiceExt;

    fn router(origins: &str) -> Router {
        let config = ServerConfig {
            cors_origins: Some(origins.to_string()),
            ..Default::default()
        };
        Router::new()
            .route("/api/estimate", post(|| async { "ok" }))
            .layer(cors_layer(&config))
    }

    async fn preflight(app: Router, origin: &str) -> Option<String> {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/estimate")
            .header(ORIGIN, origin)
            .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn preflight_from_configured_origin_is_allowed() {
        let app = router("http://localhost:5173, http://localhost:3000");
        assert_eq!(
            preflight(app, "http://localhost:5173").await.as_deref(),
            Some("http://localhost:5173")
        );
    }

    #[tokio::test]
    async fn preflight_from_other_origin_gets_no_allow_header() {
        let app = router("http://localhost:5173");
        assert_eq!(preflight(app, "http://evil.example").await, None);
    }

    #[tokio::test]
    async fn wildcard_allows_any_origin() {
        let app = router("*");
        assert_eq!(
            preflight(app, "http://anywhere.example").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn invalid_origins_are_skipped() {
        let app = router("bad\u{7f}origin, http://localhost:5173");
        assert_eq!(
            preflight(app, "http://localhost:5173").await.as_deref(),
            Some("http://localhost:5173")
        );
    }
}
