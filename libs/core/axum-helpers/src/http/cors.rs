use axum::http::{HeaderValue, Method, header::InvalidHeaderValue};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// CORS layer restricted to `allowed_origins`, with credentials allowed.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// CORS layer accepting any origin, method and header.
///
/// Credentials cannot be combined with a wildcard origin, so none are allowed.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

/// Pick a CORS layer from configured origins.
///
/// An empty list or a `*` entry yields [`create_permissive_cors_layer`].
pub fn cors_layer_from_origins(origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return Ok(create_permissive_cors_layer());
    }

    let values = origins
        .iter()
        .map(|o| o.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(create_cors_layer(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    async fn allow_origin_for(layer: CorsLayer, origin: &str) -> Option<String> {
        let app = Router::new().route("/", get(|| async { "ok" })).layer(layer);
        let request = Request::builder()
            .uri("/")
            .header("origin", origin)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_wildcard_allows_any_origin() {
        let layer = cors_layer_from_origins(&["*".to_string()]).unwrap();
        assert_eq!(
            allow_origin_for(layer, "https://shop.example.com").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_origin_list_is_enforced() {
        let origins = vec!["http://localhost:3000".to_string()];
        let allowed = cors_layer_from_origins(&origins).unwrap();
        assert_eq!(
            allow_origin_for(allowed, "http://localhost:3000").await.as_deref(),
            Some("http://localhost:3000")
        );

        let denied = cors_layer_from_origins(&origins).unwrap();
        assert!(allow_origin_for(denied, "https://evil.example").await.is_none());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        assert!(cors_layer_from_origins(&["bad\norigin".to_string()]).is_err());
    }
}
