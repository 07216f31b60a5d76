//! # CORS
//!
//! 任意のオリジンからの API 呼び出しを許可する。

use axum::http::{HeaderName, Method, header};
use tower_http::cors::{Any, CorsLayer};

use super::api_version::API_VERSION_HEADER;

/// API 用の CORS レイヤー
///
/// - オリジン: すべて
/// - メソッド: HEAD, GET, POST, PUT, PATCH, DELETE
/// - ヘッダー: Content-Type, Accept, Authorization, X-Requested-With, Application, api-version
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::HEAD,
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("application"),
            HeaderName::from_static(API_VERSION_HEADER),
        ])
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    fn create_test_app() -> Router {
        Router::new()
            .route("/test", get(|| async { StatusCode::OK }))
            .layer(cors_layer())
    }

    #[tokio::test]
    async fn test_プリフライトに許可メソッドとヘッダーを返す() {
        // Given
        let sut = create_test_app();
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/test")
            .header(header::ORIGIN, "https://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
            .body(Body::empty())
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
        assert!(methods.contains("PATCH"), "methods: {methods}");
        assert!(methods.contains("DELETE"), "methods: {methods}");
        let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS].to_str().unwrap();
        assert!(allowed.contains("authorization"), "headers: {allowed}");
        assert!(allowed.contains("x-requested-with"), "headers: {allowed}");
    }

    #[tokio::test]
    async fn test_通常のリクエストにallow_originを付ける() {
        // Given
        let sut = create_test_app();
        let request = Request::builder()
            .uri("/test")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
