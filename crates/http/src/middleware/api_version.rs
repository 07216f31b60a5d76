//! # API バージョン検証ミドルウェア
//!
//! `api-version` ヘッダーがサーバーのバージョンと一致するかを検証する。
//! ヘッダーがない、または空の場合はバージョン `1` とみなす。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! Router::new()
//!     .route("/articles", get(list_articles))
//!     .layer(from_fn_with_state(ApiVersionState::new("1"), require_api_version))
//! ```

use std::sync::Arc;

use apibase_domain::Envelope;
use apibase_shared::ErrorCode;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::response::Reply;

/// バージョンを指定するヘッダー名
pub const API_VERSION_HEADER: &str = "api-version";

/// ヘッダー省略時のバージョン
pub const DEFAULT_API_VERSION: &str = "1";

/// 不一致のときのメッセージ
pub const UNSUPPORTED_API_VERSION_MESSAGE: &str = "Unsupported API Version.";

/// API バージョン検証ミドルウェアの状態
#[derive(Debug, Clone)]
pub struct ApiVersionState {
    supported: Arc<str>,
}

impl ApiVersionState {
    pub fn new(supported: impl AsRef<str>) -> Self {
        Self {
            supported: Arc::from(supported.as_ref()),
        }
    }

    pub fn supported(&self) -> &str {
        &self.supported
    }
}

/// API バージョン検証ミドルウェア
///
/// 一致しない場合は後続のハンドラを呼ばず、400 のエラーエンベロープを返す。
pub async fn require_api_version(
    State(state): State<ApiVersionState>,
    request: Request,
    next: Next,
) -> Response {
    if requested_version(request.headers()) == Some(state.supported()) {
        return next.run(request).await;
    }

    tracing::debug!(
        requested = ?request.headers().get(API_VERSION_HEADER),
        supported = state.supported(),
        "サポートしていない API バージョンです"
    );
    Reply(Envelope::error(
        400,
        ErrorCode::WrongArguments,
        UNSUPPORTED_API_VERSION_MESSAGE,
    ))
    .into_response()
}

/// ヘッダーから要求バージョンを読み取る
///
/// 文字列として読めない値は `None` を返す（どのバージョンとも一致しない）。
fn requested_version(headers: &HeaderMap) -> Option<&str> {
    let Some(value) = headers.get(API_VERSION_HEADER) else {
        return Some(DEFAULT_API_VERSION);
    };

    value.to_str().ok().map(|version| match version.trim() {
        "" => DEFAULT_API_VERSION,
        version => version,
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{self, Body},
        http::{Method, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::*;

    async fn dummy_handler() -> impl IntoResponse {
        StatusCode::OK
    }

    fn create_test_app(supported: &str) -> Router {
        Router::new()
            .route("/test", get(dummy_handler))
            .layer(from_fn_with_state(
                ApiVersionState::new(supported),
                require_api_version,
            ))
    }

    fn request(version: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder()
            .method(Method::GET)
            .uri("/test");
        if let Some(version) = version {
            builder = builder.header(API_VERSION_HEADER, version);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("1"))]
    #[case(Some(" 1 "))]
    #[tokio::test]
    async fn test_バージョン1は通過する(#[case] version: Option<&str>) {
        // Given
        let sut = create_test_app("1");

        // When
        let response = sut.oneshot(request(version)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_一致しないバージョンは400のエラーエンベロープを返す() {
        // Given
        let sut = create_test_app("1");

        // When
        let response = sut.oneshot(request(Some("2"))).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": {
                    "code": "400-001",
                    "http_code": 400,
                    "message": "Unsupported API Version."
                }
            })
        );
    }

    #[tokio::test]
    async fn test_サーバーが2のときヘッダー省略は拒否される() {
        // Given
        let sut = create_test_app("2");

        // When
        let accepted = sut.clone().oneshot(request(Some("2"))).await.unwrap();
        let rejected = sut.oneshot(request(None)).await.unwrap();

        // Then
        assert_eq!(accepted.status(), StatusCode::OK);
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    }
}
