//! # Reply
//!
//! [`Envelope`] を axum のレスポンスに変換する。

use apibase_domain::Envelope;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// エンベロープの JSON レスポンス
///
/// ステータスはエンベロープのものをそのまま使う。HTTP として不正な値の場合のみ 500 にする。
#[derive(Debug, Clone, PartialEq)]
pub struct Reply(pub Envelope);

impl From<Envelope> for Reply {
    fn from(envelope: Envelope) -> Self {
        Self(envelope)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let (status, body) = self.0.into_parts();
        let status = StatusCode::from_u16(status).unwrap_or_else(|_| {
            tracing::error!(status, "不正なステータスコードです");
            StatusCode::INTERNAL_SERVER_ERROR
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use apibase_shared::ErrorCode;
    use axum::body;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_エンベロープのステータスとボディを返す() {
        let envelope = Envelope::error(403, ErrorCode::Forbidden, "Forbidden");

        let response = Reply(envelope).into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "403-001");
        assert_eq!(json["error"]["http_code"], 403);
    }

    #[test]
    fn test_不正なステータスは500になる() {
        let envelope = Envelope::error(1000, ErrorCode::InternalError, "x");

        let response = Reply(envelope).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
