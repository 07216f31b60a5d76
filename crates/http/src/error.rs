//! # ハンドラのエラー型
//!
//! ハンドラは `Result<Reply, ApiError>` を返し、`?` でドメイン・インフラの
//! エラーをそのまま伝播する。レスポンスは常にエラーエンベロープまたは
//! バリデーション通知になる。

use apibase_domain::{DomainError, Envelope};
use apibase_infra::InfraError;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::response::Reply;

/// ハンドラで発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl ApiError {
    /// エンベロープに変換する
    ///
    /// インフラ層のエラーはここで SpanTrace をログに出してから分類する。
    pub fn into_envelope(self) -> Envelope {
        let domain = match self {
            Self::Domain(err) => err,
            Self::Infra(err) => {
                if err.is_expected() {
                    tracing::debug!(error = %err, "リポジトリのエラーをクライアントに返します");
                } else {
                    tracing::error!(
                        error.category = "infrastructure",
                        span_trace = %err.span_trace(),
                        "{err}"
                    );
                }
                DomainError::from(err)
            }
        };

        Envelope::from_domain_error(&domain)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Reply(self.into_envelope()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use apibase_shared::FieldMessages;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ApiError::from(InfraError::not_found("Article", 1)), 404, "404-001")]
    #[case(ApiError::from(InfraError::conflict("Article", 1)), 400, "400-001")]
    #[case(ApiError::from(InfraError::unexpected("disk full")), 500, "500-001")]
    #[case(ApiError::from(DomainError::Unauthorized("login".into())), 401, "401-001")]
    fn test_エラーエンベロープへの変換(
        #[case] error: ApiError,
        #[case] status: u16,
        #[case] code: &str,
    ) {
        let envelope = error.into_envelope();

        assert_eq!(envelope.status(), status);
        assert_eq!(envelope.to_json()["error"]["code"], code);
    }

    #[test]
    fn test_バリデーションエラーは通知になる() {
        let mut fields = FieldMessages::new();
        fields.insert("title".into(), vec!["required".into()]);

        let envelope = ApiError::from(DomainError::Validation(fields)).into_envelope();

        assert_eq!(envelope.status(), 422);
        assert_eq!(envelope.to_json()["notification"]["result"], "error");
    }

    #[test]
    fn test_予期しないエラーの詳細はレスポンスに含めない() {
        let envelope = ApiError::from(InfraError::unexpected("disk full")).into_envelope();

        assert_eq!(envelope.to_json()["error"]["message"], "Internal Error");
    }
}
