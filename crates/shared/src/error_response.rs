//! # エラーレスポンス
//!
//! 機械可読コード付きのエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は `apibase-http` の責務（shared に axum 依存を入れない）
//! - よく使うエラー種別は [`ErrorCode`] 経由の便利コンストラクタで提供する

use serde::{Deserialize, Serialize};

use crate::ErrorCode;

/// エラーレスポンス
///
/// ## JSON 形式
///
/// ```json
/// {
///   "error": { "code": "403-001", "http_code": 403, "message": "Forbidden" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// エラー本体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// 安定した機械可読コード（例: `"404-001"`）
    pub code:      String,
    /// レスポンスの HTTP ステータスコード
    pub http_code: u16,
    /// 人間可読メッセージ
    pub message:   String,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    ///
    /// [`ErrorCode`] にない独自コードを使う場合に使用する。
    pub fn new(code: impl Into<String>, http_code: u16, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                http_code,
                message: message.into(),
            },
        }
    }

    /// [`ErrorCode`] とステータスから作成する
    ///
    /// ステータスはコード既定のものと異なってもよい（呼び出し側の設定を優先する）。
    pub fn with_code(code: ErrorCode, http_code: u16, message: impl Into<String>) -> Self {
        Self::new(code.as_str(), http_code, message)
    }

    /// [`ErrorCode`] 既定のステータスで作成する
    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_code(code, code.http_status(), message)
    }

    /// 400 Wrong Arguments
    pub fn wrong_arguments(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::WrongArguments, message)
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::Unauthorized, message)
    }

    /// 403 Forbidden
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::Forbidden, message)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::NotFound, message)
    }

    /// 500 Internal Error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_jsonの形状() {
        let error = ErrorResponse::forbidden("見る権限がありません");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "error": {
                    "code": "403-001",
                    "http_code": 403,
                    "message": "見る権限がありません"
                }
            })
        );
    }

    #[test]
    fn test_全便利コンストラクタのhttp_codeが正しい() {
        assert_eq!(ErrorResponse::wrong_arguments("").error.http_code, 400);
        assert_eq!(ErrorResponse::unauthorized("").error.http_code, 401);
        assert_eq!(ErrorResponse::forbidden("").error.http_code, 403);
        assert_eq!(ErrorResponse::not_found("").error.http_code, 404);
        assert_eq!(ErrorResponse::internal_error("").error.http_code, 500);
    }

    #[test]
    fn test_with_codeは呼び出し側のステータスを優先する() {
        let error = ErrorResponse::with_code(ErrorCode::WrongArguments, 409, "重複");

        assert_eq!(error.error.code, "400-001");
        assert_eq!(error.error.http_code, 409);
    }

    #[test]
    fn test_jsonデシリアライズが正しく動作する() {
        let json = r#"{"error": {"code": "404-001", "http_code": 404, "message": "Resource Not Found"}}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(error, ErrorResponse::not_found("Resource Not Found"));
    }
}
