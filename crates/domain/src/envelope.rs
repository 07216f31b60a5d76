//! # レスポンスエンベロープ
//!
//! ステータスコードと JSON ボディの組。HTTP への変換は `apibase-http` が行う。
//!
//! ボディは次の 4 形状のいずれか:
//!
//! - 単一リソース `{ "data": {...}, "meta": {...} }`
//! - コレクション `{ "data": [...], "pagination": {...} }`
//! - 通知 `{ "notification": {...}, "errors": ... }`
//! - エラー `{ "error": { "code", "http_code", "message" } }`

use apibase_shared::{
    ApiResponse,
    ErrorCode,
    ErrorResponse,
    NotificationErrors,
    NotificationResponse,
    NotificationResult,
    PaginatedResponse,
};
use serde::Serialize;

use crate::{error::DomainError, transformer::Attributes};

/// ステータス未設定時の既定値
pub const DEFAULT_STATUS: u16 = 200;

/// エンベロープのボディ
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnvelopeBody {
    Item(ApiResponse<Attributes>),
    Collection(PaginatedResponse<Attributes>),
    Notification(NotificationResponse),
    Error(ErrorResponse),
}

/// ステータスコード付きのレスポンス
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    status: u16,
    body:   EnvelopeBody,
}

impl Envelope {
    /// データ系のエンベロープを作成する
    ///
    /// 2xx 以外のステータスでデータを返そうとした場合は警告を出す。
    pub fn data(status: u16, body: EnvelopeBody) -> Self {
        if !(200..300).contains(&status) {
            tracing::warn!(
                response.status = status,
                "2xx 以外のステータスでデータを返そうとしています"
            );
        }
        Self { status, body }
    }

    /// エラーエンベロープを作成する
    ///
    /// `http_code` には `status` が入る。
    pub fn error(status: u16, code: ErrorCode, message: impl Into<String>) -> Self {
        warn_if_ok(status);
        Self {
            status,
            body: EnvelopeBody::Error(ErrorResponse::with_code(code, status, message)),
        }
    }

    /// 通知エンベロープを作成する
    pub fn notification(
        status: u16,
        result: NotificationResult,
        errors: impl Into<NotificationErrors>,
    ) -> Self {
        if result == NotificationResult::Error {
            warn_if_ok(status);
        }
        Self {
            status,
            body: EnvelopeBody::Notification(NotificationResponse::new(result, errors)),
        }
    }

    /// ドメインエラーをエンベロープに変換する
    ///
    /// バリデーションエラーは 422 の error 通知、内部エラーは詳細を隠した 500、
    /// それ以外は対応するエラーコードのエラーエンベロープになる。
    pub fn from_domain_error(err: &DomainError) -> Self {
        match err {
            DomainError::WrongArguments(message)
            | DomainError::Unauthorized(message)
            | DomainError::Forbidden(message) => {
                Self::error(err.http_status(), code_of(err), message.clone())
            }
            DomainError::NotFound { entity_type, id } => {
                tracing::debug!(entity_type = *entity_type, id = %id, "リソースが見つかりません");
                Self::error(404, ErrorCode::NotFound, ErrorCode::NotFound.default_message())
            }
            DomainError::Validation(fields) => {
                Self::notification(422, NotificationResult::Error, fields.clone())
            }
            DomainError::Internal(detail) => {
                tracing::error!(error.detail = %detail, "内部エラー");
                Self::error(
                    500,
                    ErrorCode::InternalError,
                    ErrorCode::InternalError.default_message(),
                )
            }
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &EnvelopeBody {
        &self.body
    }

    pub fn into_parts(self) -> (u16, EnvelopeBody) {
        (self.status, self.body)
    }

    /// ボディを JSON 値にする
    pub fn to_json(&self) -> serde_json::Value {
        // 文字列キーのマップと基本型しか含まないため失敗しない
        serde_json::to_value(&self.body).unwrap_or_default()
    }
}

fn code_of(err: &DomainError) -> ErrorCode {
    err.error_code().unwrap_or(ErrorCode::InternalError)
}

/// 200 のままエラーを返そうとしている呼び出しを警告する
fn warn_if_ok(status: u16) {
    if status == DEFAULT_STATUS {
        tracing::warn!(
            response.status = status,
            "ステータス 200 のままエラーを返そうとしています。よほどの理由がない限りステータスを設定してください"
        );
    }
}
