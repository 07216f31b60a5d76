//! # ApiBase 共有ユーティリティ
//!
//! JSON API のワイヤー形式（レスポンスエンベロープ、カーソル、エラーコード）と
//! 観測基盤を提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, http）から依存される
//! - 純粋なデータ構造のみを配置し、axum には依存しない
//! - HTTP レスポンスへの変換は `apibase-http` の責務
//!
//! ## モジュール構成
//!
//! - [`api_response`] - 単一リソースのエンベロープ `{ "data": T, "meta": ... }`
//! - [`paginated_response`] - カーソルページネーション付きコレクション
//! - [`error_response`] - 機械可読コード付きエラー
//! - [`notification_response`] - 分類付き通知（success / info / warning / error）
//! - [`cursor`] - 不透明なページネーションカーソル
//! - [`error_code`] - 安定したエラーコード
//! - [`observability`] - トレーシング初期化（`observability` feature）

pub mod api_response;
pub mod cursor;
pub mod error_code;
pub mod error_response;
pub mod notification_response;
pub mod observability;
pub mod paginated_response;

pub use api_response::{ApiResponse, ResponseMeta};
pub use cursor::Cursor;
pub use error_code::ErrorCode;
pub use error_response::{ErrorBody, ErrorResponse};
pub use notification_response::{
    FieldMessages,
    MESSAGE_SEPARATOR,
    Notification,
    NotificationErrors,
    NotificationResponse,
    NotificationResult,
    NotificationStyle,
};
pub use paginated_response::{Cursors, PaginatedResponse, Pagination};
