//! # ApiBase HTTP 層
//!
//! ドメイン層のエンベロープを axum のレスポンスに載せるための部品。
//!
//! ## 提供するもの
//!
//! - [`ApiContext`]: クエリパラメータから [`ResponseContext`](apibase_domain::ResponseContext)
//!   を作るエクストラクタ
//! - [`Reply`]: エンベロープを JSON レスポンスに変換するラッパー
//! - [`ApiError`]: ハンドラのエラー型
//! - [`middleware`]: API バージョン検証と CORS
//! - [`config`]: 環境変数からの設定読み込み

pub mod config;
pub mod context;
pub mod error;
pub mod middleware;
pub mod response;

pub use config::{ApiConfig, ConfigError, Environment};
pub use context::ApiContext;
pub use error::ApiError;
pub use response::Reply;
