//! # ApiBase サンプル API
//!
//! 記事・コメント・ユーザーを扱う小さな API で、レスポンス構築の
//! パイプライン全体（カーソルページネーション、埋め込み、エンベロープ）を通す。
//!
//! ## エンドポイント
//!
//! - `GET /articles` - 記事一覧（embed: `author`, `comments`, `comments.author`）
//! - `POST /articles` - 記事作成
//! - `GET /articles/{id}` - 記事詳細
//! - `DELETE /articles/{id}` - 記事削除
//! - `GET /articles/{id}/comments` - 記事のコメント一覧（`author` は常に埋め込む）
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーターとレイヤーの構築
//! - `handler`: HTTP ハンドラ
//! - `loader`: 埋め込み対象リレーションの読み込み
//! - `model`: エンティティ
//! - `seed`: 開発用の初期データ
//! - `transformer`: エンティティ → 属性ツリー

pub mod app_builder;
pub mod handler;
pub mod loader;
pub mod model;
pub mod seed;
pub mod transformer;

pub use app_builder::build_app;
pub use handler::AppState;
