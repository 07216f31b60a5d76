//! # ApiBase レスポンス構築層
//!
//! ドメインレコードを API のペイロードに変換し、ページネーションカーソルを計算し、
//! 処理結果を統一エンベロープに分類するパイプラインを提供する。
//!
//! ## 処理の流れ
//!
//! ```text
//! クエリパラメータ
//!     → ResponseContext（カーソル・ページサイズ・要求された埋め込み）
//!     → ActiveEmbeds（EmbedSpec との突き合わせ）
//!     → リポジトリがレコードを返す
//!     → Transformer（属性ツリーへの変換、埋め込みの再帰解決）
//!     → Responder（エンベロープ + ステータスコード）
//! ```
//!
//! ## 設計方針
//!
//! - **リクエストスコープ**: すべての値はリクエストごとに構築し、共有しない
//! - **同期・副作用なし**: I/O を行わない。唯一の副作用は 200 のままエラーを返す
//!   呼び出しミスに対する `tracing::warn!`
//! - **fail-open**: 壊れたカーソル、未知の埋め込み名、範囲外のページサイズは
//!   エラーにせず正規化する
//! - **継承ではなく合成**: コントローラは [`Responder`] を保持して使う
//!
//! ## 依存関係の方向
//!
//! ```text
//! http → infra → domain → shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`context`] - リクエストごとのページネーション状態
//! - [`embed`] - 埋め込みリレーションの解決
//! - [`transformer`] - レコード → 属性ツリーの変換
//! - [`envelope`] - ステータスコード付きのレスポンスエンベロープ
//! - [`responder`] - エンベロープの構築
//! - [`error`] - ドメイン層エラー

pub mod context;
pub mod embed;
pub mod envelope;
pub mod error;
pub mod responder;
pub mod transformer;

pub use context::{PageQuery, PaginationConfig, ResponseContext};
pub use embed::{ActiveEmbeds, EmbedSpec};
pub use envelope::{Envelope, EnvelopeBody};
pub use error::DomainError;
pub use responder::Responder;
pub use transformer::{Attributes, Identifiable, Included, Transformer};
