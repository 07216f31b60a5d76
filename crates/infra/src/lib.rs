//! # ApiBase インフラ層
//!
//! レコードの取得・保存を担当する。
//!
//! ## 設計方針
//!
//! ドメイン層はページネーションの下限 ID とページサイズを決めるだけで、
//! 実際の取得はこのクレートの [`Repository`] が行う。カーソルページネーションは
//! 「ID が下限より大きいレコードを ID の昇順で `limit` 件」という単純な規則で、
//! 保存先に依存しない。
//!
//! ## 依存関係
//!
//! ```text
//! http → infra → domain → shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトとインメモリ実装

pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
pub use repository::{Entity, InMemoryRepository, Predicate, Repository};
