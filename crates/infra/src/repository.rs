//! # Repository
//!
//! エンティティの取得・保存を抽象化するトレイト。
//!
//! ## カーソルページネーション
//!
//! [`Repository::paginate`] は `after` より大きい ID を持つレコードを ID の昇順で
//! 最大 `limit` 件返す。`after` が `None` の場合は先頭から返す。
//! 返したページの最後の ID が次のカーソルになる。

mod in_memory;

use apibase_domain::Identifiable;
use async_trait::async_trait;
pub use in_memory::InMemoryRepository;

use crate::error::InfraError;

/// 絞り込み条件
pub type Predicate<E> = dyn Fn(&E) -> bool + Send + Sync;

/// リポジトリが扱うエンティティ
///
/// ID は保存時にリポジトリが採番する。
pub trait Entity: Identifiable + Clone + Send + Sync + 'static {
    /// ログとエラーに出すエンティティ名
    const ENTITY_TYPE: &'static str;

    fn set_id(&mut self, id: u64);
}

/// リポジトリトレイト
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// ID で検索する
    async fn find_by_id(&self, id: u64) -> Result<Option<E>, InfraError>;

    /// 全件を ID の昇順で取得する
    async fn find_all(&self) -> Result<Vec<E>, InfraError>;

    /// 条件に一致するレコードを ID の昇順で取得する
    async fn find_where(&self, predicate: &Predicate<E>) -> Result<Vec<E>, InfraError>;

    /// カーソルページネーションで取得する
    async fn paginate(&self, limit: u32, after: Option<u64>) -> Result<Vec<E>, InfraError>;

    /// 条件付きでカーソルページネーションする
    async fn paginate_where(
        &self,
        predicate: &Predicate<E>,
        limit: u32,
        after: Option<u64>,
    ) -> Result<Vec<E>, InfraError>;

    /// 新しい ID を採番して保存する
    async fn create(&self, entity: E) -> Result<E, InfraError>;

    /// エンティティが持つ ID のまま保存する
    ///
    /// 同じ ID のレコードが存在する場合は Conflict を返す。
    async fn insert(&self, entity: E) -> Result<E, InfraError>;

    /// 指定 ID のレコードを置き換える
    ///
    /// レコードが存在しない場合は NotFound を返す。
    async fn update_with_id(&self, id: u64, entity: E) -> Result<E, InfraError>;

    /// 指定 ID のレコードを削除する
    ///
    /// レコードが存在しない場合は NotFound を返す。
    async fn delete_by_id(&self, id: u64) -> Result<(), InfraError>;
}
