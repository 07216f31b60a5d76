//! # InMemoryRepository
//!
//! `BTreeMap` を使ったインメモリ実装。キーが ID なので、範囲検索がそのまま
//! カーソルページネーションになる。

use std::{collections::BTreeMap, ops::Bound, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Entity, Predicate, Repository};
use crate::error::InfraError;

/// インメモリのリポジトリ
///
/// `Clone` は同じ保存先を共有する。
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    records: Arc<RwLock<BTreeMap<u64, E>>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

/// `after` より大きい ID を昇順で `limit` 件まで集める
fn page<'a, E, I>(records: I, limit: u32, predicate: &Predicate<E>) -> Vec<E>
where
    E: Clone + 'a,
    I: Iterator<Item = &'a E>,
{
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    records
        .filter(|record| predicate(*record))
        .take(limit)
        .cloned()
        .collect()
}

fn lower_bound(after: Option<u64>) -> Bound<u64> {
    after.map_or(Bound::Unbounded, Bound::Excluded)
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    #[tracing::instrument(skip_all, level = "debug", fields(entity = E::ENTITY_TYPE, %id))]
    async fn find_by_id(&self, id: u64) -> Result<Option<E>, InfraError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(entity = E::ENTITY_TYPE))]
    async fn find_all(&self) -> Result<Vec<E>, InfraError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(entity = E::ENTITY_TYPE))]
    async fn find_where(&self, predicate: &Predicate<E>) -> Result<Vec<E>, InfraError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|record| predicate(*record))
            .cloned()
            .collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(entity = E::ENTITY_TYPE, %limit, ?after))]
    async fn paginate(&self, limit: u32, after: Option<u64>) -> Result<Vec<E>, InfraError> {
        self.paginate_where(&|_: &E| true, limit, after).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(entity = E::ENTITY_TYPE, %limit, ?after))]
    async fn paginate_where(
        &self,
        predicate: &Predicate<E>,
        limit: u32,
        after: Option<u64>,
    ) -> Result<Vec<E>, InfraError> {
        let records = self.records.read().await;
        let range = records.range((lower_bound(after), Bound::Unbounded));
        Ok(page(range.map(|(_, record)| record), limit, predicate))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(entity = E::ENTITY_TYPE))]
    async fn create(&self, mut entity: E) -> Result<E, InfraError> {
        let mut records = self.records.write().await;
        let id = match records.last_key_value() {
            Some((last, _)) => last
                .checked_add(1)
                .ok_or_else(|| InfraError::unexpected("ID を採番できません"))?,
            None => 1,
        };

        entity.set_id(id);
        records.insert(id, entity.clone());
        tracing::debug!(id, "レコードを作成しました");
        Ok(entity)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(entity = E::ENTITY_TYPE, id = entity.id()))]
    async fn insert(&self, entity: E) -> Result<E, InfraError> {
        let mut records = self.records.write().await;
        let id = entity.id();
        if records.contains_key(&id) {
            return Err(InfraError::conflict(E::ENTITY_TYPE, id));
        }

        records.insert(id, entity.clone());
        Ok(entity)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(entity = E::ENTITY_TYPE, %id))]
    async fn update_with_id(&self, id: u64, mut entity: E) -> Result<E, InfraError> {
        let mut records = self.records.write().await;
        let Some(slot) = records.get_mut(&id) else {
            return Err(InfraError::not_found(E::ENTITY_TYPE, id));
        };

        entity.set_id(id);
        *slot = entity.clone();
        Ok(entity)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(entity = E::ENTITY_TYPE, %id))]
    async fn delete_by_id(&self, id: u64) -> Result<(), InfraError> {
        self.records
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| InfraError::not_found(E::ENTITY_TYPE, id))
    }
}
