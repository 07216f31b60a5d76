//! Repository をトレイトオブジェクトとして使う統合テスト
//!
//! ハンドラは `Arc<dyn Repository<E>>` 経由でリポジトリを使うため、
//! 同じ形で並行アクセスとページ走査を確認する。

use std::sync::Arc;

use apibase_domain::{Identifiable, PageQuery, PaginationConfig, ResponseContext};
use apibase_infra::{Entity, InMemoryRepository, Repository};
use apibase_shared::Cursor;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone)]
struct Task {
    id:    u64,
    title: String,
}

impl Identifiable for Task {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for Task {
    const ENTITY_TYPE: &'static str = "Task";

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

fn task(title: &str) -> Task {
    Task {
        id:    0,
        title: title.to_string(),
    }
}

#[tokio::test]
async fn test_並行にcreateしてもidは重複しない() {
    let repository: Arc<dyn Repository<Task>> = Arc::new(InMemoryRepository::new());

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let repository = Arc::clone(&repository);
            tokio::spawn(async move { repository.create(task(&format!("task {i}"))).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let ids: Vec<u64> = repository
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(Identifiable::id)
        .collect();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_レスポンスコンテキストのカーソルで次のページを取得できる() {
    let repository: Arc<dyn Repository<Task>> = Arc::new(InMemoryRepository::new());
    for i in 0..5 {
        repository.create(task(&format!("task {i}"))).await.unwrap();
    }
    let config = PaginationConfig::default();

    let first_query = PageQuery {
        limit: Some("2".into()),
        ..Default::default()
    };
    let first_context = ResponseContext::from_query(&first_query, &config);
    let first = repository
        .paginate(first_context.page_size(), first_context.after())
        .await
        .unwrap();
    let next = first.last().map(|task| Cursor::new(task.id).encode());

    let second_query = PageQuery {
        cursor: next,
        limit: Some("2".into()),
        ..Default::default()
    };
    let second_context = ResponseContext::from_query(&second_query, &config);
    let second = repository
        .paginate(second_context.page_size(), second_context.after())
        .await
        .unwrap();

    let titles: Vec<_> = second.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, vec!["task 2", "task 3"]);
}
