//! # 初期データ
//!
//! 開発・テスト環境でサンプルのユーザー・記事・コメントを投入する。
//! ID は固定なので、同じ State に二度投入すると Conflict になる。

use apibase_infra::InfraError;
use chrono::{DateTime, Utc};

use crate::{
    handler::AppState,
    model::{Article, Comment, User},
};

/// 投入する記事の数
pub const ARTICLE_COUNT: u64 = 5;

const USERS: [(u64, &str, &str); 3] = [
    (1, "Alice", "alice@example.com"),
    (2, "Bob", "bob@example.com"),
    (3, "Carol", "carol@example.com"),
];

/// 2024-01-01T00:00:00Z
const BASE_TIMESTAMP: i64 = 1_704_067_200;

fn timestamp(offset_hours: u64) -> DateTime<Utc> {
    let offset = i64::try_from(offset_hours * 3600).unwrap_or_default();
    DateTime::from_timestamp(BASE_TIMESTAMP + offset, 0).unwrap_or_default()
}

/// サンプルデータを投入する
///
/// - ユーザー 3 件
/// - 記事 5 件（著者はユーザーを順に割り当てる）
/// - 記事 `n` にコメント `n` 件（計 15 件）
#[tracing::instrument(skip_all)]
pub async fn seed(state: &AppState) -> Result<(), InfraError> {
    for (id, name, email) in USERS {
        state
            .users
            .insert(User {
                id,
                name: name.to_string(),
                email: email.to_string(),
            })
            .await?;
    }

    let user_count = USERS.len() as u64;
    let mut comment_id = 0;
    for article_id in 1..=ARTICLE_COUNT {
        state
            .articles
            .insert(Article {
                id:           article_id,
                author_id:    (article_id - 1) % user_count + 1,
                title:        format!("Article {article_id}"),
                body:         format!("Body of article {article_id}"),
                published_at: timestamp(article_id * 24),
            })
            .await?;

        for n in 0..article_id {
            comment_id += 1;
            state
                .comments
                .insert(Comment {
                    id:         comment_id,
                    article_id,
                    author_id:  (article_id + n) % user_count + 1,
                    body:       format!("Comment {n} on article {article_id}"),
                    created_at: timestamp(article_id * 24 + n + 1),
                })
                .await?;
        }
    }

    tracing::info!(
        users = USERS.len(),
        articles = ARTICLE_COUNT,
        comments = comment_id,
        "初期データを投入しました"
    );
    Ok(())
}
