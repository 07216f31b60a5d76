//! # HTTP ハンドラ
//!
//! ## 設計方針
//!
//! - リポジトリは `Arc<dyn Repository<_>>` で保持し、実装を差し替え可能にする
//! - レスポンスは [`Responder`](apibase_domain::Responder) で組み立て、
//!   失敗は [`ApiError`] としてエンベロープに変換する
//! - パスや JSON のパース失敗も axum 既定のプレーンテキストではなく
//!   エラーエンベロープで返す

pub mod article;
pub mod comment;

use std::sync::Arc;

pub use article::{
    ARTICLE_EMBEDS,
    CreateArticleRequest,
    create_article,
    delete_article,
    get_article,
    list_articles,
};
use apibase_domain::{DomainError, PaginationConfig};
use apibase_http::ApiError;
use apibase_infra::{InMemoryRepository, Repository};
use axum::extract::{FromRef, Path, rejection::PathRejection};
pub use comment::{COMMENT_EMBEDS, list_article_comments};

use crate::model::{Article, Comment, User};

/// ハンドラ共通の State
#[derive(Clone)]
pub struct AppState {
    pub users:      Arc<dyn Repository<User>>,
    pub articles:   Arc<dyn Repository<Article>>,
    pub comments:   Arc<dyn Repository<Comment>>,
    pub pagination: PaginationConfig,
}

impl AppState {
    /// インメモリのリポジトリで State を構築する
    pub fn in_memory(pagination: PaginationConfig) -> Self {
        Self {
            users: Arc::new(InMemoryRepository::<User>::new()),
            articles: Arc::new(InMemoryRepository::<Article>::new()),
            comments: Arc::new(InMemoryRepository::<Comment>::new()),
            pagination,
        }
    }
}

impl FromRef<AppState> for PaginationConfig {
    fn from_ref(state: &AppState) -> Self {
        state.pagination
    }
}

/// パスパラメータの ID を取り出す
pub(crate) fn path_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(error = %rejection, "パスパラメータが不正です");
        DomainError::WrongArguments(rejection.body_text()).into()
    })
}
