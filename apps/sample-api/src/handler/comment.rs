//! # コメント API ハンドラ

use apibase_domain::{EmbedSpec, Responder};
use apibase_http::{ApiContext, ApiError, Reply};
use apibase_infra::{Entity, InfraError};
use axum::extract::{Path, State, rejection::PathRejection};

use super::{AppState, path_id};
use crate::{
    loader,
    model::{Article, Comment},
    transformer::CommentTransformer,
};

/// コメントで埋め込めるリレーション（`author` は常に埋め込む）
pub const COMMENT_EMBEDS: EmbedSpec = EmbedSpec::new(&["article"], &["author"]);

/// 記事のコメント一覧
///
/// 記事が存在しない場合は 404 を返す。
#[tracing::instrument(skip_all)]
pub async fn list_article_comments(
    State(state): State<AppState>,
    context: ApiContext,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Reply, ApiError> {
    let article_id = path_id(path)?;
    let responder = Responder::new(&context, COMMENT_EMBEDS);

    if state.articles.find_by_id(article_id).await?.is_none() {
        return Err(InfraError::not_found(Article::ENTITY_TYPE, article_id).into());
    }

    let comments = state
        .comments
        .paginate_where(
            &move |comment: &Comment| comment.article_id == article_id,
            context.page_size(),
            context.after(),
        )
        .await?;
    let records = loader::load_comments(&state, comments, responder.embeds()).await?;

    Ok(Reply(responder.collection(&records, &CommentTransformer)))
}
