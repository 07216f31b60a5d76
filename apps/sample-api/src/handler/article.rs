//! # 記事 API ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /articles` - 記事一覧
//! - `POST /articles` - 記事作成
//! - `GET /articles/{id}` - 記事詳細
//! - `DELETE /articles/{id}` - 記事削除（コメントも削除する）

use apibase_domain::{DomainError, EmbedSpec, Responder};
use apibase_http::{ApiContext, ApiError, Reply};
use apibase_infra::{Entity, InfraError};
use apibase_shared::FieldMessages;
use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
};
use chrono::Utc;
use itertools::Itertools;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use super::{AppState, path_id};
use crate::{
    loader,
    model::{Article, Comment},
    transformer::ArticleTransformer,
};

/// 記事で埋め込めるリレーション
pub const ARTICLE_EMBEDS: EmbedSpec = EmbedSpec::new(&["author", "comments", "comments.author"], &[]);

/// 記事作成リクエスト
///
/// 欠けたフィールドは JSON のパースエラーではなく検証エラーとして返すため、
/// すべてのフィールドに既定値を持たせる。
#[derive(Debug, Deserialize, Validate)]
pub struct CreateArticleRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "author_id is required"))]
    pub author_id: u64,
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "title must be 1 to 200 characters"))]
    pub title:     String,
    #[serde(default)]
    #[validate(length(min = 1, message = "body is required"))]
    pub body:      String,
}

/// 記事一覧
///
/// ## クエリパラメータ
///
/// - `current`: 前ページの `next` カーソル
/// - `limit`: ページサイズ
/// - `embed`: `author`, `comments`, `comments.author`
#[tracing::instrument(skip_all)]
pub async fn list_articles(
    State(state): State<AppState>,
    context: ApiContext,
) -> Result<Reply, ApiError> {
    let responder = Responder::new(&context, ARTICLE_EMBEDS);

    let articles = state
        .articles
        .paginate(context.page_size(), context.after())
        .await?;
    let records = loader::load_articles(&state, articles, responder.embeds()).await?;

    Ok(Reply(responder.collection(&records, &ArticleTransformer)))
}

/// 記事詳細
#[tracing::instrument(skip_all)]
pub async fn get_article(
    State(state): State<AppState>,
    context: ApiContext,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Reply, ApiError> {
    let id = path_id(path)?;
    let responder = Responder::new(&context, ARTICLE_EMBEDS);

    let article = state
        .articles
        .find_by_id(id)
        .await?
        .ok_or_else(|| InfraError::not_found(Article::ENTITY_TYPE, id))?;
    let record = loader::load_article(&state, article, responder.embeds()).await?;

    Ok(Reply(responder.item(&record, &ArticleTransformer)))
}

/// 記事作成
///
/// 検証に失敗した場合は 422 のエラー通知を返す。成功時は 201 で作成した記事を返す。
#[tracing::instrument(skip_all)]
pub async fn create_article(
    State(state): State<AppState>,
    context: ApiContext,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> Result<Reply, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| DomainError::WrongArguments(rejection.body_text()))?;
    let responder = Responder::new(&context, ARTICLE_EMBEDS);

    if let Err(errors) = request.validate() {
        return Ok(Reply(responder.error_validation(field_messages(&errors))));
    }
    if state.users.find_by_id(request.author_id).await?.is_none() {
        let fields = FieldMessages::from([(
            "author_id".to_string(),
            vec![format!("User(id={}) does not exist", request.author_id)],
        )]);
        return Ok(Reply(responder.error_validation(fields)));
    }

    let article = state
        .articles
        .create(Article {
            id:           0,
            author_id:    request.author_id,
            title:        request.title,
            body:         request.body,
            published_at: Utc::now(),
        })
        .await?;
    tracing::info!(article.id = article.id, "記事を作成しました");

    let record = loader::load_article(&state, article, responder.embeds()).await?;
    Ok(Reply(
        responder.with_status(201).item(&record, &ArticleTransformer),
    ))
}

/// 記事削除
#[tracing::instrument(skip_all)]
pub async fn delete_article(
    State(state): State<AppState>,
    context: ApiContext,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Reply, ApiError> {
    let id = path_id(path)?;

    state.articles.delete_by_id(id).await?;
    let comments = state
        .comments
        .find_where(&move |comment: &Comment| comment.article_id == id)
        .await?;
    for comment in &comments {
        state.comments.delete_by_id(comment.id).await?;
    }
    tracing::info!(article.id = id, comments = comments.len(), "記事を削除しました");

    Ok(Reply(
        Responder::new(&context, EmbedSpec::NONE)
            .success_notification(format!("Article {id} has been deleted.")),
    ))
}

/// 検証エラーをフィールド名順のメッセージに変換する
fn field_messages(errors: &ValidationErrors) -> FieldMessages {
    errors
        .field_errors()
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string)
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
