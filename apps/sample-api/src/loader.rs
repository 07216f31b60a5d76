//! # リレーションの読み込み
//!
//! 有効な埋め込みに含まれるリレーションだけをリポジトリから読み込み、
//! トランスフォーマーに渡すレコードを組み立てる。
//! 埋め込まれないリレーションには問い合わせを行わない。

use apibase_domain::{ActiveEmbeds, Identifiable};
use apibase_infra::InfraError;

use crate::{
    handler::AppState,
    model::{Article, Comment, User},
};

/// 記事と読み込み済みのリレーション
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub article:  Article,
    pub author:   Option<User>,
    pub comments: Vec<CommentRecord>,
}

impl ArticleRecord {
    /// リレーションを持たない記事
    pub fn bare(article: Article) -> Self {
        Self {
            article,
            author: None,
            comments: Vec::new(),
        }
    }
}

impl Identifiable for ArticleRecord {
    fn id(&self) -> u64 {
        self.article.id
    }
}

/// コメントと読み込み済みのリレーション
#[derive(Debug, Clone)]
pub struct CommentRecord {
    pub comment: Comment,
    pub author:  Option<User>,
    pub article: Option<ArticleRecord>,
}

impl Identifiable for CommentRecord {
    fn id(&self) -> u64 {
        self.comment.id
    }
}

/// 記事のリストにリレーションを読み込む
pub async fn load_articles(
    state: &AppState,
    articles: Vec<Article>,
    embeds: &ActiveEmbeds,
) -> Result<Vec<ArticleRecord>, InfraError> {
    let mut records = Vec::with_capacity(articles.len());
    for article in articles {
        records.push(load_article(state, article, embeds).await?);
    }
    Ok(records)
}

/// 記事にリレーションを読み込む
pub async fn load_article(
    state: &AppState,
    article: Article,
    embeds: &ActiveEmbeds,
) -> Result<ArticleRecord, InfraError> {
    let author = if embeds.includes_relation("author") {
        state.users.find_by_id(article.author_id).await?
    } else {
        None
    };

    let comments = if embeds.includes_relation("comments") {
        let article_id = article.id;
        let comments = state
            .comments
            .find_where(&move |comment: &Comment| comment.article_id == article_id)
            .await?;
        load_comments(state, comments, &embeds.nested("comments")).await?
    } else {
        Vec::new()
    };

    Ok(ArticleRecord {
        article,
        author,
        comments,
    })
}

/// コメントのリストにリレーションを読み込む
///
/// `article` はリレーションを持たない記事として読み込む。
pub async fn load_comments(
    state: &AppState,
    comments: Vec<Comment>,
    embeds: &ActiveEmbeds,
) -> Result<Vec<CommentRecord>, InfraError> {
    let with_author = embeds.includes_relation("author");
    let with_article = embeds.includes_relation("article");

    let mut records = Vec::with_capacity(comments.len());
    for comment in comments {
        let author = if with_author {
            state.users.find_by_id(comment.author_id).await?
        } else {
            None
        };
        let article = if with_article {
            state
                .articles
                .find_by_id(comment.article_id)
                .await?
                .map(ArticleRecord::bare)
        } else {
            None
        };

        records.push(CommentRecord {
            comment,
            author,
            article,
        });
    }
    Ok(records)
}
