//! # トランスフォーマー
//!
//! エンティティを JSON の属性ツリーに変換する。

use apibase_domain::{ActiveEmbeds, Attributes, Included, Transformer};
use serde_json::json;

use crate::{
    loader::{ArticleRecord, CommentRecord},
    model::User,
};

pub struct UserTransformer;

impl Transformer for UserTransformer {
    type Record = User;

    fn transform(&self, user: &User) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("id".into(), json!(user.id));
        attributes.insert("name".into(), json!(user.name));
        attributes.insert("email".into(), json!(user.email));
        attributes
    }
}

/// 記事
///
/// リレーション: `author`（ユーザー）、`comments`（コメントのリスト）
pub struct ArticleTransformer;

impl Transformer for ArticleTransformer {
    type Record = ArticleRecord;

    fn transform(&self, record: &ArticleRecord) -> Attributes {
        let article = &record.article;
        let mut attributes = Attributes::new();
        attributes.insert("id".into(), json!(article.id));
        attributes.insert("author_id".into(), json!(article.author_id));
        attributes.insert("title".into(), json!(article.title));
        attributes.insert("body".into(), json!(article.body));
        attributes.insert("published_at".into(), json!(article.published_at));
        attributes
    }

    fn include(&self, record: &ArticleRecord, relation: &str, nested: &ActiveEmbeds) -> Included {
        match relation {
            "author" => Included::optional(&UserTransformer, record.author.as_ref(), nested),
            "comments" => Included::collection(&CommentTransformer, &record.comments, nested),
            _ => Included::Absent,
        }
    }
}

/// コメント
///
/// リレーション: `author`（ユーザー）、`article`（記事）
pub struct CommentTransformer;

impl Transformer for CommentTransformer {
    type Record = CommentRecord;

    fn transform(&self, record: &CommentRecord) -> Attributes {
        let comment = &record.comment;
        let mut attributes = Attributes::new();
        attributes.insert("id".into(), json!(comment.id));
        attributes.insert("article_id".into(), json!(comment.article_id));
        attributes.insert("author_id".into(), json!(comment.author_id));
        attributes.insert("body".into(), json!(comment.body));
        attributes.insert("created_at".into(), json!(comment.created_at));
        attributes
    }

    fn include(&self, record: &CommentRecord, relation: &str, nested: &ActiveEmbeds) -> Included {
        match relation {
            "author" => Included::optional(&UserTransformer, record.author.as_ref(), nested),
            "article" => Included::optional(&ArticleTransformer, record.article.as_ref(), nested),
            _ => Included::Absent,
        }
    }
}
