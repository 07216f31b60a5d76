//! # トランスフォーマー
//!
//! ドメインレコードを JSON の属性ツリーに変換する。
//!
//! 各エンドポイントのレコード型ごとに [`Transformer`] を実装し、スカラー属性は
//! [`Transformer::transform`] で、埋め込みリレーションは [`Transformer::include`] で
//! 返す。埋め込みは [`ActiveEmbeds`] に従って再帰的に解決され、リレーション名を
//! キーとして親の属性に追加される。

use serde_json::Value;

use crate::embed::ActiveEmbeds;

/// 変換後の属性（キー → 値のマップ）
pub type Attributes = serde_json::Map<String, Value>;

/// カーソル位置として使える単調増加の識別子を持つ
pub trait Identifiable {
    fn id(&self) -> u64;
}

/// 埋め込みリレーションの変換結果
#[derive(Debug, Clone, PartialEq)]
pub enum Included {
    /// 単一のレコード
    One(Attributes),
    /// レコードのリスト
    Many(Vec<Attributes>),
    /// 出力しない（未知のリレーション、または関連レコードを持っていない）
    Absent,
}

impl Included {
    /// 単一レコードを下位の埋め込みごと変換する
    pub fn item<T>(transformer: &T, record: &T::Record, nested: &ActiveEmbeds) -> Self
    where
        T: Transformer + ?Sized,
    {
        Self::One(transform_item(transformer, record, nested))
    }

    /// 省略可能な単一レコードを変換する
    ///
    /// レコードがなければキーごと省く。
    pub fn optional<T>(transformer: &T, record: Option<&T::Record>, nested: &ActiveEmbeds) -> Self
    where
        T: Transformer + ?Sized,
    {
        record.map_or(Self::Absent, |record| Self::item(transformer, record, nested))
    }

    /// レコードのリストを変換する
    pub fn collection<'r, T, I>(transformer: &T, records: I, nested: &ActiveEmbeds) -> Self
    where
        T: Transformer + ?Sized,
        T::Record: 'r,
        I: IntoIterator<Item = &'r T::Record>,
    {
        Self::Many(transform_collection(transformer, records, nested))
    }

    fn into_value(self) -> Option<Value> {
        match self {
            Self::One(attributes) => Some(Value::Object(attributes)),
            Self::Many(items) => Some(Value::Array(items.into_iter().map(Value::Object).collect())),
            Self::Absent => None,
        }
    }
}

/// レコード → 属性ツリーの変換
///
/// ## 実装例
///
/// ```
/// use apibase_domain::{ActiveEmbeds, Attributes, Transformer};
/// use serde_json::json;
///
/// struct Tag {
///     name: String,
/// }
///
/// struct TagTransformer;
///
/// impl Transformer for TagTransformer {
///     type Record = Tag;
///
///     fn transform(&self, tag: &Tag) -> Attributes {
///         let mut attributes = Attributes::new();
///         attributes.insert("name".into(), json!(tag.name));
///         attributes
///     }
/// }
///
/// let tag = Tag { name: "rust".into() };
/// let attributes = apibase_domain::transformer::transform_item(&TagTransformer, &tag, &ActiveEmbeds::none());
/// assert_eq!(attributes["name"], "rust");
/// ```
pub trait Transformer {
    type Record;

    /// スカラー属性に変換する
    fn transform(&self, record: &Self::Record) -> Attributes;

    /// リレーションを変換する
    ///
    /// `nested` は `relation` の下位階層で有効な埋め込み集合。
    /// 未知のリレーションは [`Included::Absent`] を返す。
    fn include(&self, _record: &Self::Record, _relation: &str, _nested: &ActiveEmbeds) -> Included {
        Included::Absent
    }
}

/// 単一レコードを埋め込みごと変換する
///
/// リレーションは [`ActiveEmbeds::relations`] の順に追加する。
/// 同名のスカラー属性があれば埋め込みで上書きされる。
pub fn transform_item<T>(transformer: &T, record: &T::Record, embeds: &ActiveEmbeds) -> Attributes
where
    T: Transformer + ?Sized,
{
    let mut attributes = transformer.transform(record);

    for relation in embeds.relations() {
        let nested = embeds.nested(relation);
        if let Some(value) = transformer.include(record, relation, &nested).into_value() {
            attributes.insert(relation.to_string(), value);
        }
    }

    attributes
}

/// レコードのリストを入力順のまま変換する
pub fn transform_collection<'r, T, I>(
    transformer: &T,
    records: I,
    embeds: &ActiveEmbeds,
) -> Vec<Attributes>
where
    T: Transformer + ?Sized,
    T::Record: 'r,
    I: IntoIterator<Item = &'r T::Record>,
{
    records
        .into_iter()
        .map(|record| transform_item(transformer, record, embeds))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::EmbedSpec;

    struct User {
        name: &'static str,
    }

    struct Comment {
        body:   &'static str,
        author: Option<User>,
    }

    struct Post {
        id:       u64,
        title:    &'static str,
        comments: Vec<Comment>,
    }

    struct UserTransformer;

    impl Transformer for UserTransformer {
        type Record = User;

        fn transform(&self, user: &User) -> Attributes {
            let mut attributes = Attributes::new();
            attributes.insert("name".into(), json!(user.name));
            attributes
        }
    }

    struct CommentTransformer;

    impl Transformer for CommentTransformer {
        type Record = Comment;

        fn transform(&self, comment: &Comment) -> Attributes {
            let mut attributes = Attributes::new();
            attributes.insert("body".into(), json!(comment.body));
            attributes
        }

        fn include(&self, comment: &Comment, relation: &str, nested: &ActiveEmbeds) -> Included {
            match relation {
                "author" => Included::optional(&UserTransformer, comment.author.as_ref(), nested),
                _ => Included::Absent,
            }
        }
    }

    struct PostTransformer;

    impl Transformer for PostTransformer {
        type Record = Post;

        fn transform(&self, post: &Post) -> Attributes {
            let mut attributes = Attributes::new();
            attributes.insert("id".into(), json!(post.id));
            attributes.insert("title".into(), json!(post.title));
            attributes
        }

        fn include(&self, post: &Post, relation: &str, nested: &ActiveEmbeds) -> Included {
            match relation {
                "comments" => Included::collection(&CommentTransformer, &post.comments, nested),
                _ => Included::Absent,
            }
        }
    }

    fn post() -> Post {
        Post {
            id:       1,
            title:    "hello",
            comments: vec![
                Comment {
                    body:   "first",
                    author: Some(User { name: "alice" }),
                },
                Comment {
                    body:   "anonymous",
                    author: None,
                },
            ],
        }
    }

    #[test]
    fn test_埋め込みなしではスカラー属性のみ() {
        let attributes = transform_item(&PostTransformer, &post(), &ActiveEmbeds::none());

        assert_eq!(Value::Object(attributes), json!({ "id": 1, "title": "hello" }));
    }

    #[test]
    fn test_ドット区切りのパスは再帰的に埋め込まれる() {
        let spec = EmbedSpec::new(&["comments", "comments.author"], &[]);
        let embeds = spec.resolve("comments.author");

        let attributes = transform_item(&PostTransformer, &post(), &embeds);

        assert_eq!(
            Value::Object(attributes),
            json!({
                "id": 1,
                "title": "hello",
                "comments": [
                    { "body": "first", "author": { "name": "alice" } },
                    { "body": "anonymous" }
                ]
            })
        );
    }

    #[test]
    fn test_関連レコードを持たないリレーションはキーを出力しない() {
        let spec = EmbedSpec::new(&[], &["author"]);
        let comment = Comment {
            body:   "anonymous",
            author: None,
        };

        let attributes = transform_item(&CommentTransformer, &comment, &spec.resolve(""));

        assert_eq!(attributes.get("author"), None);
        assert_eq!(Value::Object(attributes), json!({ "body": "anonymous" }));
    }

    #[test]
    fn test_未知のリレーションはキーを出力しない() {
        let spec = EmbedSpec::new(&["likes"], &[]);
        let attributes = transform_item(&PostTransformer, &post(), &spec.resolve("likes"));

        assert!(!attributes.contains_key("likes"));
    }

    #[test]
    fn test_コレクションは入力順を保つ() {
        let posts = vec![
            Post {
                id:       3,
                title:    "c",
                comments: vec![],
            },
            Post {
                id:       1,
                title:    "a",
                comments: vec![],
            },
        ];

        let items = transform_collection(&PostTransformer, &posts, &ActiveEmbeds::none());

        let ids: Vec<_> = items.iter().map(|item| item["id"].clone()).collect();
        assert_eq!(ids, vec![json!(3), json!(1)]);
    }
}
