//! # 単一リソースのレスポンスエンベロープ
//!
//! 単一リソースを返す API の統一形式 `{ "data": T, "meta": {...} }` を提供する。

use serde::{Deserialize, Serialize};

/// 単一リソースのレスポンス型
///
/// `meta` はリソース変換を経由したレスポンスでのみ付与され、
/// そのエンドポイントで埋め込み可能なリレーション名を列挙する。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "data": { "id": 1, "title": "...", "author": { ... } },
///   "meta": { "available_embeds": ["author", "comments"] }
/// }
/// ```
///
/// ## 使用例
///
/// ```
/// use apibase_shared::ApiResponse;
///
/// let response = ApiResponse::new("hello");
/// assert_eq!(response.data, "hello");
/// assert!(response.meta.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

/// 単一リソースのメタ情報
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// 埋め込み可能なリレーション名（実際に埋め込まれたかどうかに関わらない）
    pub available_embeds: Vec<String>,
}

impl<T> ApiResponse<T> {
    /// メタ情報なしの `ApiResponse` を作成する
    pub fn new(data: T) -> Self {
        Self { data, meta: None }
    }

    /// メタ情報付きの `ApiResponse` を作成する
    pub fn with_meta(data: T, meta: ResponseMeta) -> Self {
        Self {
            data,
            meta: Some(meta),
        }
    }
}

impl ResponseMeta {
    /// 埋め込み可能なリレーション名からメタ情報を作成する
    pub fn available_embeds<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available_embeds: names.into_iter().map(Into::into).collect(),
        }
    }
}
