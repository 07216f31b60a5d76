//! # ApiContext エクストラクタ
//!
//! クエリパラメータから [`ResponseContext`] を作る。
//! パラメータの不正でリクエストを拒否することはない（fail-open）。

use std::{convert::Infallible, ops::Deref};

use apibase_domain::{PageQuery, PaginationConfig, ResponseContext};
use axum::{
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};

/// リクエストごとのレスポンス構築コンテキスト
///
/// ステートから [`PaginationConfig`] を取り出せる必要がある:
///
/// ```rust,ignore
/// impl FromRef<AppState> for PaginationConfig {
///     fn from_ref(state: &AppState) -> Self {
///         state.pagination
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiContext(pub ResponseContext);

impl Deref for ApiContext {
    type Target = ResponseContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for ApiContext
where
    PaginationConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = PaginationConfig::from_ref(state);
        let query = match Query::<PageQuery>::try_from_uri(&parts.uri) {
            Ok(Query(query)) => query,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "クエリパラメータを解釈できないため既定値を使います");
                PageQuery::default()
            }
        };

        Ok(Self(ResponseContext::from_query(&query, &config)))
    }
}
