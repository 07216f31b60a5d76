//! # アプリケーション構築
//!
//! State を受け取り、ルーターとミドルウェアを組み立てる。
//! `main.rs` は設定の読み込みとサーバー起動に集中する。

use apibase_http::{
    ApiConfig,
    middleware::{ApiVersionState, cors_layer, require_api_version},
};
use apibase_shared::observability::{MakeRequestUuidV7, make_request_span};
use axum::{Router, middleware::from_fn_with_state, routing::get};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    AppState,
    create_article,
    delete_article,
    get_article,
    list_article_comments,
    list_articles,
};

/// ルーターを構築する
pub fn build_app(config: &ApiConfig, state: AppState) -> Router {
    let version_state = ApiVersionState::new(&config.api_version);

    Router::new()
        .route("/articles", get(list_articles).post(create_article))
        .route("/articles/{id}", get(get_article).delete(delete_article))
        .route("/articles/{id}/comments", get(list_article_comments))
        .layer(from_fn_with_state(version_state, require_api_version))
        .with_state(state)
        // レイヤー順序（下から上に適用、リクエストは上から下に通過）:
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成
        // 2. TraceLayer: request_id を含むスパンを作る
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 4. CORS: プリフライトはバージョン検証より前に応答する
        .layer(cors_layer())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
