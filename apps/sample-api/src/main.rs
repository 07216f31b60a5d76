//! # ApiBase サンプル API サーバー
//!
//! インメモリのリポジトリで記事 API を提供する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `API_VERSION` | No | サポートする API バージョン（デフォルト: `1`） |
//! | `API_PAGINATION_PER_PAGE_DEFAULT` | No | 既定のページサイズ |
//! | `API_PAGINATION_PER_PAGE_MAX` | No | ページサイズの上限 |
//! | `ENVIRONMENT` | No | `production` 以外では初期データを投入する |
//! | `LOG_FORMAT` | No | `json` で JSON ログ |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p apibase-sample-api
//! ```

use std::net::SocketAddr;

use apibase_http::{ApiConfig, Environment};
use apibase_sample_api::{AppState, build_app, seed};
use apibase_shared::observability::TracingConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("sample-api");
    apibase_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "sample-api").entered();

    let config = ApiConfig::from_env()?;
    tracing::info!(
        environment = %config.environment,
        api_version = %config.api_version,
        "サンプル API を起動します: {}",
        config.bind_addr()
    );

    let state = AppState::in_memory(config.pagination);
    if config.environment != Environment::Production {
        seed::seed(&state).await?;
    }

    let app = build_app(&config, state);

    let addr: SocketAddr = config.bind_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("サンプル API が起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
