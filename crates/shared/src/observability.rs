//! # ログ・トレーシング
//!
//! サブスクライバの初期化設定。`observability` feature を有効にすると、
//! サブスクライバの登録と、リクエスト単位のスパン・Request ID の生成も使える。
//!
//! | 変数 | 既定値 | 説明 |
//! |------|--------|------|
//! | `LOG_FORMAT` | `pretty` | `json` / `pretty` |
//! | `RUST_LOG` | `info,apibase=debug` | ログレベルのフィルタ |

use strum::EnumString;

/// 既定のログフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,apibase=debug";

/// ログの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// 1 イベント 1 行の JSON
    Json,
    #[default]
    Pretty,
}

/// トレーシングの初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// 起動ログに出すサービス名
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// 環境変数 `LOG_FORMAT` から読み込む
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::from_lookup(service_name, |name| std::env::var(name).ok())
    }

    /// 任意の参照関数から読み込む
    ///
    /// 読めない値は Pretty として扱う。サブスクライバの登録前なので
    /// 警告は標準エラーに書く。
    pub fn from_lookup(
        service_name: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let log_format = match lookup("LOG_FORMAT") {
            None => LogFormat::default(),
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                eprintln!("LOG_FORMAT={raw:?} は解釈できないため pretty で出力します");
                LogFormat::Pretty
            }),
        };
        Self::new(service_name, log_format)
    }
}

/// グローバルサブスクライバを登録する
///
/// `tracing_error::ErrorLayer` も登録し、インフラ層のエラーが
/// 発生箇所の `SpanTrace` を持てるようにする。
#[cfg(feature = "observability")]
pub fn init_tracing(config: TracingConfig) {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let output = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .with(tracing_error::ErrorLayer::default())
        .init();

    tracing::info!(
        service = %config.service_name,
        log.format = %config.log_format,
        "ログ出力を開始しました"
    );
}

/// Request ID（UUID v7）の生成器
///
/// `SetRequestIdLayer` に渡す。クライアントが `X-Request-Id` を付けてきた場合は
/// 生成せずその値を使う。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let value = http::HeaderValue::from_str(&uuid::Uuid::now_v7().to_string()).ok()?;
        Some(tower_http::request_id::RequestId::new(value))
    }
}

/// リクエスト単位のスパン
///
/// `TraceLayer::make_span_with` に渡す。`SetRequestIdLayer` より内側に置くと
/// 採番済みの Request ID を拾える。`api-version` ヘッダーも記録する。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let header = |name: &str| {
        request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-")
            .to_owned()
    };

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        query = request.uri().query().unwrap_or_default(),
        request_id = %header("x-request-id"),
        api_version = %header("api-version"),
    )
}
