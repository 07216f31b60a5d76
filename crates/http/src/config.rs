//! # API 設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! | 変数 | 既定値 |
//! |------|--------|
//! | `API_HOST` | `0.0.0.0` |
//! | `API_PORT` | `3000` |
//! | `API_VERSION` | `1` |
//! | `API_PAGINATION_PER_PAGE_DEFAULT` | `20` |
//! | `API_PAGINATION_PER_PAGE_MAX` | `50` |
//! | `ENVIRONMENT` | `development` |

use std::{env, str::FromStr};

use apibase_domain::{
    PaginationConfig,
    context::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
};
use strum::{Display, EnumString, IntoStaticStr};
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 値を解釈できない
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// 実行環境
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:        String,
    /// ポート番号
    pub port:        u16,
    /// サポートする API バージョン（`api-version` ヘッダーと照合する）
    pub api_version: String,
    /// ページサイズの既定値と上限
    pub pagination:  PaginationConfig,
    /// 実行環境
    pub environment: Environment,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストでは環境変数の代わりにマップを渡す。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default_page_size = parse_or(&lookup, "API_PAGINATION_PER_PAGE_DEFAULT", DEFAULT_PAGE_SIZE)?;
        let max_page_size = parse_or(&lookup, "API_PAGINATION_PER_PAGE_MAX", MAX_PAGE_SIZE)?;

        Ok(Self {
            host:        lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port:        parse_or(&lookup, "API_PORT", 3000)?,
            api_version: lookup("API_VERSION")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "1".to_string()),
            pagination:  PaginationConfig::new(default_page_size, max_page_size),
            environment: parse_or(&lookup, "ENVIRONMENT", Environment::default())?,
        })
    }

    /// `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
