//! # リクエストごとのページネーション状態
//!
//! クエリパラメータからカーソル、ページサイズ、要求された埋め込みを読み取る。
//! 値はリクエストの開始時に一度だけデコード・正規化し、以降は変更しない。
//!
//! ## クエリパラメータ
//!
//! | パラメータ | 意味 |
//! |-----------|------|
//! | `cursor` / `current` | 現在のカーソル（`cursor` を優先） |
//! | `previous` | 前ページのカーソル（そのまま返す） |
//! | `limit` | ページサイズ（`[1, max]` にクランプ） |
//! | `embed` | カンマ区切りの埋め込みリレーション |
//!
//! 不正な値はエラーにせず、未指定として扱う。

use apibase_shared::{Cursor, Cursors};
use serde::Deserialize;

use crate::embed::{self, ActiveEmbeds, EmbedSpec};

/// ページサイズの既定値
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// ページサイズの上限
pub const MAX_PAGE_SIZE: u32 = 50;

/// ページサイズの設定
///
/// `new` の時点で `1 <= default <= max` に正規化する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    default_page_size: u32,
    max_page_size:     u32,
}

impl PaginationConfig {
    pub fn new(default_page_size: u32, max_page_size: u32) -> Self {
        let max_page_size = max_page_size.max(1);
        Self {
            default_page_size: default_page_size.clamp(1, max_page_size),
            max_page_size,
        }
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }

    /// `limit` パラメータから適用するページサイズを決める
    ///
    /// 数値でない、または 1 未満の場合は既定値を使い、上限を超える場合は上限に丸める。
    pub fn page_size(&self, limit: Option<&str>) -> u32 {
        limit
            .and_then(|limit| limit.trim().parse::<i64>().ok())
            .filter(|requested| *requested >= 1)
            .map_or(self.default_page_size, |requested| {
                u32::try_from(requested.min(i64::from(self.max_page_size)))
                    .unwrap_or(self.max_page_size)
            })
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }
}

/// 生のクエリパラメータ
///
/// 型の不一致で抽出が失敗しないよう、すべて文字列で受け取る。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageQuery {
    pub cursor:   Option<String>,
    pub current:  Option<String>,
    pub previous: Option<String>,
    pub limit:    Option<String>,
    pub embed:    Option<String>,
}

/// リクエストごとのレスポンス構築コンテキスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseContext {
    current:          Option<Cursor>,
    previous:         Option<Cursor>,
    page_size:        u32,
    requested_embeds: Vec<String>,
}

impl ResponseContext {
    /// クエリパラメータから作成する
    pub fn from_query(query: &PageQuery, config: &PaginationConfig) -> Self {
        let current = Cursor::decode_optional(query.cursor.as_deref())
            .or_else(|| Cursor::decode_optional(query.current.as_deref()));

        Self {
            current,
            previous: Cursor::decode_optional(query.previous.as_deref()),
            page_size: config.page_size(query.limit.as_deref()),
            requested_embeds: query
                .embed
                .as_deref()
                .map(embed::parse_requested)
                .unwrap_or_default(),
        }
    }

    /// パラメータなしのコンテキスト
    pub fn new(config: &PaginationConfig) -> Self {
        Self::from_query(&PageQuery::default(), config)
    }

    /// 現在のカーソル
    pub fn current(&self) -> Option<Cursor> {
        self.current
    }

    /// 前ページのカーソル
    pub fn previous(&self) -> Option<Cursor> {
        self.previous
    }

    /// リポジトリに渡す下限 ID（この値より大きい ID を取得する）
    pub fn after(&self) -> Option<u64> {
        self.current.map(Cursor::position)
    }

    /// 適用するページサイズ
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// クライアントが要求した埋め込み（未検証）
    pub fn requested_embeds(&self) -> &[String] {
        &self.requested_embeds
    }

    /// エンドポイントの定義と突き合わせて埋め込み集合を解決する
    pub fn resolve_embeds(&self, spec: &EmbedSpec) -> ActiveEmbeds {
        spec.resolve_requested(&self.requested_embeds)
    }

    /// レスポンスに載せるカーソルの組
    ///
    /// `next` はページ最後のレコードの位置。空のページでは `None` を渡す。
    pub fn cursors(&self, next: Option<Cursor>) -> Cursors {
        Cursors {
            current:  self.current.map(Cursor::encode),
            previous: self.previous.map(Cursor::encode),
            next:     next.map(Cursor::encode),
        }
    }
}
