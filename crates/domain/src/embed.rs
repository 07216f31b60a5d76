//! # 埋め込みリレーションの解決
//!
//! クライアントが `embed` パラメータで要求したリレーションと、エンドポイントが
//! 許可・強制するリレーションを突き合わせ、実際に埋め込む集合を決める。
//!
//! ## 解決規則
//!
//! ```text
//! active = (possible ∩ requested) ∪ permanent
//! ```
//!
//! - `possible` にない名前は黙って無視する（エラーにしない）
//! - `permanent` は要求されなくても、`possible` になくても必ず含める
//! - 順序は `possible` の宣言順、続いて `permanent` のみに現れるもの
//!
//! ## ドット区切りのパス
//!
//! `comments.author` のようなパスは「comments を埋め込み、その中で author を
//! 埋め込む」ことを意味する。トランスフォーマーにはドット区切りのまま渡し、
//! 内部のスコープ名としては `.` を `_` に置き換えた `comments_author` を使う。

use itertools::Itertools;

/// エンドポイントごとの埋め込み定義
///
/// ## 使用例
///
/// ```
/// use apibase_domain::EmbedSpec;
///
/// const ARTICLE_EMBEDS: EmbedSpec = EmbedSpec::new(&["author", "comments"], &["tags"]);
///
/// let active = ARTICLE_EMBEDS.resolve("comments,unknown");
/// assert_eq!(active.paths(), ["comments", "tags"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmbedSpec {
    possible:  &'static [&'static str],
    permanent: &'static [&'static str],
}

impl EmbedSpec {
    /// 埋め込みを持たないエンドポイント用
    pub const NONE: Self = Self::new(&[], &[]);

    /// 許可リストと強制リストから作成する
    pub const fn new(
        possible: &'static [&'static str],
        permanent: &'static [&'static str],
    ) -> Self {
        Self {
            possible,
            permanent,
        }
    }

    /// クライアントが要求できるリレーション（宣言順）
    pub const fn possible(&self) -> &'static [&'static str] {
        self.possible
    }

    /// 常に埋め込むリレーション
    pub const fn permanent(&self) -> &'static [&'static str] {
        self.permanent
    }

    /// カンマ区切りの要求値から埋め込み集合を解決する
    pub fn resolve(&self, requested_csv: &str) -> ActiveEmbeds {
        self.resolve_requested(&parse_requested(requested_csv))
    }

    /// 分割済みの要求値から埋め込み集合を解決する
    pub fn resolve_requested<S: AsRef<str>>(&self, requested: &[S]) -> ActiveEmbeds {
        let paths = self
            .possible
            .iter()
            .filter(|path| requested.iter().any(|r| r.as_ref() == **path))
            .chain(self.permanent.iter())
            .unique()
            .map(|path| (*path).to_string())
            .collect();

        ActiveEmbeds::from_paths(paths)
    }
}

/// `embed` パラメータをリレーション名のリストに分割する
///
/// 前後の空白は取り除き、空要素は捨てる。
pub fn parse_requested(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// パスを内部スコープ名に変換する（`.` → `_`）
pub fn sanitize_scope_name(path: &str) -> String {
    path.replace('.', "_")
}

/// 解決済みの埋め込み集合
///
/// リクエストごとに一度だけ計算し、以降は変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveEmbeds {
    paths:       Vec<String>,
    scope_names: Vec<String>,
}

impl ActiveEmbeds {
    /// 空の埋め込み集合
    pub fn none() -> Self {
        Self::default()
    }

    fn from_paths(paths: Vec<String>) -> Self {
        let scope_names = paths.iter().map(|path| sanitize_scope_name(path)).collect();
        Self { paths, scope_names }
    }

    /// ドット区切りのパス（トランスフォーマーに渡す形）
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// `.` を `_` に置き換えたスコープ名（`paths` と同じ順序）
    pub fn scope_names(&self) -> &[String] {
        &self.scope_names
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// パスが集合に含まれるか
    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// この階層で埋め込むリレーション名
    ///
    /// 各パスの先頭セグメントを重複なく順に返す。`comments.author` だけが
    /// 含まれる場合も `comments` は埋め込み対象になる。
    pub fn relations(&self) -> Vec<&str> {
        self.paths
            .iter()
            .map(|path| path.split('.').next().unwrap_or(path))
            .unique()
            .collect()
    }

    /// この階層で `relation` を埋め込むか
    ///
    /// リポジトリでの事前読み込み（eager load）の判断に使う。
    pub fn includes_relation(&self, relation: &str) -> bool {
        self.relations().contains(&relation)
    }

    /// `relation` の下位階層の埋め込み集合
    ///
    /// `["comments", "comments.author"]` に対して `nested("comments")` は
    /// `["author"]` を返す。
    pub fn nested(&self, relation: &str) -> ActiveEmbeds {
        let paths = self
            .paths
            .iter()
            .filter_map(|path| {
                path.strip_prefix(relation)
                    .and_then(|rest| rest.strip_prefix('.'))
            })
            .filter(|rest| !rest.is_empty())
            .unique()
            .map(String::from)
            .collect();

        Self::from_paths(paths)
    }
}
