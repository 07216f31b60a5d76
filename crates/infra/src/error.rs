//! # リポジトリのエラー
//!
//! 種別（[`InfraErrorKind`]）と、生成した時点の [`SpanTrace`] を組にして持つ。
//! 種別ごとのコンストラクタを通せば SpanTrace は自動で記録される。
//! HTTP 層では種別でログの重さを変え、レスポンスは [`DomainError`] に
//! 変換してから組み立てる。

use std::fmt;

use apibase_domain::DomainError;
use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// リポジトリ操作の失敗
///
/// ```ignore
/// if let InfraErrorKind::NotFound { entity, id } = err.kind() {
///     tracing::debug!(entity, id, "対象なし");
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// ID に対応するレコードがない
    #[error("{entity}(id={id}) は存在しません")]
    NotFound { entity: &'static str, id: u64 },

    /// 保存しようとした ID が使用済み
    #[error("{entity}(id={id}) は使用済みの ID です")]
    Conflict { entity: &'static str, id: u64 },

    /// 上記以外（ID の枯渇など）
    #[error("リポジトリで予期しないエラーが発生しました: {0}")]
    Unexpected(String),
}

impl InfraError {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Self::capture(InfraErrorKind::NotFound { entity, id })
    }

    pub fn conflict(entity: &'static str, id: u64) -> Self {
        Self::capture(InfraErrorKind::Conflict { entity, id })
    }

    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::Unexpected(detail.into()))
    }

    fn capture(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// エラー生成時点のスパン
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    pub fn into_parts(self) -> (InfraErrorKind, SpanTrace) {
        (self.kind, self.span_trace)
    }

    /// 呼び出し側の想定内の失敗か（Unexpected 以外）
    pub fn is_expected(&self) -> bool {
        !matches!(self.kind, InfraErrorKind::Unexpected(_))
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

/// SpanTrace は変換で落ちる
impl From<InfraError> for DomainError {
    fn from(err: InfraError) -> Self {
        match err.kind {
            InfraErrorKind::NotFound { entity, id } => Self::NotFound {
                entity_type: entity,
                id:          id.to_string(),
            },
            InfraErrorKind::Conflict { entity, id } => {
                Self::WrongArguments(format!("{entity}(id={id}) は既に存在します"))
            }
            InfraErrorKind::Unexpected(detail) => Self::Internal(detail),
        }
    }
}
