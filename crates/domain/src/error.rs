//! # ドメイン層エラー
//!
//! ハンドラやリポジトリから返される失敗を、レスポンスの分類に必要な粒度で表す。
//! エンベロープへの変換は [`Envelope::from_domain_error`](crate::Envelope::from_domain_error) が行う。

use apibase_shared::{ErrorCode, FieldMessages};
use itertools::Itertools;
use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 引数の形式・組み合わせが不正
    #[error("引数が不正です: {0}")]
    WrongArguments(String),

    /// 認証されていない
    #[error("認証が必要です: {0}")]
    Unauthorized(String),

    /// 権限がない
    #[error("権限がありません: {0}")]
    Forbidden(String),

    /// エンティティが見つからない
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        entity_type: &'static str,
        id:          String,
    },

    /// 入力値の検証に失敗（フィールド → メッセージ列）
    #[error("バリデーションエラー: {}", .0.keys().join(", "))]
    Validation(FieldMessages),

    /// 予期しない内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl DomainError {
    /// 対応するエラーコード
    ///
    /// バリデーションエラーはエラーエンベロープではなく通知として返すため `None`。
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::WrongArguments(_) => Some(ErrorCode::WrongArguments),
            Self::Unauthorized(_) => Some(ErrorCode::Unauthorized),
            Self::Forbidden(_) => Some(ErrorCode::Forbidden),
            Self::NotFound { .. } => Some(ErrorCode::NotFound),
            Self::Validation(_) => None,
            Self::Internal(_) => Some(ErrorCode::InternalError),
        }
    }

    /// レスポンスの HTTP ステータスコード
    pub fn http_status(&self) -> u16 {
        self.error_code().map_or(422, ErrorCode::http_status)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::indexmap;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(DomainError::WrongArguments("x".into()), 400)]
    #[case(DomainError::Unauthorized("x".into()), 401)]
    #[case(DomainError::Forbidden("x".into()), 403)]
    #[case(DomainError::NotFound { entity_type: "Article", id: "1".into() }, 404)]
    #[case(DomainError::Validation(FieldMessages::new()), 422)]
    #[case(DomainError::Internal("x".into()), 500)]
    fn test_http_statusの対応(#[case] error: DomainError, #[case] expected: u16) {
        assert_eq!(error.http_status(), expected);
    }

    #[test]
    fn test_not_foundの表示() {
        let error = DomainError::NotFound {
            entity_type: "Article",
            id:          "42".to_string(),
        };

        assert_eq!(error.to_string(), "Article が見つかりません: 42");
    }

    #[test]
    fn test_validationの表示はフィールド名を列挙する() {
        let error = DomainError::Validation(indexmap! {
            "title".to_string() => vec!["required".to_string()],
            "body".to_string() => vec!["too short".to_string()],
        });

        assert_eq!(error.to_string(), "バリデーションエラー: title, body");
        assert_eq!(error.error_code(), None);
    }
}
