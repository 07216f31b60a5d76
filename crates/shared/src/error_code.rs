//! # エラーコード
//!
//! エラーレスポンスの `code` フィールドに載る、安定した機械可読コード。
//!
//! 形式は `"<HTTP ステータス>-<連番>"`。クライアントはメッセージ文字列ではなく
//! このコードで分岐する。

use strum::{EnumIter, EnumString, IntoStaticStr};

/// 安定したエラーコード
///
/// 各コードは対応する HTTP ステータスとデフォルトメッセージを持つ。
///
/// ## 使用例
///
/// ```
/// use apibase_shared::ErrorCode;
///
/// assert_eq!(ErrorCode::Forbidden.as_str(), "403-001");
/// assert_eq!(ErrorCode::Forbidden.http_status(), 403);
/// assert_eq!("404-001".parse::<ErrorCode>().unwrap(), ErrorCode::NotFound);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumString, EnumIter, strum::Display,
)]
pub enum ErrorCode {
    /// 引数が不正（400）
    #[strum(serialize = "400-001")]
    WrongArguments,
    /// 認証されていない（401）
    #[strum(serialize = "401-001")]
    Unauthorized,
    /// 権限がない（403）
    #[strum(serialize = "403-001")]
    Forbidden,
    /// リソースが存在しない（404）
    #[strum(serialize = "404-001")]
    NotFound,
    /// 内部エラー（500）
    #[strum(serialize = "500-001")]
    InternalError,
}

impl ErrorCode {
    /// ワイヤー上の文字列表現
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// 対応する HTTP ステータスコード
    pub const fn http_status(self) -> u16 {
        match self {
            Self::WrongArguments => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::InternalError => 500,
        }
    }

    /// メッセージ未指定時に使う人間可読メッセージ
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::WrongArguments => "Wrong Arguments",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Resource Not Found",
            Self::InternalError => "Internal Error",
        }
    }
}
