//! # 通知レスポンス
//!
//! 処理結果を success / info / warning / error に分類し、人間可読メッセージと
//! 一緒に返すレスポンス型。機械可読コードを持つ [`ErrorResponse`](crate::ErrorResponse)
//! とは別物で、主にバリデーション結果や操作完了の通知に使う。
//!
//! ## JSON 形式
//!
//! ```json
//! {
//!   "notification": {
//!     "result": "error",
//!     "style": "danger",
//!     "messages": ["required", "too long"],
//!     "message": "required<br>too long"
//!   },
//!   "errors": { "email": ["required"], "name": ["too long"] }
//! }
//! ```
//!
//! `errors` には呼び出し側が渡したペイロード（単一メッセージ、リスト、
//! フィールド → メッセージ列のマップ）をそのまま載せる。

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// `message` を組み立てるときの区切り文字
pub const MESSAGE_SEPARATOR: &str = "<br>";

/// フィールド名 → メッセージ列（挿入順を保持する）
pub type FieldMessages = IndexMap<String, Vec<String>>;

/// 通知の分類
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NotificationResult {
    Success,
    Info,
    Warning,
    Error,
}

/// UI 向けの表示スタイル
///
/// クライアントが表示に使う便宜上の射影で、構造上は必須ではない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStyle {
    Success,
    Info,
    Warning,
    Danger,
}

impl NotificationResult {
    /// 分類に対応する表示スタイル
    pub const fn style(self) -> NotificationStyle {
        match self {
            Self::Error => NotificationStyle::Danger,
            Self::Warning => NotificationStyle::Warning,
            Self::Info => NotificationStyle::Info,
            Self::Success => NotificationStyle::Success,
        }
    }
}

/// 通知のもとになったペイロード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotificationErrors {
    /// 単一メッセージ
    Message(String),
    /// メッセージのリスト
    Messages(Vec<String>),
    /// フィールドごとのメッセージ（バリデーション結果）
    Fields(FieldMessages),
}

impl NotificationErrors {
    /// メッセージを 1 本の順序付きリストに平坦化する
    ///
    /// フィールドマップはフィールドの挿入順、各フィールド内はメッセージ順で並ぶ。
    pub fn flatten(&self) -> Vec<String> {
        match self {
            Self::Message(message) => vec![message.clone()],
            Self::Messages(messages) => messages.clone(),
            Self::Fields(fields) => fields.values().flatten().cloned().collect(),
        }
    }
}

impl From<&str> for NotificationErrors {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for NotificationErrors {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<Vec<String>> for NotificationErrors {
    fn from(messages: Vec<String>) -> Self {
        Self::Messages(messages)
    }
}

impl From<FieldMessages> for NotificationErrors {
    fn from(fields: FieldMessages) -> Self {
        Self::Fields(fields)
    }
}

/// 通知本体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub result:   NotificationResult,
    pub style:    NotificationStyle,
    /// 平坦化したメッセージ
    pub messages: Vec<String>,
    /// `messages` を [`MESSAGE_SEPARATOR`] で連結した文字列
    pub message:  String,
}

/// 通知レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub notification: Notification,
    pub errors:       NotificationErrors,
}

impl NotificationResponse {
    /// 分類とペイロードから通知レスポンスを作成する
    ///
    /// ## 使用例
    ///
    /// ```
    /// use apibase_shared::{NotificationResponse, NotificationResult, NotificationStyle};
    ///
    /// let response = NotificationResponse::new(NotificationResult::Success, "保存しました");
    /// assert_eq!(response.notification.style, NotificationStyle::Success);
    /// assert_eq!(response.notification.message, "保存しました");
    /// ```
    pub fn new(result: NotificationResult, errors: impl Into<NotificationErrors>) -> Self {
        let errors = errors.into();
        let messages = errors.flatten();
        let message = messages.join(MESSAGE_SEPARATOR);

        Self {
            notification: Notification {
                result,
                style: result.style(),
                messages,
                message,
            },
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use indexmap::indexmap;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn validation_errors() -> FieldMessages {
        indexmap! {
            "email".to_string() => vec!["required".to_string()],
            "name".to_string() => vec!["too long".to_string(), "invalid".to_string()],
        }
    }

    #[rstest]
    #[case(NotificationResult::Error, NotificationStyle::Danger)]
    #[case(NotificationResult::Warning, NotificationStyle::Warning)]
    #[case(NotificationResult::Info, NotificationStyle::Info)]
    #[case(NotificationResult::Success, NotificationStyle::Success)]
    fn test_分類ごとの表示スタイル(
        #[case] result: NotificationResult,
        #[case] expected: NotificationStyle,
    ) {
        assert_eq!(result.style(), expected);
    }

    #[test]
    fn test_フィールドマップは挿入順に平坦化される() {
        let response = NotificationResponse::new(NotificationResult::Error, validation_errors());

        assert_eq!(
            response.notification.messages,
            vec!["required", "too long", "invalid"]
        );
        assert_eq!(
            response.notification.message,
            "required<br>too long<br>invalid"
        );
    }

    #[test]
    fn test_挿入順はフィールド名の辞書順に依存しない() {
        let fields = indexmap! {
            "zip".to_string() => vec!["z".to_string()],
            "address".to_string() => vec!["a".to_string()],
        };

        assert_eq!(NotificationErrors::from(fields).flatten(), vec!["z", "a"]);
    }

    #[test]
    fn test_jsonの形状() {
        let response = NotificationResponse::new(NotificationResult::Error, validation_errors());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "notification": {
                    "result": "error",
                    "style": "danger",
                    "messages": ["required", "too long", "invalid"],
                    "message": "required<br>too long<br>invalid"
                },
                "errors": {
                    "email": ["required"],
                    "name": ["too long", "invalid"]
                }
            })
        );
    }

    #[test]
    fn test_単一メッセージはそのままerrorsに載る() {
        let response = NotificationResponse::new(NotificationResult::Info, "メンテナンス予定があります");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["errors"], "メンテナンス予定があります");
        assert_eq!(json["notification"]["messages"], serde_json::json!(["メンテナンス予定があります"]));
    }

    #[test]
    fn test_空のリストでは空のmessageになる() {
        let response = NotificationResponse::new(NotificationResult::Success, Vec::<String>::new());

        assert!(response.notification.messages.is_empty());
        assert_eq!(response.notification.message, "");
    }

    #[test]
    fn test_分類は大文字小文字を区別せずパースできる() {
        assert_eq!(
            "WARNING".parse::<NotificationResult>().unwrap(),
            NotificationResult::Warning
        );
    }
}
