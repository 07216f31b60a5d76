//! # ページネーションカーソル
//!
//! ページの位置（レコード ID）を不透明なトークンに変換する。
//!
//! ## 形式
//!
//! 位置の 10 進文字列を base64（標準アルファベット、パディングあり）で
//! エンコードする。`42` は `"NDI="` になる。
//!
//! 暗号化ではない。クライアントがカーソルをオフセットとして扱わないように
//! 不透明化しているだけで、アクセス制御には使わない。
//!
//! ## デコードの方針
//!
//! カーソルはサーバーへのヒントに過ぎないため、壊れたトークンはエラーにせず
//! 「位置なし」（`None`）として扱う。位置 `0` とは区別される。

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// ページネーション位置
///
/// 単調増加する整数位置（通常はレコード ID）を保持する。
///
/// ## 使用例
///
/// ```
/// use apibase_shared::Cursor;
///
/// let token = Cursor::new(42).encode();
/// assert_eq!(token, "NDI=");
/// assert_eq!(Cursor::decode(&token), Some(Cursor::new(42)));
/// assert_eq!(Cursor::decode("not a cursor"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(u64);

impl Cursor {
    /// 位置からカーソルを作成する
    pub const fn new(position: u64) -> Self {
        Self(position)
    }

    /// カーソルが指す位置
    pub const fn position(self) -> u64 {
        self.0
    }

    /// 不透明なトークンにエンコードする
    pub fn encode(self) -> String {
        BASE64.encode(self.0.to_string())
    }

    /// トークンをデコードする
    ///
    /// 空文字列、base64 として不正、UTF-8 でない、非負整数でない場合は
    /// すべて `None` を返す。
    pub fn decode(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let bytes = BASE64.decode(token).ok()?;
        let decimal = std::str::from_utf8(&bytes).ok()?;
        decimal.trim().parse::<u64>().ok().map(Self)
    }

    /// 省略可能なトークンをデコードする
    pub fn decode_optional(token: Option<&str>) -> Option<Self> {
        token.and_then(Self::decode)
    }
}

impl From<u64> for Cursor {
    fn from(position: u64) -> Self {
        Self::new(position)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "MA==")]
    #[case(1, "MQ==")]
    #[case(42, "NDI=")]
    #[case(1234, "MTIzNA==")]
    fn test_encodeは10進文字列をbase64にする(#[case] position: u64, #[case] expected: &str) {
        assert_eq!(Cursor::new(position).encode(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(99_999)]
    #[case(u64::MAX)]
    fn test_encodeしたトークンは元の位置にデコードされる(#[case] position: u64) {
        let token = Cursor::new(position).encode();

        assert_eq!(Cursor::decode(&token), Some(Cursor::new(position)));
    }

    #[rstest]
    #[case("", "空文字列")]
    #[case("   ", "空白のみ")]
    #[case("!!!", "base64 として不正")]
    #[case("YWJj", "数値でない（abc）")]
    #[case("LTE=", "負数（-1）")]
    #[case("/w==", "UTF-8 でない")]
    #[case("MS41", "小数（1.5）")]
    fn test_decodeは壊れたトークンを位置なしにする(#[case] token: &str, #[case] _reason: &str) {
        assert_eq!(Cursor::decode(token), None);
    }

    #[test]
    fn test_位置0は位置なしと区別される() {
        assert_eq!(Cursor::decode("MA=="), Some(Cursor::new(0)));
    }

    #[test]
    fn test_decode_optionalはnoneをそのまま返す() {
        assert_eq!(Cursor::decode_optional(None), None);
        assert_eq!(Cursor::decode_optional(Some("NDI=")), Some(Cursor::new(42)));
    }

    #[test]
    fn test_displayはエンコード済みトークンを出力する() {
        assert_eq!(Cursor::new(42).to_string(), "NDI=");
    }
}
