//! # ページネーション付きレスポンス
//!
//! カーソルベースのページネーションに対応したコレクションのレスポンス型。

use serde::{Deserialize, Serialize};

/// ページネーション付きレスポンス
///
/// `ApiResponse<T>` が単一リソース用であるのに対し、
/// `PaginatedResponse<T>` はリスト + ページネーションブロックの形式。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "data": [...],
///   "pagination": {
///     "cursors": { "current": "MTA=", "previous": null, "next": "MjA=" },
///     "pageSize": 10,
///     "count": 10
///   }
/// }
/// ```
///
/// `cursors.next` が `null` の場合は空のページを意味する。
/// 件数は返したページの `count` のみで、全件数（total）は持たない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data:       Vec<T>,
    pub pagination: Pagination,
}

/// ページネーションブロック
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub cursors:   Cursors,
    /// リクエストに適用されたページサイズ
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    /// このページに含まれる件数
    pub count:     usize,
}

/// エンコード済みカーソルの組
///
/// - `current`: クライアントが指定したカーソル
/// - `previous`: クライアントが指定した前ページのカーソル（そのまま返す）
/// - `next`: このページ最後のレコードの位置
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cursors {
    pub current:  Option<String>,
    pub previous: Option<String>,
    pub next:     Option<String>,
}

impl<T> PaginatedResponse<T> {
    /// データとカーソルから作成する
    ///
    /// `count` はデータ件数から算出する。
    pub fn new(data: Vec<T>, cursors: Cursors, page_size: u32) -> Self {
        let count = data.len();
        Self {
            data,
            pagination: Pagination {
                cursors,
                page_size,
                count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ページネーションブロックの形状() {
        let response = PaginatedResponse::new(
            vec![1, 2],
            Cursors {
                current:  Some("MQ==".to_string()),
                previous: None,
                next:     Some("Mg==".to_string()),
            },
            20,
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "data": [1, 2],
                "pagination": {
                    "cursors": { "current": "MQ==", "previous": null, "next": "Mg==" },
                    "pageSize": 20,
                    "count": 2
                }
            })
        );
    }

    #[test]
    fn test_空のデータではcountが0になる() {
        let response: PaginatedResponse<i32> = PaginatedResponse::new(vec![], Cursors::default(), 5);

        assert_eq!(response.pagination.count, 0);
        assert_eq!(response.pagination.cursors.next, None);
    }

    #[test]
    fn test_totalフィールドを持たない() {
        let response: PaginatedResponse<i32> = PaginatedResponse::new(vec![1], Cursors::default(), 5);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["pagination"].get("total").is_none());
    }
}
