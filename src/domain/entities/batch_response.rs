//! # BatchResponse Value Object
//!
//! バッチレスポンスの項目ごとの結果

/// 成功を表すステータスコード
pub const STATUS_SUCCESS: &str = "0";

/// 既に存在することを表すステータスコード
pub const STATUS_ALREADY_EXISTS: &str = "3100";

/// 項目ごとの結果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemResult {
    /// `requestID` 属性（リクエスト側で付与した連番）
    pub request_id: Option<String>,
    /// `statusCode` 属性
    pub status_code: String,
    /// `statusSeverity` 属性
    pub status_severity: Option<String>,
    /// `statusMessage` 属性
    pub status_message: Option<String>,
    /// 作成された支払条件名（成功時のみ）
    pub name: Option<String>,
}

impl ItemResult {
    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_SUCCESS
    }

    pub fn is_already_exists(&self) -> bool {
        self.status_code == STATUS_ALREADY_EXISTS
    }
}

/// パース済みのバッチレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResponse {
    items: Vec<ItemResult>,
}

impl BatchResponse {
    pub fn new(items: Vec<ItemResult>) -> Self {
        Self { items }
    }

    /// レスポンス順の結果
    pub fn items(&self) -> &[ItemResult] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_result_status() {
        let ok = ItemResult {
            status_code: "0".to_string(),
            ..Default::default()
        };
        assert!(ok.is_success());
        assert!(!ok.is_already_exists());

        let dup = ItemResult {
            status_code: "3100".to_string(),
            ..Default::default()
        };
        assert!(dup.is_already_exists());
        assert!(!dup.is_success());
    }
}
