//! # Import Configuration DTO
//!
//! インポート設定のData Transfer Object

/// 既定のシート名
pub const DEFAULT_SHEET_NAME: &str = "payment_terms";

/// インポート設定
///
/// 読み込みと保存のユースケースが必要とする設定情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// 読み込むシート名
    pub sheet_name: String,
    /// 保存せずにリクエストだけ組み立てる
    pub dry_run: bool,
}

impl ImportConfig {
    /// 新しいインポート設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use termsync::application::dto::import_config::ImportConfig;
    ///
    /// let config = ImportConfig::new("payment_terms".to_string(), false);
    ///
    /// assert_eq!(config.sheet_name, "payment_terms");
    /// assert!(!config.dry_run);
    /// ```
    pub fn new(sheet_name: String, dry_run: bool) -> Self {
        Self {
            sheet_name,
            dry_run,
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME.to_string(), false)
    }
}
