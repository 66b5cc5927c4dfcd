//! # Term Repository Trait
//!
//! 支払条件の保存を抽象化

use async_trait::async_trait;

use crate::domain::entities::term_batch::TermBatch;
use crate::domain::error::ImportError;

/// 保存結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveResult {
    /// 実際に作成された支払条件名（レスポンス順）
    pub created: Vec<String>,
    /// 既に存在したためスキップされた件数
    pub duplicate_count: usize,
    /// 失敗した項目の警告メッセージ
    pub warnings: Vec<String>,
}

impl SaveResult {
    /// 新しい保存結果を作成
    pub fn new(created: Vec<String>, duplicate_count: usize, warnings: Vec<String>) -> Self {
        Self {
            created,
            duplicate_count,
            warnings,
        }
    }

    /// 作成された件数
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    /// 警告なしで完了したかチェックします。
    ///
    /// 重複スキップは失敗として扱わない。
    ///
    /// # 例
    ///
    /// ```
    /// use termsync::domain::repositories::term_repository::SaveResult;
    ///
    /// let clean = SaveResult::new(vec!["Net 30".to_string()], 1, vec![]);
    /// assert!(clean.is_clean());
    ///
    /// let partial = SaveResult::new(vec![], 0, vec!["Failed to add term - bad".to_string()]);
    /// assert!(!partial.is_clean());
    /// ```
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// 支払条件リポジトリ
///
/// バッチ1回分を外部サービスに保存する
#[async_trait]
pub trait TermRepository: Send + Sync {
    /// バッチを保存
    ///
    /// # Arguments
    ///
    /// * `batch` - 保存するバッチ
    ///
    /// # Returns
    ///
    /// 実際に作成された支払条件の記録（入力より短い場合がある）
    ///
    /// # Errors
    ///
    /// 接続・送信・レスポンス解析に失敗した場合にエラーを返す。
    /// 項目単位の失敗はエラーにしない。
    async fn save_terms(&self, batch: &TermBatch) -> Result<SaveResult, ImportError>;
}
