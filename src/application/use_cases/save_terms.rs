//! # Save Terms Use Case
//!
//! 支払条件保存ユースケース

use std::sync::Arc;

use crate::domain::entities::payment_term::PaymentTerm;
use crate::domain::entities::term_batch::TermBatch;
use crate::domain::error::ImportError;
use crate::domain::repositories::term_repository::{SaveResult, TermRepository};

/// 保存ユースケース
///
/// 支払条件を1つのバッチにまとめて保存する（リトライはしない）
pub struct SaveTermsUseCase<R: TermRepository> {
    repository: Arc<R>,
}

impl<R: TermRepository> SaveTermsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `repository` - 支払条件リポジトリ
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// 支払条件を保存
    ///
    /// # Errors
    ///
    /// 支払条件が空の場合は外部呼び出しの前に `NoValidTerms` を返す。
    /// 保存に失敗した場合はリポジトリのエラーをそのまま返す
    pub async fn execute(&self, terms: Vec<PaymentTerm>) -> Result<SaveResult, ImportError> {
        let batch = TermBatch::new(terms);
        if batch.is_empty() {
            return Err(ImportError::NoValidTerms);
        }

        self.repository.save_terms(&batch).await
    }
}
