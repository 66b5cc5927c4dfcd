//! # Import Terms Use Case
//!
//! Excelから読み込んでQuickBooksに保存するまでの全体フロー

use std::path::Path;
use std::sync::Arc;

use crate::application::dto::import_config::ImportConfig;
use crate::application::observer::ImportObserver;
use crate::domain::entities::payment_term::PaymentTerm;
use crate::domain::error::ImportError;
use crate::domain::repositories::term_repository::TermRepository;
use crate::domain::repositories::term_source::TermSource;

use super::read_terms::ReadTermsUseCase;
use super::save_terms::SaveTermsUseCase;

/// インポート結果のサマリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// 送信した支払条件の数
    pub requested: usize,
    /// 実際に作成された支払条件名
    pub created: Vec<String>,
    /// 既に存在した件数
    pub duplicate_count: usize,
    /// 項目ごとの警告
    pub warnings: Vec<String>,
}

/// インポートユースケース
pub struct ImportTermsUseCase<S: TermSource, R: TermRepository> {
    read_use_case: ReadTermsUseCase<S>,
    save_use_case: SaveTermsUseCase<R>,
    observer: Arc<dyn ImportObserver>,
}

impl<S: TermSource, R: TermRepository> ImportTermsUseCase<S, R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `source` - 読み込み元
    /// * `repository` - 保存先
    /// * `observer` - 進捗通知先
    pub fn new(source: Arc<S>, repository: Arc<R>, observer: Arc<dyn ImportObserver>) -> Self {
        Self {
            read_use_case: ReadTermsUseCase::new(source),
            save_use_case: SaveTermsUseCase::new(repository),
            observer,
        }
    }

    /// 読み込みと検証だけを行う
    ///
    /// # Errors
    ///
    /// ファイル・シートのエラー、または有効な行が0件の場合に `NoValidTerms`
    pub async fn prepare(
        &self,
        path: &Path,
        config: &ImportConfig,
    ) -> Result<Vec<PaymentTerm>, ImportError> {
        let terms = self.read_use_case.execute(path, config).await?;
        if terms.is_empty() {
            return Err(ImportError::NoValidTerms);
        }

        self.observer.terms_found(&terms);
        Ok(terms)
    }

    /// インポートを実行
    ///
    /// # Returns
    ///
    /// 作成された支払条件のサマリー（作成数は送信数より少ないことがある）
    ///
    /// # Errors
    ///
    /// 入力エラー、`NoValidTerms`、接続・送信・解析のエラー
    pub async fn execute(
        &self,
        path: &Path,
        config: &ImportConfig,
    ) -> Result<ImportSummary, ImportError> {
        let terms = self.prepare(path, config).await?;
        let requested = terms.len();

        let result = self.save_use_case.execute(terms).await?;
        self.observer.terms_saved(&result);

        Ok(ImportSummary {
            requested,
            created: result.created,
            duplicate_count: result.duplicate_count,
            warnings: result.warnings,
        })
    }
}
