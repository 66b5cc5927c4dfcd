//! # Read Terms Use Case
//!
//! シート読み込みと行検証ユースケース

use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::application::dto::import_config::ImportConfig;
use crate::domain::entities::payment_term::PaymentTerm;
use crate::domain::error::ImportError;
use crate::domain::repositories::term_source::TermSource;
use crate::domain::services::row_validator::RowValidator;

/// 読み込みユースケース
///
/// シートの行を読み込み、検証を通過したものだけを支払条件に変換する
pub struct ReadTermsUseCase<S: TermSource> {
    source: Arc<S>,
}

impl<S: TermSource> ReadTermsUseCase<S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `source` - 読み込み元
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// 支払条件を読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - ワークブックのパス
    /// * `config` - インポート設定
    ///
    /// # Returns
    ///
    /// 検証済みの支払条件（シート順）。空の場合もある
    ///
    /// # Errors
    ///
    /// ファイルやシートが見つからない場合にエラーを返す
    pub async fn execute(
        &self,
        path: &Path,
        config: &ImportConfig,
    ) -> Result<Vec<PaymentTerm>, ImportError> {
        let rows = self.source.read_rows(path, &config.sheet_name).await?;
        let row_count = rows.len();

        let terms = RowValidator::validate(rows);

        info!(
            "Read {} rows from sheet '{}' ({} valid, {} skipped)",
            row_count,
            config.sheet_name,
            terms.len(),
            row_count - terms.len()
        );

        Ok(terms)
    }
}
