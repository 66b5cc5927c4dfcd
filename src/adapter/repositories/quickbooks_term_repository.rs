//! QuickBooks Term Repository Implementation
//!
//! TermRepositoryのQuickBooks実装

use async_trait::async_trait;
use log::info;

use crate::adapter::qbxml::{build_terms_add_request, parse_terms_add_response};
use crate::adapter::quickbooks::SessionClient;
use crate::domain::entities::term_batch::TermBatch;
use crate::domain::error::ImportError;
use crate::domain::repositories::term_repository::{SaveResult, TermRepository};
use crate::domain::services::reconciliation::ResponseReconciler;

/// QuickBooks支払条件リポジトリ
pub struct QuickBooksTermRepository {
    client: SessionClient,
    qbxml_version: String,
}

impl QuickBooksTermRepository {
    /// 新しいリポジトリを作成
    pub fn new(client: SessionClient, qbxml_version: String) -> Self {
        Self {
            client,
            qbxml_version,
        }
    }

    /// バッチのリクエスト文書を組み立てる（送信はしない）
    pub fn build_request(&self, batch: &TermBatch) -> Result<String, ImportError> {
        build_terms_add_request(batch.terms(), &self.qbxml_version)
    }
}

#[async_trait]
impl TermRepository for QuickBooksTermRepository {
    async fn save_terms(&self, batch: &TermBatch) -> Result<SaveResult, ImportError> {
        let request = self.build_request(batch)?;

        let response = self.client.submit(&request).await?;

        let parsed = parse_terms_add_response(&response)?;
        info!(
            "QuickBooks returned {} results for {} requests",
            parsed.len(),
            batch.len()
        );

        Ok(ResponseReconciler::reconcile(&parsed))
    }
}
