//! # Response Reconciliation
//!
//! 項目ごとのステータスコードから、実際に作成された支払条件を確定する

use log::warn;

use crate::domain::entities::batch_response::BatchResponse;
use crate::domain::repositories::term_repository::SaveResult;

/// レスポンス照合サービス
pub struct ResponseReconciler;

impl ResponseReconciler {
    /// レスポンスを照合する
    ///
    /// - `"0"`: 作成済みとして名前を追加
    /// - `"3100"`: 既存のため黙ってスキップ
    /// - それ以外: 警告を記録して除外
    ///
    /// # Returns
    ///
    /// レスポンス順の作成済み名と、重複件数・警告
    pub fn reconcile(response: &BatchResponse) -> SaveResult {
        let mut result = SaveResult::default();

        for item in response.items() {
            if item.is_success() {
                match &item.name {
                    Some(name) => result.created.push(name.clone()),
                    None => {
                        let message = format!(
                            "Term reported as added but no name was returned (requestID {})",
                            item.request_id.as_deref().unwrap_or("-")
                        );
                        warn!("Warning: {}", message);
                        result.warnings.push(message);
                    }
                }
            } else if item.is_already_exists() {
                result.duplicate_count += 1;
            } else {
                let message = format!(
                    "Failed to add term - {}",
                    item.status_message.as_deref().unwrap_or("Unknown error")
                );
                warn!("Warning: {} (statusCode {})", message, item.status_code);
                result.warnings.push(message);
            }
        }

        result
    }
}
