//! # Import Observer
//!
//! 進捗メッセージ（件数、見つかった支払条件など）の通知先。
//! 関数の戻り値とは別経路なので、テストでは記録用の実装に差し替える。

use log::info;

use crate::domain::entities::payment_term::PaymentTerm;
use crate::domain::repositories::term_repository::SaveResult;

/// 進捗通知
pub trait ImportObserver: Send + Sync {
    /// 検証済みの支払条件が見つかった
    fn terms_found(&self, terms: &[PaymentTerm]);

    /// 保存が完了した
    fn terms_saved(&self, _result: &SaveResult) {}
}

/// ログに出力する既定の通知先
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ImportObserver for LogObserver {
    fn terms_found(&self, terms: &[PaymentTerm]) {
        info!("Found {} payment terms to import:", terms.len());
        for term in terms {
            info!("  - {} ({} days)", term.name, term.discount_days);
        }
    }

    fn terms_saved(&self, result: &SaveResult) {
        info!(
            "Created {} payment terms ({} already existed, {} failed)",
            result.created_count(),
            result.duplicate_count,
            result.warnings.len()
        );
    }
}
