//! # TermBatch Value Object
//!
//! 1回のリクエストで送る支払条件のバッチ

use super::payment_term::PaymentTerm;

/// 支払条件バッチ
///
/// 入力順を保持した支払条件のコレクション
#[derive(Debug, Clone, Default)]
pub struct TermBatch {
    terms: Vec<PaymentTerm>,
}

impl TermBatch {
    /// 新しいバッチを作成
    ///
    /// # Arguments
    ///
    /// * `terms` - 支払条件のベクター（順序はそのまま保持される）
    pub fn new(terms: Vec<PaymentTerm>) -> Self {
        Self { terms }
    }

    /// バッチ内の件数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// バッチが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// 支払条件への参照を返す
    pub fn terms(&self) -> &[PaymentTerm] {
        &self.terms
    }

    /// 支払条件名のリストを返す
    pub fn names(&self) -> Vec<String> {
        self.terms.iter().map(|t| t.name.clone()).collect()
    }

    /// 支払条件の所有権を移動して返す
    pub fn into_terms(self) -> Vec<PaymentTerm> {
        self.terms
    }
}

impl From<Vec<PaymentTerm>> for TermBatch {
    fn from(terms: Vec<PaymentTerm>) -> Self {
        Self::new(terms)
    }
}

impl From<TermBatch> for Vec<PaymentTerm> {
    fn from(batch: TermBatch) -> Self {
        batch.into_terms()
    }
}
