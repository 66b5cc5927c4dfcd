//! # PaymentTerm Entity
//!
//! 支払条件のドメインエンティティ

use serde::{Deserialize, Serialize};

/// 支払条件
///
/// Excelの1行から作られ、バッチ1回分で消費される。
/// 構築後は変更しない（XMLエスケープはシリアライズ時にのみ行う）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerm {
    /// 支払条件名（トリム済み、非空）
    pub name: String,
    /// 支払期日までの日数
    pub discount_days: i64,
}

impl PaymentTerm {
    /// 新しい支払条件を作成
    ///
    /// # Arguments
    ///
    /// * `name` - 支払条件名（前後の空白は除去される）
    /// * `discount_days` - 日数
    ///
    /// # Errors
    ///
    /// 名前が空（空白のみを含む）の場合にエラーを返す
    pub fn new(name: impl Into<String>, discount_days: i64) -> anyhow::Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            anyhow::bail!("Payment term name cannot be empty");
        }

        Ok(Self {
            name,
            discount_days,
        })
    }
}

impl std::fmt::Display for PaymentTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} days)", self.name, self.discount_days)
    }
}
