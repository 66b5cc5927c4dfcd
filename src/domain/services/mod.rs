//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! - **RowValidator**: シート行の検証と変換
//! - **ResponseReconciler**: レスポンスのステータスコード照合

pub mod reconciliation;
pub mod row_validator;
