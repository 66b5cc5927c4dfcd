//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ReadTermsUseCase**: シートの読み込みと行検証
//! - **SaveTermsUseCase**: バッチ保存
//! - **ImportTermsUseCase**: 読み込みから保存までの全体フロー

pub mod import_terms;
pub mod read_terms;
pub mod save_terms;
