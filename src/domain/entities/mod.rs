//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **PaymentTerm**: 支払条件
//! - **TermBatch**: 1リクエスト分の支払条件（バリューオブジェクト）
//! - **BatchResponse**: 項目ごとの処理結果（バリューオブジェクト）
//! - **RawTermRow**: 検証前のシート行

pub mod batch_response;
pub mod payment_term;
pub mod raw_row;
pub mod term_batch;
