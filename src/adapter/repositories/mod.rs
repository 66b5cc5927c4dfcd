//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod quickbooks_term_repository;
pub mod xlsx_term_source;
