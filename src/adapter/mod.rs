//! Adapter Layer
//!
//! 外部システム（Excel, QuickBooks）との統合

pub mod config;
pub mod excel;
pub mod qbxml;
pub mod quickbooks;
pub mod repositories;
