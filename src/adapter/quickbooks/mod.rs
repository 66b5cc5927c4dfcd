//! QuickBooks Integration
//!
//! Request Processor の抽象化、セッション管理、ブリッジ実装

pub mod bridge;
pub mod processor;
pub mod session;

pub use processor::{FileOpenMode, ProcessorFactory, RequestProcessor, SessionTicket};
pub use session::{SessionClient, SessionSettings};
