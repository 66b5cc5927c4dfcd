//! Request Processor Abstractions
//!
//! QuickBooks の Request Processor（OpenConnection / BeginSession /
//! ProcessRequest / EndSession / CloseConnection）の抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Which company file the session may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileOpenMode {
    SingleUser,
    MultiUser,
    /// Use whatever company file is currently open
    #[default]
    DoNotCare,
}

impl FileOpenMode {
    /// Numeric value expected by the request processor
    pub fn code(self) -> u8 {
        match self {
            FileOpenMode::SingleUser => 0,
            FileOpenMode::MultiUser => 1,
            FileOpenMode::DoNotCare => 2,
        }
    }
}

/// Opaque session handle returned by `begin_session`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTicket(pub String);

impl SessionTicket {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Trait for the request processor lifecycle
/// This enables mocking in tests while using the real bridge in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RequestProcessor: Send {
    /// Open a connection to QuickBooks
    async fn open_connection(&mut self, app_id: &str, app_name: &str) -> Result<()>;

    /// Begin a session against a company file
    async fn begin_session(&mut self, company_file: &str, mode: FileOpenMode)
        -> Result<SessionTicket>;

    /// Send one qbXML request and return the raw response
    async fn process_request(&mut self, ticket: &SessionTicket, request: &str) -> Result<String>;

    async fn end_session(&mut self, ticket: &SessionTicket) -> Result<()>;

    async fn close_connection(&mut self) -> Result<()>;
}

/// Factory for creating request processors
#[async_trait]
pub trait ProcessorFactory: Send + Sync {
    async fn create_processor(&self) -> Result<Box<dyn RequestProcessor>>;
}
