//! QuickBooks Session Client
//!
//! 接続 → セッション開始 → リクエスト送信 → 必ず解放、の流れを1か所にまとめる

use log::{info, warn};
use std::sync::Arc;

use super::processor::{FileOpenMode, ProcessorFactory, RequestProcessor, SessionTicket};
use crate::domain::error::ImportError;

/// Connection parameters for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub app_id: String,
    pub app_name: String,
    pub company_file: String,
    pub mode: FileOpenMode,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_name: "Payment Terms Import".to_string(),
            company_file: String::new(),
            mode: FileOpenMode::DoNotCare,
        }
    }
}

/// Session client
///
/// Each `submit` owns a fresh processor and session from start to finish.
pub struct SessionClient {
    factory: Arc<dyn ProcessorFactory>,
    settings: SessionSettings,
}

impl SessionClient {
    pub fn new(factory: Arc<dyn ProcessorFactory>, settings: SessionSettings) -> Self {
        Self { factory, settings }
    }

    /// Submit one document and return the raw response.
    ///
    /// Acquisition failures become `ConnectionFailed`, processing failures
    /// become `SubmissionFailed`. Once a connection is open it is always
    /// closed, and cleanup failures are only logged.
    pub async fn submit(&self, document: &str) -> Result<String, ImportError> {
        let mut processor = self
            .factory
            .create_processor()
            .await
            .map_err(|e| connection_failed(&e))?;

        processor
            .open_connection(&self.settings.app_id, &self.settings.app_name)
            .await
            .map_err(|e| connection_failed(&e))?;

        let ticket = match processor
            .begin_session(&self.settings.company_file, self.settings.mode)
            .await
        {
            Ok(ticket) => ticket,
            Err(e) => {
                close_quietly(processor.as_mut()).await;
                return Err(connection_failed(&e));
            }
        };

        info!(
            "QuickBooks session started, sending request ({} bytes)",
            document.len()
        );

        let result = processor
            .process_request(&ticket, document)
            .await
            .map_err(|e| ImportError::SubmissionFailed {
                cause: ImportError::cause_of(&e),
            });

        release(processor.as_mut(), &ticket).await;

        result
    }
}

fn connection_failed(e: &anyhow::Error) -> ImportError {
    let cause = ImportError::cause_of(e);
    warn!("QuickBooks connection error: {}", cause);
    ImportError::ConnectionFailed { cause }
}

async fn release(processor: &mut dyn RequestProcessor, ticket: &SessionTicket) {
    if let Err(e) = processor.end_session(ticket).await {
        warn!(
            "Failed to end QuickBooks session: {}",
            ImportError::cause_of(&e)
        );
    }
    close_quietly(processor).await;
}

async fn close_quietly(processor: &mut dyn RequestProcessor) {
    if let Err(e) = processor.close_connection().await {
        warn!(
            "Failed to close QuickBooks connection: {}",
            ImportError::cause_of(&e)
        );
    }
}
