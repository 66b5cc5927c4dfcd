//! # Import Error
//!
//! インポート処理で呼び出し元に見えるエラーの分類
//!
//! | Variant | 発生条件 |
//! |---------|----------|
//! | `FileNotFound` | 指定されたExcelファイルが存在しない |
//! | `Workbook` | ファイルをXLSXとして開けない、またはシートを読めない |
//! | `SheetNotFound` | `payment_terms` シートがない |
//! | `NoValidTerms` | 検証を通過した行が0件 |
//! | `InvalidTerm` | ビルダーに不正なエンティティが渡された |
//! | `ConnectionFailed` | QuickBooksへの接続・セッション開始に失敗 |
//! | `SubmissionFailed` | リクエストの処理に失敗 |
//! | `ResponseUnparseable` | レスポンスが整形式のXMLではない |
//! | `AlreadyRunning` | 別のインポートが実行中 |
//! | `TaskFailed` | バックグラウンドタスクがパニックした |

use std::path::PathBuf;
use thiserror::Error;

/// インポートエラー
#[derive(Debug, Error)]
pub enum ImportError {
    /// 入力ファイルが見つからない
    #[error("Excel file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// ワークブックを開けない
    #[error("Failed to read workbook {}: {cause}", path.display())]
    Workbook { path: PathBuf, cause: String },

    /// 必須シートが見つからない
    #[error("Worksheet '{sheet}' not found in {}", path.display())]
    SheetNotFound { path: PathBuf, sheet: String },

    /// 有効な行が1件もない
    #[error("No payment terms found in the Excel file.")]
    NoValidTerms,

    /// 不正なエンティティ（ビルダーで検出）
    #[error("Invalid payment term at position {index}: {reason}")]
    InvalidTerm { index: usize, reason: String },

    /// 接続失敗
    #[error("Failed to connect to QuickBooks: {cause}")]
    ConnectionFailed { cause: String },

    /// リクエスト処理失敗
    #[error("Failed to process request in QuickBooks: {cause}")]
    SubmissionFailed { cause: String },

    /// レスポンス解析失敗
    #[error("Failed to parse QuickBooks response: {cause}")]
    ResponseUnparseable { cause: String },

    /// 多重実行
    #[error("An import is already running")]
    AlreadyRunning,

    /// バックグラウンドタスクが異常終了した
    #[error("Import task failed: {cause}")]
    TaskFailed { cause: String },
}

impl ImportError {
    /// anyhowのエラーチェーンを1行の文字列にまとめる
    pub fn cause_of(e: &anyhow::Error) -> String {
        e.chain()
            .map(|cause| cause.to_string())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// QuickBooks側の問題かどうか
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. }
                | Self::SubmissionFailed { .. }
                | Self::ResponseUnparseable { .. }
        )
    }

    /// 入力ファイル側の問題かどうか
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::Workbook { .. }
                | Self::SheetNotFound { .. }
                | Self::NoValidTerms
        )
    }
}
