//! XLSX Term Source Implementation
//!
//! TermSourceのExcelファイル実装

use async_trait::async_trait;
use log::info;
use std::path::{Path, PathBuf};

use crate::adapter::excel::read_sheet_rows;
use crate::domain::entities::raw_row::RawTermRow;
use crate::domain::error::ImportError;
use crate::domain::repositories::term_source::TermSource;

/// Excelファイルベースの読み込み元
pub struct XlsxTermSource;

impl XlsxTermSource {
    /// 新しい読み込み元を作成
    pub fn new() -> Self {
        Self
    }

    /// パスのチルダを展開する
    fn expand_path(path: &Path) -> PathBuf {
        match path.to_str() {
            Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
            None => path.to_path_buf(),
        }
    }
}

#[async_trait]
impl TermSource for XlsxTermSource {
    async fn read_rows(&self, path: &Path, sheet: &str) -> Result<Vec<RawTermRow>, ImportError> {
        // calamineは同期APIなので、tokio::task::spawn_blockingでラップ
        let path = Self::expand_path(path);
        let sheet = sheet.to_string();

        info!("Reading sheet '{}' from {}", sheet, path.display());

        let worker_path = path.clone();
        tokio::task::spawn_blocking(move || read_sheet_rows(&worker_path, &sheet))
            .await
            .map_err(|e| ImportError::Workbook {
                path,
                cause: format!("Failed to spawn blocking task: {}", e),
            })?
    }
}

impl Default for XlsxTermSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_rows_from_workbook() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("terms.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("payment_terms").unwrap();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "ID").unwrap();
        sheet.write_string(1, 0, "Net 60").unwrap();
        sheet.write_number(1, 1, 60).unwrap();
        workbook.save(&path).unwrap();

        let rows = XlsxTermSource::new()
            .read_rows(&path, "payment_terms")
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row_number, 2);
    }

    #[tokio::test]
    async fn test_read_rows_missing_file() {
        let result = XlsxTermSource::new()
            .read_rows(Path::new("nonexistent.xlsx"), "payment_terms")
            .await;

        assert!(matches!(result, Err(ImportError::FileNotFound { .. })));
    }

    #[test]
    fn test_expand_path_absolute() {
        let path = XlsxTermSource::expand_path(Path::new("/data/terms.xlsx"));
        assert_eq!(path, PathBuf::from("/data/terms.xlsx"));
    }
}
