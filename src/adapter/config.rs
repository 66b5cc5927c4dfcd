//! Configuration
//!
//! 設定ファイル（JSON）の読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::application::dto::import_config::DEFAULT_SHEET_NAME;

fn default_app_name() -> String {
    "Payment Terms Import".to_string()
}

fn default_sheet_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

fn default_qbxml_version() -> String {
    "13.0".to_string()
}

fn default_bridge_command() -> String {
    "qbxmlrp-bridge".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// OpenConnection に渡すアプリケーションID（通常は空）
    #[serde(default)]
    pub app_id: String,
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// 空文字列は「現在開いている会社ファイル」
    #[serde(default)]
    pub company_file: String,

    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_qbxml_version")]
    pub qbxml_version: String,

    // Request processor bridge
    #[serde(default = "default_bridge_command")]
    pub bridge_command: String,
    #[serde(default)]
    pub bridge_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_name: default_app_name(),
            company_file: String::new(),
            sheet_name: default_sheet_name(),
            qbxml_version: default_qbxml_version(),
            bridge_command: default_bridge_command(),
            bridge_args: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let path = shellexpand::tilde(path).to_string();
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// ファイルがなければ既定値を使う
    pub fn load_or_default(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).to_string();
        if Path::new(&expanded).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("termsync.json");
        fs::write(&path, r#"{ "company_file": "C:\\Company\\books.qbw" }"#).unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();

        assert_eq!(config.company_file, "C:\\Company\\books.qbw");
        assert_eq!(config.app_name, "Payment Terms Import");
        assert_eq!(config.sheet_name, "payment_terms");
        assert_eq!(config.qbxml_version, "13.0");
        assert!(config.bridge_args.is_empty());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("termsync.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/termsync.json").unwrap();
        assert_eq!(config, Config::default());
    }
}
