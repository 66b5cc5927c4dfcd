//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;
use std::path::PathBuf;

/// ExcelファイルからQuickBooksに支払条件をインポートするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "termsync")]
#[command(about = "Import payment terms from an Excel workbook into QuickBooks Desktop", long_about = None)]
pub struct Args {
    /// Excel workbook (.xlsx) containing the payment terms sheet
    pub file: PathBuf,

    /// Dry run mode - print the request instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Sheet name (overrides the config file)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Company file path (overrides the config file, empty = currently open file)
    #[arg(long)]
    pub company_file: Option<String>,

    /// Config file path
    #[arg(short, long, default_value = "./termsync.json")]
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["termsync", "terms.xlsx"]);
        assert_eq!(args.config, "./termsync.json");
        assert_eq!(args.file, PathBuf::from("terms.xlsx"));
        assert!(!args.dry_run);
        assert!(args.sheet.is_none());
        assert!(args.company_file.is_none());
    }

    #[test]
    fn test_args_dry_run() {
        let args = Args::parse_from(["termsync", "terms.xlsx", "--dry-run"]);
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["termsync", "-c", "/custom/config.json", "terms.xlsx"]);
        assert_eq!(args.config, "/custom/config.json");
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "termsync",
            "terms.xlsx",
            "--sheet",
            "Terms",
            "--company-file",
            "C:\\Company\\sample.qbw",
        ]);
        assert_eq!(args.sheet.as_deref(), Some("Terms"));
        assert_eq!(args.company_file.as_deref(), Some("C:\\Company\\sample.qbw"));
    }

    #[test]
    fn test_args_file_required() {
        assert!(Args::try_parse_from(["termsync"]).is_err());
    }
}
