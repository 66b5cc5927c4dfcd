//! Integration tests for termsync
//!
//! These tests run the production bridge processor end to end.
//! Some tests require a running QuickBooks Desktop to run.

use clap::Parser;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use termsync::adapter::config::Config;
use termsync::domain::error::ImportError;
use termsync::driver::cli::Args;
use termsync::driver::workflow::{ImportWorkflow, WorkflowOutcome};

fn create_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("terms.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("payment_terms").unwrap();
    sheet.write_string(0, 0, "Name").unwrap();
    sheet.write_string(0, 1, "ID").unwrap();
    sheet.write_string(1, 0, "Net 30").unwrap();
    sheet.write_number(1, 1, 30).unwrap();
    sheet.write_string(2, 0, "Net 15").unwrap();
    sheet.write_number(2, 1, 15).unwrap();
    workbook.save(&path).unwrap();
    path
}

/// 5つのコマンドに順番に応答するシェルスクリプトのブリッジ
#[cfg(unix)]
fn scripted_bridge_config(replies: [&str; 5]) -> Config {
    let script = replies
        .iter()
        .map(|reply| format!("read l; printf '%s\\n' '{}'", reply))
        .collect::<Vec<_>>()
        .join("\n");

    Config {
        bridge_command: "sh".to_string(),
        bridge_args: vec!["-c".to_string(), script],
        ..Config::default()
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_bridge_import_e2e() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_workbook(temp_dir.path());

    let response = r#"{"ok":true,"value":"<?xml version=\"1.0\" ?><QBXML><QBXMLMsgsRs><StandardTermsAddRs requestID=\"1\" statusCode=\"0\" statusSeverity=\"Info\" statusMessage=\"Status OK\"><StandardTermsRet><Name>Net 30</Name></StandardTermsRet></StandardTermsAddRs><StandardTermsAddRs requestID=\"2\" statusCode=\"3100\" statusSeverity=\"Error\" statusMessage=\"Duplicate\"/></QBXMLMsgsRs></QBXML>"}"#;
    let config = scripted_bridge_config([
        r#"{"ok":true}"#,
        r#"{"ok":true,"value":"ticket-1"}"#,
        response,
        r#"{"ok":true}"#,
        r#"{"ok":true}"#,
    ]);

    let workflow = ImportWorkflow::new(config);
    let args = Args::parse_from(["termsync", path.to_str().unwrap()]);

    match workflow.run(&args).await.unwrap() {
        WorkflowOutcome::Imported(summary) => {
            assert_eq!(summary.requested, 2);
            assert_eq!(summary.created, vec!["Net 30"]);
            assert_eq!(summary.duplicate_count, 1);
        }
        other => panic!("expected Imported, got {:?}", other),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_bridge_begin_session_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_workbook(temp_dir.path());

    let config = scripted_bridge_config([
        r#"{"ok":true}"#,
        r#"{"ok":false,"error":"A QuickBooks company data file is already open and it is different from the one requested."}"#,
        r#"{"ok":true}"#,
        r#"{"ok":true}"#,
        r#"{"ok":true}"#,
    ]);

    let workflow = ImportWorkflow::new(config);
    let args = Args::parse_from(["termsync", path.to_str().unwrap()]);

    match workflow.run(&args).await {
        Err(ImportError::ConnectionFailed { cause }) => {
            assert!(cause.contains("already open"), "unexpected cause: {}", cause)
        }
        other => panic!("expected ConnectionFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_bridge_is_connection_failure() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_workbook(temp_dir.path());

    let config = Config {
        bridge_command: "/nonexistent/qbxmlrp-bridge".to_string(),
        ..Config::default()
    };
    let workflow = ImportWorkflow::new(config);
    let args = Args::parse_from(["termsync", path.to_str().unwrap()]);

    assert!(matches!(
        workflow.run(&args).await,
        Err(ImportError::ConnectionFailed { .. })
    ));
}

/// Integration test that requires QuickBooks Desktop and a bridge executable
/// Run with: cargo test --test integration_test -- --ignored
#[tokio::test]
#[ignore]
async fn test_quickbooks_import_e2e() {
    // This test requires:
    // - TERMSYNC_TEST_BRIDGE env var pointing to the bridge executable
    // - QuickBooks Desktop running with a test company file open
    let bridge = std::env::var("TERMSYNC_TEST_BRIDGE")
        .expect("TERMSYNC_TEST_BRIDGE env var required for E2E test");

    let temp_dir = TempDir::new().unwrap();
    let path = create_workbook(temp_dir.path());

    let config = Config {
        bridge_command: bridge,
        ..Config::default()
    };
    let workflow = ImportWorkflow::new(config);
    let args = Args::parse_from(["termsync", path.to_str().unwrap()]);

    match workflow.run(&args).await.unwrap() {
        WorkflowOutcome::Imported(summary) => {
            // 2回目以降の実行では既存扱い（3100）になる
            assert_eq!(summary.created.len() + summary.duplicate_count, 2);
            assert!(summary.warnings.is_empty());
        }
        other => panic!("expected Imported, got {:?}", other),
    }
}
