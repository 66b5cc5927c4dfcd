//! Termsync - Payment Terms Importer
//!
//! ExcelファイルからQuickBooks Desktopに支払条件をインポート

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use termsync::adapter::config::Config;
use termsync::driver::{apply_cli_overrides, Args, ImportWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let mut config = Config::load_or_default(&args.config)?;
    apply_cli_overrides(&mut config, &args);

    // Create workflow with injected dependencies
    let workflow = ImportWorkflow::new(config);

    Ok(workflow.execute(args).await)
}
