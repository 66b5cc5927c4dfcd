//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション。
//! インポート本体はバックグラウンドタスクで実行し、完了後に結果を表示する。

use log::{error, info};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::qbxml::build_terms_add_request;
use crate::adapter::quickbooks::bridge::BridgeProcessorFactory;
use crate::adapter::quickbooks::{FileOpenMode, ProcessorFactory, SessionClient, SessionSettings};
use crate::adapter::repositories::quickbooks_term_repository::QuickBooksTermRepository;
use crate::adapter::repositories::xlsx_term_source::XlsxTermSource;
use crate::application::dto::import_config::ImportConfig;
use crate::application::observer::{ImportObserver, LogObserver};
use crate::application::use_cases::import_terms::{ImportSummary, ImportTermsUseCase};
use crate::domain::entities::payment_term::PaymentTerm;
use crate::domain::error::ImportError;
use crate::domain::repositories::term_repository::TermRepository;
use crate::domain::repositories::term_source::TermSource;

use super::cli::Args;
use super::report::{render_dry_run, render_failure, render_summary};

/// CLIの指定で設定を上書きする
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(sheet) = &args.sheet {
        config.sheet_name = sheet.clone();
    }
    if let Some(company_file) = &args.company_file {
        config.company_file = company_file.clone();
    }
}

/// 1回の実行結果
#[derive(Debug)]
pub enum WorkflowOutcome {
    /// QuickBooksに送信した
    Imported(ImportSummary),
    /// リクエストを組み立てただけ
    DryRun {
        terms: Vec<PaymentTerm>,
        request: String,
    },
}

/// 実行中フラグ。dropで解除される
struct BusyGuard(Arc<AtomicBool>);

impl BusyGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Result<Self, ImportError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ImportError::AlreadyRunning)?;
        Ok(Self(flag.clone()))
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Payment Terms Import Workflow
pub struct ImportWorkflow<S: TermSource + 'static, R: TermRepository + 'static> {
    use_case: Arc<ImportTermsUseCase<S, R>>,
    sheet_name: String,
    qbxml_version: String,
    busy: Arc<AtomicBool>,
}

impl ImportWorkflow<XlsxTermSource, QuickBooksTermRepository> {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let factory = Arc::new(BridgeProcessorFactory::new(
            config.bridge_command.clone(),
            config.bridge_args.clone(),
        ));
        Self::with_factory(config, factory)
    }

    /// 任意のRequest Processorで組み立てる
    pub fn with_factory(config: Config, factory: Arc<dyn ProcessorFactory>) -> Self {
        let settings = SessionSettings {
            app_id: config.app_id.clone(),
            app_name: config.app_name.clone(),
            company_file: config.company_file.clone(),
            mode: FileOpenMode::DoNotCare,
        };
        let repository = Arc::new(QuickBooksTermRepository::new(
            SessionClient::new(factory, settings),
            config.qbxml_version.clone(),
        ));

        Self::from_parts(
            Arc::new(XlsxTermSource::new()),
            repository,
            Arc::new(LogObserver),
            &config,
        )
    }
}

impl<S: TermSource + 'static, R: TermRepository + 'static> ImportWorkflow<S, R> {
    pub fn from_parts(
        source: Arc<S>,
        repository: Arc<R>,
        observer: Arc<dyn ImportObserver>,
        config: &Config,
    ) -> Self {
        Self {
            use_case: Arc::new(ImportTermsUseCase::new(source, repository, observer)),
            sheet_name: config.sheet_name.clone(),
            qbxml_version: config.qbxml_version.clone(),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 実行中かどうか
    pub fn is_running(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// インポートを実行して結果を返す
    ///
    /// 実行中に呼ばれた場合は `AlreadyRunning`
    pub async fn run(&self, args: &Args) -> Result<WorkflowOutcome, ImportError> {
        let _guard = BusyGuard::acquire(&self.busy)?;

        let import_config = ImportConfig::new(self.sheet_name.clone(), args.dry_run);
        let use_case = self.use_case.clone();
        let version = self.qbxml_version.clone();
        let path = args.file.clone();

        info!("Reading payment terms from {}...", path.display());
        info!("Dry run: {}", import_config.dry_run);

        let task = tokio::spawn(async move {
            if import_config.dry_run {
                let terms = use_case.prepare(&path, &import_config).await?;
                let request = build_terms_add_request(&terms, &version)?;
                Ok::<_, ImportError>(WorkflowOutcome::DryRun { terms, request })
            } else {
                use_case
                    .execute(&path, &import_config)
                    .await
                    .map(WorkflowOutcome::Imported)
            }
        });

        task.await.map_err(|e| ImportError::TaskFailed {
            cause: e.to_string(),
        })?
    }

    /// Execute the import workflow and print the report
    pub async fn execute(&self, args: Args) -> ExitCode {
        match self.run(&args).await {
            Ok(WorkflowOutcome::Imported(summary)) => {
                info!("Payment terms import complete!");
                print!("{}", render_summary(&summary));
                ExitCode::SUCCESS
            }
            Ok(WorkflowOutcome::DryRun { terms, request }) => {
                print!("{}", render_dry_run(&terms, &request));
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Error occurred: {}", e);
                eprint!("{}", render_failure(&e));
                ExitCode::FAILURE
            }
        }
    }
}
