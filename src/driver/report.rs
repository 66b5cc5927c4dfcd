//! Result Report
//!
//! インポート結果・エラーをユーザー向けのテキストに整形する

use std::fmt::Write;

use crate::application::use_cases::import_terms::ImportSummary;
use crate::domain::entities::payment_term::PaymentTerm;
use crate::domain::error::ImportError;

const HEADER: &str = "Payment Terms Import Results:";

const HINT_QUICKBOOKS_OPEN: &str = "- QuickBooks Desktop is running and a company file is open";
const HINT_SHEET: &str = "- Excel file has 'payment_terms' sheet with Name/ID columns";
const HINT_PERMISSIONS: &str = "- You have appropriate permissions in QuickBooks";
const HINT_EXTERNAL_ACCESS: &str = "- QuickBooks allows external applications to access data";

fn header(out: &mut String) {
    let _ = writeln!(out, "{}", HEADER);
    let _ = writeln!(out, "{}\n", "=".repeat(40));
}

/// 成功時のレポート
pub fn render_summary(summary: &ImportSummary) -> String {
    let mut out = String::new();
    header(&mut out);

    if summary.created.is_empty() {
        out.push_str("No payment terms were imported.\n");
        if summary.duplicate_count > 0 {
            let _ = writeln!(
                out,
                "{} of {} payment terms already exist in QuickBooks.",
                summary.duplicate_count, summary.requested
            );
        }
        out.push_str("Please check:\n");
        out.push_str("- Selected Excel file has 'payment_terms' sheet\n");
        out.push_str("- Sheet has 'Name' and 'ID' columns\n");
        out.push_str("- QuickBooks Desktop is running\n");
    } else {
        let _ = writeln!(
            out,
            "Successfully imported {} payment terms:\n",
            summary.created.len()
        );
        for name in &summary.created {
            let _ = writeln!(out, "✓ {}", name);
        }
        if summary.duplicate_count > 0 {
            let _ = writeln!(
                out,
                "\nSkipped {} payment terms that already exist.",
                summary.duplicate_count
            );
        }
    }

    if !summary.warnings.is_empty() {
        out.push('\n');
        for warning in &summary.warnings {
            let _ = writeln!(out, "⚠ {}", warning);
        }
    }

    out
}

/// ドライラン時のレポート
pub fn render_dry_run(terms: &[PaymentTerm], request: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dry run: {} payment terms would be imported:\n", terms.len());
    for term in terms {
        let _ = writeln!(out, "  - {}", term);
    }
    out.push_str("\nRequest:\n");
    out.push_str(request);
    out
}

/// エラーの分類に応じた対処のヒント
pub fn remediation_hints(error: &ImportError) -> Vec<&'static str> {
    if error.is_service_error() {
        vec![HINT_QUICKBOOKS_OPEN, HINT_PERMISSIONS, HINT_EXTERNAL_ACCESS]
    } else if error.is_input_error() {
        vec![HINT_SHEET]
    } else {
        vec![
            HINT_QUICKBOOKS_OPEN,
            HINT_SHEET,
            HINT_PERMISSIONS,
            HINT_EXTERNAL_ACCESS,
        ]
    }
}

/// 失敗時のレポート
pub fn render_failure(error: &ImportError) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Error importing payment terms:\n{}\n", error);
    out.push_str("Please ensure:\n");
    for hint in remediation_hints(error) {
        let _ = writeln!(out, "{}", hint);
    }
    out
}
