//! Text output formatter

use penlint_core::Severity;

use super::FileReport;

pub fn print(reports: &[FileReport]) {
    for report in reports {
        if report.lints.is_empty() && report.faults.is_empty() {
            continue;
        }

        println!("\n{}:", report.path.display());
        for reported in &report.lints {
            let lint = &reported.lint;
            let severity = match lint.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Info => "info",
            };
            println!(
                "  {}:{} {} [{}]: {} ({:?})",
                lint.span.start, lint.span.end, severity, lint.rule_id, lint.message,
                reported.fragment
            );
            for (i, suggestion) in lint.suggestions.iter().enumerate() {
                println!("      {}. {:?}", i + 1, suggestion);
            }
        }
        for fault in &report.faults {
            println!("  rule fault [{}]: {}", fault.rule_id, fault.message);
        }
    }

    let total_files = reports.len();
    let total_issues: usize = reports.iter().map(|r| r.lints.len()).sum();

    println!();
    println!("Checked {} files, found {} issues", total_files, total_issues);
}
