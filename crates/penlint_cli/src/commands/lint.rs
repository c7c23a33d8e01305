//! `penlint lint` - lint files or stdin.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use miette::{miette, IntoDiagnostic, Result};
use penlint_core::{Document, LintConfig, LintGroup, RunOutcome};
use tracing::warn;

use crate::config_file;
use crate::output::{self, FileReport};

pub fn run(
    config_path: Option<&Path>,
    files: &[PathBuf],
    format: &str,
    rules: Option<&str>,
    parallel: bool,
    deadline_ms: Option<u64>,
) -> Result<bool> {
    let mut config = config_file::load(config_path)?;

    // --rules takes precedence over the config file's selection list.
    if let Some(list) = rules {
        config.rules = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }

    let group = LintGroup::from_config(&config).map_err(|e| miette!("{e}"))?;

    let mut reports = Vec::new();
    let mut had_failures = false;

    for path in files {
        match read_document(path) {
            Ok(doc) => {
                let outcome = run_group(&group, &doc, parallel, deadline_ms);
                if outcome.cancelled {
                    warn!("{}: deadline expired, results are partial", path.display());
                }
                match FileReport::new(path.clone(), &doc, outcome) {
                    Ok(report) => reports.push(report),
                    Err(e) => {
                        warn!("failed to report {}: {e}", path.display());
                        had_failures = true;
                    }
                }
            }
            Err(e) => {
                warn!("failed to lint {}: {e}", path.display());
                had_failures = true;
            }
        }
    }

    match format {
        "text" => output::text::print(&reports),
        "json" => output::json::print(&reports)?,
        other => return Err(miette!("unknown output format \"{other}\"")),
    }

    let has_issues = reports.iter().any(|r| !r.lints.is_empty());
    Ok(has_issues || had_failures)
}

fn run_group(group: &LintGroup, doc: &Document, parallel: bool, deadline_ms: Option<u64>) -> RunOutcome {
    if let Some(ms) = deadline_ms {
        group.run_with_deadline(doc, Instant::now() + Duration::from_millis(ms))
    } else if parallel {
        group.run_parallel(doc)
    } else {
        group.run(doc)
    }
}

fn read_document(path: &Path) -> Result<Document> {
    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).into_diagnostic()?;
        buf
    } else {
        std::fs::read(path).into_diagnostic()?
    };
    Document::from_bytes(&bytes).map_err(|e| miette!("{e}"))
}
