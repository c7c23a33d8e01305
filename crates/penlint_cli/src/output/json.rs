//! JSON output formatter

use miette::{IntoDiagnostic, Result};

use super::FileReport;

pub fn print(reports: &[FileReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports).into_diagnostic()?;
    println!("{json}");
    Ok(())
}
