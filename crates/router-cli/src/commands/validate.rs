//! Validate command implementation

use colored::Colorize;
use serde_json::json;

use router_manifest::{Report, smart_router_manifest, validate};

use crate::error::{CliError, Result};

/// Report every invariant the manifest breaks.
pub fn run_validate(json: bool) -> Result<()> {
    let report = validate(&smart_router_manifest()?);

    if json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
    } else if report.is_clean() {
        println!("{} Manifest is valid", "OK".green().bold());
    } else {
        println!("{}", "Manifest violations:".bold());
        println!("{report}");
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "manifest has {} violation(s)",
            report.violations().len()
        )))
    }
}

fn report_json(report: &Report) -> serde_json::Value {
    json!({
        "valid": report.is_clean(),
        "violations": report.violations().iter()
            .map(|v| json!({ "kind": v.kind(), "message": v.to_string() }))
            .collect::<Vec<_>>(),
    })
}
