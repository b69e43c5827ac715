//! Check and diff command implementations
//!
//! Both compare the manifest on disk with the one the builder would write.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use router_fs::NormalizedPath;
use router_manifest::{Drift, check, smart_router_manifest};

use crate::error::{CliError, Result};

/// Fail unless the manifest at `output` is exactly what the builder writes.
pub fn run_check(output: &Path) -> Result<()> {
    let path = NormalizedPath::new(output);

    match check(&path, &smart_router_manifest()?)? {
        Drift::InSync => {
            println!("{} {} is up to date", "OK".green().bold(), path.as_str().cyan());
            Ok(())
        }
        Drift::Missing => Err(CliError::user(format!(
            "{} does not exist; run `smart-router-manifest generate`",
            path
        ))),
        Drift::Drifted { .. } => Err(CliError::user(format!(
            "{} is out of date; run `smart-router-manifest diff` to see changes",
            path
        ))),
    }
}

/// Show the difference between the manifest at `output` and the generated one.
pub fn run_diff(output: &Path, json: bool) -> Result<()> {
    let path = NormalizedPath::new(output);
    let drift = check(&path, &smart_router_manifest()?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&drift_json(&path, &drift))?);
        return Ok(());
    }

    match drift {
        Drift::InSync => {
            println!("{} No changes needed. {} is in sync.", "OK".green().bold(), path);
        }
        Drift::Missing => {
            println!("{} {} would be created", "+".green(), path.as_str().yellow());
        }
        Drift::Drifted { diff, .. } => print_colored_diff(&diff),
    }
    Ok(())
}

fn drift_json(path: &NormalizedPath, drift: &Drift) -> serde_json::Value {
    match drift {
        Drift::InSync => json!({ "path": path.as_str(), "status": "in_sync", "has_changes": false }),
        Drift::Missing => json!({ "path": path.as_str(), "status": "missing", "has_changes": true }),
        Drift::Drifted { diff, similarity } => json!({
            "path": path.as_str(),
            "status": "drifted",
            "has_changes": true,
            "similarity": similarity,
            "diff": diff,
        }),
    }
}

fn print_colored_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::run_generate;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_missing_manifest_fails() {
        let temp = TempDir::new().unwrap();
        let err = run_check(&temp.path().join("package.json")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_check_after_generate_passes() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("package.json");
        run_generate(&output).unwrap();

        assert!(run_check(&output).is_ok());
    }

    #[test]
    fn test_check_detects_edit() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("package.json");
        run_generate(&output).unwrap();
        let edited = fs::read_to_string(&output).unwrap().replace("0.2.0", "0.3.0");
        fs::write(&output, edited).unwrap();

        let err = run_check(&output).unwrap_err();
        assert!(err.to_string().contains("out of date"));
    }

    #[test]
    fn test_drift_json_shapes() {
        let path = NormalizedPath::new("package.json");

        let missing = drift_json(&path, &Drift::Missing);
        assert_eq!(missing["status"], "missing");
        assert_eq!(missing["has_changes"], true);

        let in_sync = drift_json(&path, &Drift::InSync);
        assert_eq!(in_sync["has_changes"], false);
    }
}
