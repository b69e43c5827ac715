//! Generate command implementation

use std::path::Path;

use colored::Colorize;
use router_fs::NormalizedPath;
use router_manifest::{smart_router_manifest, write_manifest};

use crate::error::Result;

/// Build the manifest and write it to `output`.
pub fn run_generate(output: &Path) -> Result<()> {
    let path = NormalizedPath::new(output);
    let manifest = smart_router_manifest()?;

    write_manifest(&path, &manifest)?;

    println!(
        "{} {} created successfully!",
        "OK".green().bold(),
        path.as_str().cyan()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generate_writes_manifest() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("package.json");

        run_generate(&output).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("\"name\": \"smart-router\""));
    }

    #[test]
    fn test_generate_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("missing").join("package.json");

        let err = run_generate(&output).unwrap_err();

        assert!(err.to_string().starts_with("write failure"));
        assert!(!output.exists());
    }
}
