//! Rendering manifests to JSON and writing them to disk.

use router_fs::{NormalizedPath, io};

use crate::error::{Error, Result};
use crate::model::ExtensionManifest;
use crate::validation::validate;

/// Render a manifest as two-space indented JSON in declaration order.
///
/// No trailing newline is added, matching what `npm` tooling has always
/// received from this builder.
pub fn render(manifest: &ExtensionManifest) -> Result<String> {
    serde_json::to_string_pretty(manifest).map_err(Error::SerializationFailure)
}

/// Parse manifest JSON text.
pub fn parse(text: &str) -> serde_json::Result<ExtensionManifest> {
    serde_json::from_str(text)
}

/// Read and parse the manifest at `path`.
pub fn load(path: &NormalizedPath) -> Result<ExtensionManifest> {
    let text = io::read_text(path).map_err(|source| Error::Read {
        path: path.to_native(),
        source,
    })?;
    parse(&text).map_err(|source| Error::Parse {
        path: path.to_native(),
        source,
    })
}

/// Validate, render and atomically write a manifest.
///
/// Nothing touches the filesystem unless validation and rendering both
/// succeed.
pub fn write_manifest(path: &NormalizedPath, manifest: &ExtensionManifest) -> Result<()> {
    let report = validate(manifest);
    if !report.is_clean() {
        return Err(Error::Validation(report));
    }

    let content = render(manifest)?;
    io::write_text(path, &content).map_err(|source| Error::WriteFailure {
        path: path.to_native(),
        source,
    })?;

    tracing::info!(path = %path, bytes = content.len(), "Wrote extension manifest");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smart_router::smart_router_manifest;
    use tempfile::TempDir;

    #[test]
    fn test_render_uses_two_space_indent() {
        let text = render(&smart_router_manifest().unwrap()).unwrap();
        assert!(text.starts_with("{\n  \"name\": \"smart-router\",\n  \"displayName\""));
        assert!(text.ends_with("\n}"));
    }

    #[test]
    fn test_write_refuses_invalid_manifest() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path()).join("package.json");
        let mut manifest = smart_router_manifest().unwrap();
        manifest.version = "next".into();

        let err = write_manifest(&path, &manifest).unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_into_missing_directory_is_write_failure() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path()).join("missing/package.json");

        let err = write_manifest(&path, &smart_router_manifest().unwrap()).unwrap_err();

        assert!(matches!(err, Error::WriteFailure { .. }));
        assert!(err.to_string().starts_with("write failure at "));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let native = temp.path().join("package.json");
        std::fs::write(&native, "{\"name\": 1}").unwrap();

        let err = load(&NormalizedPath::new(&native)).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
