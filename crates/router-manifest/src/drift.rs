//! Drift detection between an on-disk manifest and the rendered one.

use router_fs::{NormalizedPath, io};
use similar::TextDiff;

use crate::error::{Error, Result};
use crate::model::ExtensionManifest;
use crate::render::render;

/// State of the on-disk manifest relative to the rendered one.
#[derive(Debug, Clone, PartialEq)]
pub enum Drift {
    /// The file matches byte for byte.
    InSync,
    /// The file does not exist.
    Missing,
    /// The file differs.
    Drifted {
        /// Unified diff from the on-disk text to the rendered text.
        diff: String,
        /// Line similarity ratio between 0.0 and 1.0.
        similarity: f32,
    },
}

impl Drift {
    pub fn is_in_sync(&self) -> bool {
        matches!(self, Self::InSync)
    }
}

/// Compare the manifest at `path` with the rendering of `manifest`.
pub fn check(path: &NormalizedPath, manifest: &ExtensionManifest) -> Result<Drift> {
    let expected = render(manifest)?;

    if !path.exists() {
        tracing::warn!(path = %path, "Manifest is missing");
        return Ok(Drift::Missing);
    }

    let bytes = io::read_bytes(path).map_err(|source| Error::Read {
        path: path.to_native(),
        source,
    })?;
    // Invalid UTF-8 can never match the rendered text; diff it lossily.
    let actual = String::from_utf8_lossy(&bytes);

    if actual == expected.as_str() {
        tracing::debug!(path = %path, "Manifest is in sync");
        return Ok(Drift::InSync);
    }

    let label = path.file_name().unwrap_or(path.as_str());
    let (old_header, new_header) = (format!("a/{label}"), format!("b/{label}"));
    let text_diff = TextDiff::from_lines(&*actual, expected.as_str());
    let similarity = text_diff.ratio();
    let diff = text_diff
        .unified_diff()
        .context_radius(3)
        .header(&old_header, &new_header)
        .to_string();

    tracing::warn!(path = %path, similarity, "Manifest has drifted");
    Ok(Drift::Drifted { diff, similarity })
}
