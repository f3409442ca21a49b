//! `envcap.toml` manifest parsing.
//!
//! The manifest is optional. It only supplies default targets for
//! `envcap resolve` when none are given on the command line.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the manifest file.
pub const MANIFEST_FILE: &str = "envcap.toml";

/// Parsed `envcap.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvcapManifest {
    /// Build configuration.
    #[serde(default)]
    pub build: BuildConfig,
}

/// The `[build]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildConfig {
    /// Targets resolved when the command line names none.
    #[serde(default)]
    pub targets: Vec<String>,
}

impl EnvcapManifest {
    /// Parse manifest text.
    pub fn from_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid envcap.toml")
    }

    /// Load a manifest from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_str(&text)
    }

    /// Look for a manifest in the current directory. A missing file is not
    /// an error.
    pub fn find() -> Result<Option<Self>> {
        let path = Path::new(MANIFEST_FILE);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(Self::load(path)?))
    }

    /// Default targets, possibly empty.
    pub fn targets(&self) -> &[String] {
        &self.build.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_build_targets() {
        let manifest = EnvcapManifest::from_str(
            r#"
[build]
targets = ["web", "es2020"]
"#,
        )
        .unwrap();
        assert_eq!(manifest.targets(), ["web", "es2020"]);
    }

    #[test]
    fn missing_section_defaults_to_empty() {
        let manifest = EnvcapManifest::from_str("").unwrap();
        assert!(manifest.targets().is_empty());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(EnvcapManifest::from_str("this is not toml [[[").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(&path, "[build]\ntargets = [\"node14.5\"]\n").unwrap();

        let manifest = EnvcapManifest::load(&path).unwrap();
        assert_eq!(manifest.targets(), ["node14.5"]);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(EnvcapManifest::load(&dir.path().join(MANIFEST_FILE)).is_err());
    }
}
