//! Manifest (mosaic.json) loading and persistence

use std::fs;
use std::io::Write;

use anyhow::Context;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};

/// Manifest file name, fixed relative to the project root
pub const MANIFEST_FILE_NAME: &str = "mosaic.json";

/// Per-project configuration record.
///
/// This is the single source of truth for a project: created once by
/// `mosaic create`, read on every subsequent command, and mutated only by
/// `mosaic platform add`. No loaded instance outlives a single command
/// invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Project identifier, set once at creation
    pub name: String,

    /// Enabled platform identifiers, lowercase, first-added order, unique
    #[serde(default)]
    pub platforms: Vec<String>,

    /// Dependency name -> version/spec; opaque to the orchestration core
    #[serde(default)]
    pub dependencies: serde_json::Map<String, serde_json::Value>,
}

impl Manifest {
    /// Fresh manifest for a newly scaffolded project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            platforms: Vec::new(),
            dependencies: serde_json::Map::new(),
        }
    }

    /// Load the manifest from `<project_root>/mosaic.json`.
    ///
    /// A missing, unreadable, or unparseable file is the recoverable
    /// [`Error::ManifestUnreadable`]; the caller-facing message tells the
    /// user to check the project directory rather than surfacing raw I/O
    /// detail.
    pub fn load(project_root: &Utf8Path) -> Result<Self> {
        let path = project_root.join(MANIFEST_FILE_NAME);
        let content = fs::read_to_string(&path).map_err(|e| {
            tracing::debug!("failed to read {path}: {e}");
            Error::ManifestUnreadable
        })?;

        serde_json::from_str(&content).map_err(|e| {
            tracing::debug!("failed to parse {path}: {e}");
            Error::ManifestUnreadable
        })
    }

    /// Persist the manifest to `<project_root>/mosaic.json`.
    ///
    /// The full content is rewritten, tab-indented so hand-edits stay
    /// diff-friendly. The write goes to a temp file in the same directory
    /// and is renamed into place, so the manifest is never observed in a
    /// partially-written state. Write failures here are unexpected: the
    /// caller already validated the mutation.
    pub fn save(&self, project_root: &Utf8Path) -> Result<()> {
        let path = project_root.join(MANIFEST_FILE_NAME);

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .context("Failed to serialize manifest")?;
        buf.push(b'\n');

        let mut tmp = tempfile::NamedTempFile::new_in(project_root)
            .with_context(|| format!("Failed to create temp file in '{project_root}'"))?;
        tmp.write_all(&buf)
            .context("Failed to write manifest contents")?;
        tmp.persist(&path)
            .with_context(|| format!("Failed to replace '{path}'"))?;

        tracing::debug!("wrote manifest to {path}");
        Ok(())
    }

    /// Append a platform identifier if not already present.
    ///
    /// Returns `true` if the list changed. Identifiers are expected to be
    /// normalized (trimmed, lowercase) by the caller.
    pub fn add_platform(&mut self, id: &str) -> bool {
        if self.has_platform(id) {
            false
        } else {
            self.platforms.push(id.to_string());
            true
        }
    }

    /// Whether a platform identifier is enabled for this project
    pub fn has_platform(&self, id: &str) -> bool {
        self.platforms.iter().any(|p| p == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn tempdir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_new_manifest_is_empty() {
        let manifest = Manifest::new("demo");
        assert_eq!(manifest.name, "demo");
        assert!(manifest.platforms.is_empty());
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_guard, root) = tempdir();
        let mut manifest = Manifest::new("demo");
        manifest.add_platform("web");
        manifest.dependencies.insert(
            "left-pad".to_string(),
            serde_json::Value::String("^1.3.0".to_string()),
        );
        manifest.dependencies.insert(
            "widgets".to_string(),
            serde_json::json!({ "version": "2.0.0", "optional": true }),
        );

        manifest.save(&root).unwrap();
        let loaded = Manifest::load(&root).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn test_save_is_tab_indented() {
        let (_guard, root) = tempdir();
        Manifest::new("demo").save(&root).unwrap();

        let content = std::fs::read_to_string(root.join(MANIFEST_FILE_NAME)).unwrap();
        assert!(content.contains("\t\"name\""), "got: {content}");
        assert!(!content.contains("  \"name\""));
    }

    #[test]
    fn test_load_missing_file_is_recoverable() {
        let (_guard, root) = tempdir();
        let err = Manifest::load(&root).unwrap_err();
        assert!(matches!(err, Error::ManifestUnreadable));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_load_invalid_json_is_recoverable() {
        let (_guard, root) = tempdir();
        std::fs::write(root.join(MANIFEST_FILE_NAME), "{ not json").unwrap();
        let err = Manifest::load(&root).unwrap_err();
        assert!(matches!(err, Error::ManifestUnreadable));
    }

    #[test]
    fn test_load_tolerates_missing_optional_fields() {
        let (_guard, root) = tempdir();
        std::fs::write(root.join(MANIFEST_FILE_NAME), r#"{"name": "bare"}"#).unwrap();
        let manifest = Manifest::load(&root).unwrap();
        assert_eq!(manifest.name, "bare");
        assert!(manifest.platforms.is_empty());
    }

    #[test]
    fn test_add_platform_deduplicates() {
        let mut manifest = Manifest::new("demo");
        assert!(manifest.add_platform("web"));
        assert!(!manifest.add_platform("web"));
        assert_eq!(manifest.platforms, vec!["web"]);
    }

    #[test]
    fn test_add_platform_preserves_insertion_order() {
        let mut manifest = Manifest::new("demo");
        manifest.add_platform("web");
        manifest.add_platform("desktop");
        manifest.add_platform("web");
        assert_eq!(manifest.platforms, vec!["web", "desktop"]);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let (_guard, root) = tempdir();
        let mut manifest = Manifest::new("demo");
        manifest.save(&root).unwrap();

        manifest.add_platform("web");
        manifest.save(&root).unwrap();

        let loaded = Manifest::load(&root).unwrap();
        assert_eq!(loaded.platforms, vec!["web"]);
    }
}
