//! Mapping source file loading.

use ormbind_core::{BinderConfig, MetadataSources};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Contents of a mapping source file: entities plus optional binder settings.
#[derive(Debug, Deserialize)]
pub struct SourceFile {
    #[serde(default)]
    pub config: BinderConfig,
    #[serde(flatten)]
    pub sources: MetadataSources,
}

/// Read and parse a mapping source file.
pub fn load(path: &Path) -> Result<SourceFile, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let file: SourceFile = serde_json::from_str(&content)?;
    debug!(path = %path.display(), entities = file.sources.len(), "Loaded mapping sources");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_with_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "config": {{ "default_fetch_timing": "delayed", "foreign_key_prefix": "fk" }},
                "entities": [
                    {{ "name": "Person", "identifier": {{ "name": "id", "java_type": "long" }} }}
                ]
            }}"#
        )
        .unwrap();

        let loaded = load(file.path()).unwrap();
        assert_eq!(loaded.sources.len(), 1);
        assert_eq!(loaded.config.foreign_key_prefix, "fk");
        assert!(!loaded.config.name_foreign_keys);
    }

    #[test]
    fn test_load_without_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "entities": [] }}"#).unwrap();

        let loaded = load(file.path()).unwrap();
        assert!(loaded.sources.is_empty());
        assert_eq!(loaded.config, BinderConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().starts_with("cannot read"));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load(file.path()).is_err());
    }
}
