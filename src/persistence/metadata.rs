use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// App metadata stored in meta.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerMeta {
    #[serde(default)]
    pub save_count: u64,
    #[serde(default)]
    pub last_saved: Option<String>, // ISO8601 timestamp
}

impl TrackerMeta {
    /// Record a completed save.
    pub fn note_saved(&mut self) {
        self.save_count += 1;
        self.last_saved = Some(chrono::Local::now().to_rfc3339());
    }
}

/// Load app metadata from meta.json file
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<TrackerMeta> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(TrackerMeta::default());
    }

    let content = std::fs::read_to_string(path)?;
    let metadata: TrackerMeta = serde_json::from_str(&content)?;
    Ok(metadata)
}

/// Save app metadata to meta.json file
pub fn save_metadata<P: AsRef<Path>>(path: P, metadata: &TrackerMeta) -> Result<()> {
    let json = serde_json::to_string_pretty(metadata)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_metadata() {
        let temp_dir = tempdir().unwrap();
        let meta_path = temp_dir.path().join("meta.json");

        let metadata = load_metadata(&meta_path).unwrap();
        assert_eq!(metadata.save_count, 0);
        assert!(metadata.last_saved.is_none());
    }

    #[test]
    fn test_save_and_load_metadata() {
        let temp_dir = tempdir().unwrap();
        let meta_path = temp_dir.path().join("meta.json");

        let mut metadata = TrackerMeta::default();
        metadata.note_saved();
        metadata.note_saved();

        save_metadata(&meta_path, &metadata).unwrap();

        let loaded = load_metadata(&meta_path).unwrap();
        assert_eq!(loaded.save_count, 2);
        assert!(loaded.last_saved.is_some());
    }
}
