use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the swot directory - checks for local .swot first, then falls back to global ~/.swot
pub fn get_swot_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_swot(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".swot"))
}

/// Find local .swot directory by walking up the directory tree
fn find_local_swot(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let swot_dir = current.join(".swot");
        if swot_dir.exists() && swot_dir.is_dir() {
            return Some(swot_dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the swot directory exists
pub fn ensure_swot_dir() -> Result<PathBuf> {
    let dir = get_swot_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .swot directory in the current directory
pub fn init_local_swot() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let swot_dir = current_dir.join(".swot");

    if swot_dir.exists() {
        anyhow::bail!("Swot directory already exists: {}", swot_dir.display());
    }

    fs::create_dir_all(&swot_dir)
        .with_context(|| format!("Failed to create directory: {}", swot_dir.display()))?;

    Ok(swot_dir)
}

/// Get path to the subject store (data.csv)
pub fn data_file() -> Result<PathBuf> {
    Ok(ensure_swot_dir()?.join("data.csv"))
}

/// Get path to meta.json (save counters and other app metadata)
pub fn meta_file() -> Result<PathBuf> {
    Ok(ensure_swot_dir()?.join("meta.json"))
}

/// Atomically write content to a file using temp file + rename. A failed
/// write leaves the previous file untouched.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content. `Ok(None)` when the file does not exist; a read error
/// on an existing file is surfaced as an I/O failure.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.csv");

        let content = "Subject Name,Time,Tasks\nMath,0\n";
        atomic_write(&test_file, content).unwrap();

        let read_content = read_file(&test_file).unwrap();
        assert_eq!(read_content.as_deref(), Some(content));
    }

    #[test]
    fn test_atomic_write_replaces_whole_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.csv");

        atomic_write(&test_file, "old content that is longer").unwrap();
        atomic_write(&test_file, "new").unwrap();

        let read_content = read_file(&test_file).unwrap();
        assert_eq!(read_content.as_deref(), Some("new"));
    }

    #[test]
    fn test_read_nonexistent_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nonexistent.csv");

        let content = read_file(&test_file).unwrap();
        assert!(content.is_none());
    }
}
