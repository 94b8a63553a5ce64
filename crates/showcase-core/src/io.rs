use crate::error::{CatalogError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn unavailable(path: &Path) -> impl FnOnce(std::io::Error) -> CatalogError + '_ {
    move |source| CatalogError::StorageUnavailable {
        path: path.to_path_buf(),
        source,
    }
}

/// Atomically replace `path` with `data` using a tempfile in the same directory.
/// Readers see either the old document or the new one, never a torn write.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(unavailable(path))?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(unavailable(path))?;
    tmp.write_all(data).map_err(unavailable(path))?;
    tmp.persist(path).map_err(|e| unavailable(path)(e.error))?;
    Ok(())
}

/// Write a file only if it does not already exist. Returns true if written.
pub fn write_if_missing(path: &Path, data: &[u8]) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    atomic_write(path, data)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        atomic_write(&path, b"[]").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn atomic_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/past_work.json");
        atomic_write(&path, b"[]").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn atomic_write_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        atomic_write(&path, b"[1, 2, 3]").unwrap();
        atomic_write(&path, b"[]").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn atomic_write_into_a_file_path_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let err = atomic_write(&blocker.join("products.json"), b"[]").unwrap_err();
        assert!(matches!(err, CatalogError::StorageUnavailable { .. }));
    }

    #[test]
    fn write_if_missing_skips_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("existing.json");
        std::fs::write(&path, b"[{\"name\":\"kept\"}]").unwrap();
        let written = write_if_missing(&path, b"[]").unwrap();
        assert!(!written);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[{\"name\":\"kept\"}]"
        );
    }
}
