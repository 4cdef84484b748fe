use crate::domain::ports::Storage;
use crate::utils::error::{EngineError, Result};
use std::fs;
use std::path::Path;

/// File-backed storage rooted at a base directory. Writes go through a
/// sibling temp file plus rename, so the table file is replaced in one step.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let full_path = Path::new(&self.base_path).join(path);
        match fs::read(&full_path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file_name = full_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| EngineError::StorageError {
                message: format!("invalid table path: {}", path),
            })?;

        // Temp file lives next to the target so the rename never crosses a
        // filesystem boundary.
        let tmp_path = full_path.with_file_name(format!("{}.tmp", file_name));
        fs::write(&tmp_path, data)?;
        fs::rename(&tmp_path, &full_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        assert_eq!(storage.read_file("sales_data.csv").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        storage.write_file("sales_data.csv", b"a,b\n1,2\n").unwrap();
        assert_eq!(
            storage.read_file("sales_data.csv").unwrap(),
            Some(b"a,b\n1,2\n".to_vec())
        );
    }

    #[test]
    fn test_write_leaves_no_temp_residue() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        storage.write_file("sales_data.csv", b"a,b\n").unwrap();
        storage.write_file("sales_data.csv", b"a,b\n1,2\n").unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        storage.write_file("nested/tables/sales.csv", b"a\n").unwrap();
        assert!(storage.read_file("nested/tables/sales.csv").unwrap().is_some());
    }
}
