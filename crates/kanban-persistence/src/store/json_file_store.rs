use crate::store::atomic_writer::AtomicWriter;
use crate::traits::PersistenceStore;
use chrono::{DateTime, Utc};
use kanban_core::KanbanResult;
use std::path::{Path, PathBuf};

const BACKUP_TAG: &str = "corrupt-";

/// JSON file-backed board slot
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a value discarded at `at` is kept for inspection.
    ///
    /// Each discard gets its own `<stem>.corrupt-<UTC ms timestamp>.backup`
    /// sibling so earlier backups survive later corruptions.
    pub fn backup_path_at(&self, at: DateTime<Utc>) -> PathBuf {
        self.path.with_extension(format!(
            "{}{}.backup",
            BACKUP_TAG,
            at.format("%Y%m%dT%H%M%S%3fZ")
        ))
    }

    /// Backups left by earlier discards, oldest first.
    pub async fn backups(&self) -> KanbanResult<Vec<PathBuf>> {
        let Some(prefix) = self.backup_prefix() else {
            return Ok(Vec::new());
        };
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !tokio::fs::try_exists(&dir).await.unwrap_or(false) {
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with(&prefix) && name.ends_with(".backup") {
                found.push(entry.path());
            }
        }
        found.sort();
        Ok(found)
    }

    fn backup_prefix(&self) -> Option<String> {
        let stem = self.path.file_stem()?.to_string_lossy();
        Some(format!("{}.{}", stem, BACKUP_TAG))
    }

    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn read(&self) -> KanbanResult<Option<Vec<u8>>> {
        AtomicWriter::read_optional(&self.path).await
    }

    async fn write(&self, data: &[u8]) -> KanbanResult<()> {
        AtomicWriter::write_atomic(&self.path, data).await?;
        tracing::info!("Saved {} bytes to {}", data.len(), self.path.display());
        Ok(())
    }

    /// Move the current file aside rather than deleting it
    async fn discard(&self) -> KanbanResult<()> {
        if !self.exists().await {
            return Ok(());
        }
        let backup_path = self.backup_path_at(Utc::now());
        if tokio::fs::try_exists(&backup_path).await.unwrap_or(false) {
            tracing::warn!("Replacing existing backup {}", backup_path.display());
        }
        tokio::fs::rename(&self.path, &backup_path).await?;
        tracing::warn!(
            "Moved unreadable board file {} to {}",
            self.path.display(),
            backup_path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_and_read() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("board.json");
        let store = JsonFileStore::new(&file_path);

        store.write(b"{\"columns\": []}").await.unwrap();
        assert!(file_path.exists());

        let data = store.read().await.unwrap().unwrap();
        assert_eq!(data, b"{\"columns\": []}");
    }

    #[tokio::test]
    async fn test_exists() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("board.json"));

        assert!(!store.exists().await);
        assert!(store.read().await.unwrap().is_none());

        store.write(b"{}").await.unwrap();
        assert!(store.exists().await);
    }

    #[tokio::test]
    async fn test_discard_keeps_backup() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("board.json"));
        store.write(b"garbage").await.unwrap();

        store.discard().await.unwrap();

        assert!(!store.exists().await);
        assert!(store.read().await.unwrap().is_none());
        let backups = store.backups().await.unwrap();
        assert_eq!(backups.len(), 1);
        let backup = tokio::fs::read(&backups[0]).await.unwrap();
        assert_eq!(backup, b"garbage");
    }

    #[tokio::test]
    async fn test_repeated_discards_keep_every_backup() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("board.json"));

        store.write(b"first garbage").await.unwrap();
        store.discard().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        store.write(b"second garbage").await.unwrap();
        store.discard().await.unwrap();

        let backups = store.backups().await.unwrap();
        assert_eq!(backups.len(), 2);
        assert_eq!(tokio::fs::read(&backups[0]).await.unwrap(), b"first garbage");
        assert_eq!(tokio::fs::read(&backups[1]).await.unwrap(), b"second garbage");
    }

    #[test]
    fn test_backup_path_is_timestamped() {
        let store = JsonFileStore::new("/data/kanban/board.json");
        let at = DateTime::from_timestamp_millis(1_718_000_000_123).unwrap();
        assert_eq!(
            store.backup_path_at(at),
            PathBuf::from("/data/kanban/board.corrupt-20240610T061320123Z.backup")
        );
    }

    #[tokio::test]
    async fn test_discard_missing_file_is_ok() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("board.json"));
        store.discard().await.unwrap();
    }
}
