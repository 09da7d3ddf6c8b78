use crate::traits::PersistenceStore;
use kanban_core::{KanbanError, KanbanResult};
use tokio::sync::Mutex;

/// In-process slot, optionally capped at a byte quota the way browser
/// storage is. Writes over the quota fail and leave the old value intact.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Vec<u8>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            slot: Mutex::new(None),
            quota: Some(quota),
        }
    }

    /// Start with raw bytes already in the slot
    pub fn with_contents(data: impl Into<Vec<u8>>) -> Self {
        Self {
            slot: Mutex::new(Some(data.into())),
            quota: None,
        }
    }

    pub async fn contents(&self) -> Option<Vec<u8>> {
        self.slot.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl PersistenceStore for MemoryStore {
    async fn read(&self) -> KanbanResult<Option<Vec<u8>>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn write(&self, data: &[u8]) -> KanbanResult<()> {
        if let Some(quota) = self.quota {
            if data.len() > quota {
                return Err(KanbanError::Storage(format!(
                    "Quota exceeded: {} bytes requested, {} allowed",
                    data.len(),
                    quota
                )));
            }
        }
        *self.slot.lock().await = Some(data.to_vec());
        Ok(())
    }

    async fn discard(&self) -> KanbanResult<()> {
        *self.slot.lock().await = None;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_read_discard() {
        let store = MemoryStore::new();
        assert!(store.read().await.unwrap().is_none());

        store.write(b"one").await.unwrap();
        store.write(b"two").await.unwrap();
        assert_eq!(store.read().await.unwrap().as_deref(), Some(&b"two"[..]));

        store.discard().await.unwrap();
        assert!(store.contents().await.is_none());
    }

    #[tokio::test]
    async fn test_quota_rejects_large_write_and_keeps_old_value() {
        let store = MemoryStore::with_quota(4);
        store.write(b"tiny").await.unwrap();

        let err = store.write(b"too large").await.unwrap_err();
        assert!(matches!(err, KanbanError::Storage(_)));
        assert_eq!(store.contents().await.as_deref(), Some(&b"tiny"[..]));
    }
}
