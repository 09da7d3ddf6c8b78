use async_trait::async_trait;
use kanban_core::KanbanResult;

/// A single durable key-value slot holding the serialized board.
///
/// Implementations handle different backends (file, memory, ...). Every
/// write replaces the whole value; there are no partial or delta writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Read the stored bytes, or `None` when the slot is empty
    async fn read(&self) -> KanbanResult<Option<Vec<u8>>>;

    /// Overwrite the slot with `data`
    async fn write(&self, data: &[u8]) -> KanbanResult<()>;

    /// Drop the current value so the next read sees an empty slot
    async fn discard(&self) -> KanbanResult<()>;

    /// Human-readable location of the slot, for logs
    fn location(&self) -> String;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> KanbanResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> KanbanResult<T>;
}
