//! Load-or-default and best-effort save of board snapshots.
//!
//! `BoardPersistence` sits between the engine and a [`PersistenceStore`] slot.
//! Neither operation ever fails from the caller's point of view: an empty or
//! corrupt slot loads as the default board, and a failed write is logged and
//! left for the next save to reconcile.

use crate::serialization::JsonSerializer;
use crate::traits::{PersistenceStore, Serializer};
use kanban_core::KanbanResult;
use kanban_domain::Board;
use std::sync::Arc;

#[derive(Clone)]
pub struct BoardPersistence {
    store: Arc<dyn PersistenceStore>,
}

impl BoardPersistence {
    pub fn new(store: Arc<dyn PersistenceStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn PersistenceStore> {
        &self.store
    }

    pub async fn load(&self) -> Board {
        let bytes = match self.store.read().await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::info!(
                    "No saved board at {}, starting from default",
                    self.store.location()
                );
                return Board::default();
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read board from {}: {}. Starting from default",
                    self.store.location(),
                    e
                );
                return Board::default();
            }
        };

        match JsonSerializer.deserialize(&bytes) {
            Ok(board) => {
                tracing::info!(
                    "Loaded board with {} tasks from {}",
                    board.task_count(),
                    self.store.location()
                );
                board
            }
            Err(e) => {
                tracing::warn!(
                    "Discarding unreadable board at {}: {}",
                    self.store.location(),
                    e
                );
                if let Err(e) = self.store.discard().await {
                    tracing::error!("Failed to discard corrupt board: {}", e);
                }
                Board::default()
            }
        }
    }

    /// Overwrite the slot with the full snapshot. Failures are logged only.
    pub async fn save(&self, board: &Board) {
        if let Err(e) = self.try_save(board).await {
            tracing::error!(
                "Failed to save board to {}: {}",
                self.store.location(),
                e
            );
        }
    }

    pub async fn try_save(&self, board: &Board) -> KanbanResult<()> {
        let bytes = JsonSerializer.serialize(board)?;
        self.store.write(&bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::traits::MockPersistenceStore;
    use kanban_core::KanbanError;
    use kanban_domain::commands::{AddTask, Command};
    use kanban_domain::ColumnId;

    fn sample_board() -> Board {
        let board = AddTask::new(ColumnId::Todo, "Buy milk")
            .apply(&Board::default())
            .unwrap();
        AddTask::new(ColumnId::Done, "File taxes")
            .with_description("before april")
            .apply(&board)
            .unwrap()
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let persistence = BoardPersistence::new(Arc::new(MemoryStore::new()));
        let board = sample_board();

        persistence.save(&board).await;

        assert_eq!(persistence.load().await, board);
    }

    #[tokio::test]
    async fn test_load_empty_slot_is_default() {
        let persistence = BoardPersistence::new(Arc::new(MemoryStore::new()));
        assert_eq!(persistence.load().await, Board::default());
    }

    #[tokio::test]
    async fn test_load_corrupt_value_discards_it() {
        let store = Arc::new(MemoryStore::with_contents(&b"{\"columns\": 12"[..]));
        let persistence = BoardPersistence::new(store.clone());

        let board = persistence.load().await;

        let ids: Vec<_> = board.columns().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![ColumnId::Todo, ColumnId::InProgress, ColumnId::Done]);
        assert!(board.is_empty());
        assert!(store.contents().await.is_none());
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_layouts() {
        let reordered = r#"{"columns": [
            {"id": "done", "title": "Done", "tasks": []},
            {"id": "todo", "title": "To Do", "tasks": []},
            {"id": "in-progress", "title": "In Progress", "tasks": []}
        ]}"#;
        let duplicated = r#"{"columns": [
            {"id": "todo", "title": "To Do", "tasks": []},
            {"id": "todo", "title": "To Do", "tasks": []},
            {"id": "done", "title": "Done", "tasks": []}
        ]}"#;
        let empty_id = r#"{"columns": [
            {"id": "todo", "title": "To Do", "tasks": [
                {"id": "", "title": "Nameless", "createdAt": 1718000000000}
            ]},
            {"id": "in-progress", "title": "In Progress", "tasks": []},
            {"id": "done", "title": "Done", "tasks": []}
        ]}"#;

        for stored in [reordered, duplicated, empty_id] {
            let store = Arc::new(MemoryStore::with_contents(stored));
            let persistence = BoardPersistence::new(store.clone());

            assert_eq!(persistence.load().await, Board::default());
            assert!(store.contents().await.is_none());
        }
    }

    #[tokio::test]
    async fn test_load_read_error_is_default() {
        let mut store = MockPersistenceStore::new();
        store
            .expect_read()
            .returning(|| Err(KanbanError::Storage("unavailable".to_string())));
        store.expect_location().returning(|| "mock".to_string());
        store.expect_discard().never();

        let persistence = BoardPersistence::new(Arc::new(store));
        assert_eq!(persistence.load().await, Board::default());
    }

    #[tokio::test]
    async fn test_load_survives_failed_discard() {
        let mut store = MockPersistenceStore::new();
        store
            .expect_read()
            .returning(|| Ok(Some(b"not json".to_vec())));
        store.expect_location().returning(|| "mock".to_string());
        store
            .expect_discard()
            .times(1)
            .returning(|| Err(KanbanError::Storage("read-only".to_string())));

        let persistence = BoardPersistence::new(Arc::new(store));
        assert_eq!(persistence.load().await, Board::default());
    }

    #[tokio::test]
    async fn test_save_failure_is_swallowed() {
        let mut store = MockPersistenceStore::new();
        store
            .expect_write()
            .times(1)
            .returning(|_| Err(KanbanError::Storage("disk full".to_string())));
        store.expect_location().returning(|| "mock".to_string());

        let persistence = BoardPersistence::new(Arc::new(store));
        persistence.save(&sample_board()).await;
    }

    #[tokio::test]
    async fn test_try_save_reports_failure() {
        let persistence = BoardPersistence::new(Arc::new(MemoryStore::with_quota(16)));
        let err = persistence.try_save(&sample_board()).await.unwrap_err();
        assert!(matches!(err, KanbanError::Storage(_)));
    }

    #[tokio::test]
    async fn test_later_save_reconciles_after_failure() {
        let store = Arc::new(MemoryStore::with_quota(1024));
        let persistence = BoardPersistence::new(store.clone());

        let big = AddTask::new(ColumnId::Todo, "x".repeat(2048))
            .apply(&Board::default())
            .unwrap();
        persistence.save(&big).await;
        assert!(store.contents().await.is_none());

        let small = sample_board();
        persistence.save(&small).await;
        assert_eq!(persistence.load().await, small);
    }
}
