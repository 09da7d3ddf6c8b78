use crate::save_queue::SaveQueue;
use kanban_core::{EngineConfig, KanbanError, KanbanResult};
use kanban_domain::commands::{AddTask, Command, DeleteTask, MoveTask};
use kanban_domain::{
    Board, BoardStore, ColumnId, DragEvent, DragSession, DragState, TaskId, Transition,
};
use kanban_persistence::{BoardPersistence, JsonFileStore, PersistenceStore};
use std::sync::Arc;
use tokio::sync::watch;

/// Owns the board for one page session and keeps storage in step with it
///
/// # Transitions
///
/// Every operation runs to completion on `&mut self` before the next one is
/// accepted, so transitions never interleave. A transition that changes the
/// board:
/// - replaces the current snapshot,
/// - publishes it to subscribers,
/// - queues it for saving.
///
/// No-op transitions (deleting an unknown task, dropping a task back onto
/// its own column) publish and save nothing. Reset always counts as a change.
///
/// # Saving
///
/// Saves are queued to a single background worker and written in transition
/// order. The caller never waits on them and never sees a save error. Call
/// [`BoardEngine::shutdown`] to flush pending saves before exit.
///
/// # Example
/// ```ignore
/// let mut engine = BoardEngine::open(&EngineConfig::load()).await;
/// let id = engine.add_task(ColumnId::Todo, "Buy milk", None)?;
/// engine.move_task(&id, ColumnId::Todo, ColumnId::Done)?;
/// engine.shutdown().await;
/// ```
pub struct BoardEngine {
    store: BoardStore,
    drag: DragSession,
    updates: watch::Sender<Arc<Board>>,
    saves: SaveQueue,
}

impl BoardEngine {
    /// Open the engine on the configured data file.
    pub async fn open(config: &EngineConfig) -> Self {
        let path = config.effective_data_file();
        tracing::info!("Opening board at {}", path.display());
        Self::with_store(Arc::new(JsonFileStore::new(path))).await
    }

    /// Load the initial board from `store`, falling back to the default
    /// board, and start the save worker.
    pub async fn with_store(store: Arc<dyn PersistenceStore>) -> Self {
        let persistence = BoardPersistence::new(store);
        let board = persistence.load().await;
        let store = BoardStore::new(board);
        let (updates, _) = watch::channel(Arc::clone(store.board()));

        Self {
            store,
            drag: DragSession::new(),
            updates,
            saves: SaveQueue::spawn(persistence),
        }
    }

    pub fn board(&self) -> Arc<Board> {
        Arc::clone(self.store.board())
    }

    /// Receive every committed snapshot. The receiver starts at the current one.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Board>> {
        self.updates.subscribe()
    }

    pub fn execute(&mut self, command: &dyn Command) -> KanbanResult<Transition> {
        let transition = self.store.execute(command)?;
        self.publish(&transition);
        Ok(transition)
    }

    fn publish(&self, transition: &Transition) {
        if let Transition::Committed(board) = transition {
            self.updates.send_replace(Arc::clone(board));
            self.saves.queue(Arc::clone(board));
        }
    }

    /// Add a task to the end of `column_id` and return its id.
    pub fn add_task(
        &mut self,
        column_id: ColumnId,
        title: &str,
        description: Option<&str>,
    ) -> KanbanResult<TaskId> {
        let transition = self.execute(&AddTask {
            column_id,
            title: title.to_string(),
            description: description.map(str::to_string),
        })?;
        let board = transition.snapshot().cloned().unwrap_or_else(|| self.board());
        newest_task_id(&board, column_id)
    }

    pub fn delete_task(
        &mut self,
        task_id: &TaskId,
        column_id: ColumnId,
    ) -> KanbanResult<Transition> {
        self.execute(&DeleteTask {
            task_id: task_id.clone(),
            column_id,
        })
    }

    pub fn move_task(
        &mut self,
        task_id: &TaskId,
        source_column_id: ColumnId,
        target_column_id: ColumnId,
    ) -> KanbanResult<Transition> {
        self.execute(&MoveTask {
            task_id: task_id.clone(),
            source_column_id,
            target_column_id,
        })
    }

    /// Replace the board with three empty columns.
    ///
    /// Does not ask for confirmation; the caller must have obtained it.
    /// The empty board is published and saved even if nothing changed in memory.
    pub fn reset(&mut self) -> KanbanResult<Transition> {
        let transition = self.store.reset()?;
        self.publish(&transition);
        Ok(transition)
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn highlighted_column(&self) -> Option<ColumnId> {
        self.drag.highlighted_column()
    }

    /// Feed one drag event. Only a drop during an active drag can change the
    /// board; the session is idle again afterwards either way.
    pub fn handle_drag(&mut self, event: DragEvent) -> KanbanResult<Transition> {
        match self.drag.handle(event) {
            Some(intent) => self.execute(&intent),
            None => Ok(Transition::Unchanged),
        }
    }

    /// Stop accepting saves and wait for queued ones to be written.
    pub async fn shutdown(mut self) {
        self.saves.close().await;
        tracing::info!("Board engine shut down");
    }
}

fn newest_task_id(board: &Board, column_id: ColumnId) -> KanbanResult<TaskId> {
    board
        .column(column_id)
        .and_then(|c| c.tasks.last())
        .map(|t| t.id.clone())
        .ok_or_else(|| {
            KanbanError::Internal(format!("Added task missing from {}", column_id))
        })
}
