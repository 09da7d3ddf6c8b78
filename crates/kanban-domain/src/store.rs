//! Owner of the current board snapshot.
//!
//! `BoardStore` is the decision core: it runs commands against the current
//! snapshot and swaps in the result. Snapshots are handed out behind `Arc`,
//! so a reader holding an older snapshot never observes a later transition.

use std::sync::Arc;

use kanban_core::KanbanResult;

use crate::commands::{AddTask, Command, DeleteTask, MoveTask, ResetBoard};
use crate::{Board, ColumnId, TaskId};

/// Result of running a command against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The board changed; carries the new snapshot.
    Committed(Arc<Board>),
    /// The command was a no-op and the snapshot was kept.
    Unchanged,
}

impl Transition {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    pub fn snapshot(&self) -> Option<&Arc<Board>> {
        match self {
            Self::Committed(board) => Some(board),
            Self::Unchanged => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    current: Arc<Board>,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self {
            current: Arc::new(board),
        }
    }

    pub fn board(&self) -> &Arc<Board> {
        &self.current
    }

    /// Run a command. On error the current snapshot is kept as is.
    pub fn execute(&mut self, command: &dyn Command) -> KanbanResult<Transition> {
        tracing::debug!("Executing: {}", command.description());

        let next = command.apply(&self.current)?;
        if next == *self.current {
            return Ok(Transition::Unchanged);
        }

        self.current = Arc::new(next);
        Ok(Transition::Committed(Arc::clone(&self.current)))
    }

    pub fn add_task(
        &mut self,
        column_id: ColumnId,
        title: &str,
        description: Option<&str>,
    ) -> KanbanResult<Transition> {
        self.execute(&AddTask {
            column_id,
            title: title.to_string(),
            description: description.map(str::to_string),
        })
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

    /// Always commits, even when the board is already empty, so a confirmed
    /// reset is written out and overrides any earlier failed save.
    pub fn reset(&mut self) -> KanbanResult<Transition> {
        tracing::debug!("Executing: {}", ResetBoard.description());

        self.current = Arc::new(ResetBoard.apply(&self.current)?);
        Ok(Transition::Committed(Arc::clone(&self.current)))
    }
}
