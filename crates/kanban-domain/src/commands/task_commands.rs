use super::Command;
use crate::{Board, ColumnId, Task, TaskId};
use kanban_core::{KanbanError, KanbanResult};

/// Append a new task to the end of a column
pub struct AddTask {
    pub column_id: ColumnId,
    pub title: String,
    pub description: Option<String>,
}

impl AddTask {
    pub fn new(column_id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            column_id,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Command for AddTask {
    fn apply(&self, board: &Board) -> KanbanResult<Board> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(KanbanError::Validation(
                "Task title cannot be empty".to_string(),
            ));
        }
        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let mut next = board.clone();
        next.column_mut(self.column_id)?
            .push_task(Task::new(title.to_string(), description));
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Add task '{}' to {}", self.title.trim(), self.column_id)
    }
}

/// Remove a task from a column. Unknown ids are a no-op.
pub struct DeleteTask {
    pub task_id: TaskId,
    pub column_id: ColumnId,
}

impl Command for DeleteTask {
    fn apply(&self, board: &Board) -> KanbanResult<Board> {
        let mut next = board.clone();
        if next.column_mut(self.column_id)?.take_task(&self.task_id).is_none() {
            tracing::debug!(
                "Task {} not in column {}, nothing to delete",
                self.task_id,
                self.column_id
            );
        }
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Delete task {} from {}", self.task_id, self.column_id)
    }
}

/// Relocate a task from one column to the end of another
///
/// Dropping onto the source column never reorders. A task that is no longer
/// in the source column (deleted mid-drag, say) leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTask {
    pub task_id: TaskId,
    pub source_column_id: ColumnId,
    pub target_column_id: ColumnId,
}

impl Command for MoveTask {
    fn apply(&self, board: &Board) -> KanbanResult<Board> {
        if self.source_column_id == self.target_column_id {
            return Ok(board.clone());
        }

        let mut next = board.clone();
        let Some(task) = next
            .column_mut(self.source_column_id)?
            .take_task(&self.task_id)
        else {
            tracing::debug!(
                "Task {} not in column {}, move skipped",
                self.task_id,
                self.source_column_id
            );
            return Ok(board.clone());
        };
        next.column_mut(self.target_column_id)?.push_task(task);
        Ok(next)
    }

    fn description(&self) -> String {
        format!(
            "Move task {} from {} to {}",
            self.task_id, self.source_column_id, self.target_column_id
        )
    }
}
