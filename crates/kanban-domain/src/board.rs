use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::column::{Column, ColumnId};
use crate::id::TaskId;
use crate::task::Task;

/// Root aggregate: the three fixed columns and the tasks they hold.
///
/// A `Board` is treated as an immutable snapshot. Transitions build a new
/// board rather than editing one that may already be shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: ColumnId::ALL.into_iter().map(Column::new).collect(),
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub(crate) fn column_mut(&mut self, id: ColumnId) -> KanbanResult<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| KanbanError::NotFound(format!("column {}", id)))
    }

    /// Locate a task anywhere on the board.
    pub fn find_task(&self, task_id: &TaskId) -> Option<(ColumnId, &Task)> {
        self.columns
            .iter()
            .find_map(|c| c.find_task(task_id).map(|t| (c.id, t)))
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.task_count() == 0
    }

    /// Check the structural invariants a stored board must satisfy before it
    /// is accepted: exactly the fixed columns in their fixed order, unique
    /// task ids, and non-blank titles.
    pub fn validate(&self) -> KanbanResult<()> {
        let ids: Vec<ColumnId> = self.columns.iter().map(|c| c.id).collect();
        if ids != ColumnId::ALL {
            return Err(KanbanError::Validation(format!(
                "Unexpected column layout: {:?}",
                ids
            )));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            for task in &column.tasks {
                if !seen.insert(&task.id) {
                    return Err(KanbanError::Validation(format!(
                        "Duplicate task id: {}",
                        task.id
                    )));
                }
                if task.id.as_str().is_empty() {
                    return Err(KanbanError::Validation(format!(
                        "Task with empty id in column {}",
                        column.id
                    )));
                }
                if task.title.trim().is_empty() {
                    return Err(KanbanError::Validation(format!(
                        "Task {} has an empty title",
                        task.id
                    )));
                }
            }
        }

        Ok(())
    }
}
