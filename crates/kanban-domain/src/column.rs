use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::id::TaskId;
use crate::task::Task;

/// The fixed set of columns every board carries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnId {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl ColumnId {
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = KanbanError;

    fn from_str(s: &str) -> KanbanResult<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| KanbanError::Validation(format!("Unknown column id: '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.default_title().to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn find_task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == task_id)
    }

    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.find_task(task_id).is_some()
    }

    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove and return the task, leaving the order of the rest intact.
    pub(crate) fn take_task(&mut self, task_id: &TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| &t.id == task_id)?;
        Some(self.tasks.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_ids() {
        assert_eq!("todo".parse::<ColumnId>().unwrap(), ColumnId::Todo);
        assert_eq!("in-progress".parse::<ColumnId>().unwrap(), ColumnId::InProgress);
        assert_eq!("done".parse::<ColumnId>().unwrap(), ColumnId::Done);
    }

    #[test]
    fn test_unknown_column_id_is_validation_error() {
        let err = "backlog".parse::<ColumnId>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_column_id_wire_form() {
        assert_eq!(
            serde_json::to_string(&ColumnId::InProgress).unwrap(),
            "\"in-progress\""
        );
    }

    #[test]
    fn test_take_task_keeps_remaining_order() {
        let mut column = Column::new(ColumnId::Todo);
        let a = Task::new("a".to_string(), None);
        let b = Task::new("b".to_string(), None);
        let c = Task::new("c".to_string(), None);
        let b_id = b.id.clone();
        column.push_task(a);
        column.push_task(b);
        column.push_task(c);

        let taken = column.take_task(&b_id).unwrap();
        assert_eq!(taken.title, "b");

        let titles: Vec<_> = column.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert!(column.take_task(&b_id).is_none());
    }
}
