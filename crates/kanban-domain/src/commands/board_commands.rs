use super::Command;
use crate::Board;
use kanban_core::KanbanResult;

/// Replace the whole board with the default empty columns.
///
/// Destructive. Callers obtain user confirmation before issuing it.
pub struct ResetBoard;

impl Command for ResetBoard {
    fn apply(&self, _board: &Board) -> KanbanResult<Board> {
        Ok(Board::default())
    }

    fn description(&self) -> String {
        "Reset board".to_string()
    }
}
