use kanban_core::KanbanResult;

use crate::Board;

pub mod board_commands;
pub mod task_commands;

pub use board_commands::*;
pub use task_commands::*;

/// A board transition.
///
/// Commands never edit the board they are given: `apply` returns the next
/// snapshot, which is value-equal to the input when the command is a no-op.
/// On error the caller keeps the input snapshot, so every command is
/// all-or-nothing.
pub trait Command: Send + Sync {
    fn apply(&self, board: &Board) -> KanbanResult<Board>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}
