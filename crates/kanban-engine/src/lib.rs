pub mod engine;
pub mod save_queue;

pub use engine::BoardEngine;
pub use save_queue::SaveQueue;

pub use kanban_core::{init_logging, EngineConfig, KanbanError, KanbanResult};
pub use kanban_domain::{Board, Column, ColumnId, DragEvent, DragState, Task, TaskId, Transition};
