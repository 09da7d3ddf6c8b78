pub mod board;
pub mod column;
pub mod commands;
pub mod drag;
pub mod id;
pub mod store;
pub mod task;

pub use board::Board;
pub use column::{Column, ColumnId};
pub use drag::{DragEvent, DragSession, DragState};
pub use id::TaskId;
pub use store::{BoardStore, Transition};
pub use task::Task;
