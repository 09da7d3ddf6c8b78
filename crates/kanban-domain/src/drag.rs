//! Drag-to-move interaction state.
//!
//! Provides the single-session state machine a rendering layer feeds with
//! drag events. It never touches the board itself: a drop yields a
//! [`MoveTask`] intent for the caller to execute.

use crate::commands::MoveTask;
use crate::{ColumnId, TaskId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        task_id: TaskId,
        source_column_id: ColumnId,
    },
    HoveringTarget {
        task_id: TaskId,
        source_column_id: ColumnId,
        candidate_column_id: ColumnId,
    },
}

/// Events a rendering layer reports while the user drags a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start {
        task_id: TaskId,
        source_column_id: ColumnId,
    },
    Over(ColumnId),
    Drop(ColumnId),
    End,
}

#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Column currently under the dragged task, for drop-target highlighting.
    pub fn highlighted_column(&self) -> Option<ColumnId> {
        match self.state {
            DragState::HoveringTarget {
                candidate_column_id,
                ..
            } => Some(candidate_column_id),
            _ => None,
        }
    }

    /// Begin a drag. An already active session is replaced.
    pub fn drag_start(&mut self, task_id: TaskId, source_column_id: ColumnId) {
        if self.is_active() {
            tracing::debug!("Drag started while another was active, replacing it");
        }
        self.state = DragState::Dragging {
            task_id,
            source_column_id,
        };
    }

    pub fn drag_over(&mut self, column_id: ColumnId) {
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            DragState::Dragging {
                task_id,
                source_column_id,
            }
            | DragState::HoveringTarget {
                task_id,
                source_column_id,
                ..
            } => DragState::HoveringTarget {
                task_id,
                source_column_id,
                candidate_column_id: column_id,
            },
            DragState::Idle => DragState::Idle,
        };
    }

    /// Finish the drag over `column_id`, returning the move to perform.
    /// The session is idle afterwards whether or not the move changes anything.
    pub fn drop_on(&mut self, column_id: ColumnId) -> Option<MoveTask> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging {
                task_id,
                source_column_id,
            }
            | DragState::HoveringTarget {
                task_id,
                source_column_id,
                ..
            } => Some(MoveTask {
                task_id,
                source_column_id,
                target_column_id: column_id,
            }),
            DragState::Idle => None,
        }
    }

    /// Abandon the drag without moving anything.
    pub fn drag_end(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn handle(&mut self, event: DragEvent) -> Option<MoveTask> {
        match event {
            DragEvent::Start {
                task_id,
                source_column_id,
            } => {
                self.drag_start(task_id, source_column_id);
                None
            }
            DragEvent::Over(column_id) => {
                self.drag_over(column_id);
                None
            }
            DragEvent::Drop(column_id) => self.drop_on(column_id),
            DragEvent::End => {
                self.drag_end();
                None
            }
        }
    }
}
