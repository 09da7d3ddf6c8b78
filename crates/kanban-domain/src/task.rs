use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::id::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Mint a task with a fresh id. The timestamp is truncated to the
    /// millisecond precision the stored form carries.
    pub fn new(title: String, description: Option<String>) -> Self {
        Self {
            id: TaskId::generate(),
            title,
            description,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}
