use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a task, unique across the whole board.
///
/// Freshly minted ids are time-ordered UUIDs (millisecond timestamp plus
/// random bits), so no counter or shared state is needed to keep them unique
/// within a process. Ids read back from storage are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<TaskId> = (0..1000).map(|_| TaskId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_legacy_ids_are_kept_verbatim() {
        let id: TaskId = serde_json::from_str("\"1718000000000-k3j9x2abc\"").unwrap();
        assert_eq!(id.as_str(), "1718000000000-k3j9x2abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1718000000000-k3j9x2abc\"");
    }
}
