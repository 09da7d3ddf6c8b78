use crate::traits::Serializer;
use kanban_core::{KanbanError, KanbanResult};
use kanban_domain::Board;

/// JSON serializer for board snapshots
///
/// Deserialization also checks the board invariants, so a value that parses
/// but has the wrong columns or duplicate ids is rejected like garbage.
pub struct JsonSerializer;

impl Serializer<Board> for JsonSerializer {
    fn serialize(&self, data: &Board) -> KanbanResult<Vec<u8>> {
        let json =
            serde_json::to_vec_pretty(data).map_err(|e| KanbanError::Serialization(e.to_string()))?;
        Ok(json)
    }

    fn deserialize(&self, bytes: &[u8]) -> KanbanResult<Board> {
        let board: Board =
            serde_json::from_slice(bytes).map_err(|e| KanbanError::Serialization(e.to_string()))?;
        board
            .validate()
            .map_err(|e| KanbanError::Serialization(format!("Schema mismatch: {}", e)))?;
        Ok(board)
    }
}
