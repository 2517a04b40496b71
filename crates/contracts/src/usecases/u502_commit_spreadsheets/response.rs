use serde::{Deserialize, Serialize};

/// Ответ на POST /api/commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitResponse {
    pub message: String,
    pub timestamp: String,
}
