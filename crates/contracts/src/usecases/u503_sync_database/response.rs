use serde::{Deserialize, Serialize};

/// Ответ на POST /api/sync-database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResponse {
    pub message: String,
    pub timestamp: String,
}
