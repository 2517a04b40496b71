use serde::{Deserialize, Serialize};

pub const STATUS_ONLINE: &str = "online";

/// GET /api/status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

impl StatusResponse {
    pub fn is_online(&self) -> bool {
        self.status == STATUS_ONLINE
    }
}
