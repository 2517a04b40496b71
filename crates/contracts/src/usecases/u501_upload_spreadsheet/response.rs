use serde::{Deserialize, Serialize};

/// POST /api/upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub size: u64,
}
