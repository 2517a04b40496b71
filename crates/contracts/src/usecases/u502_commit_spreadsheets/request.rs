use serde::{Deserialize, Serialize};

use super::DEFAULT_COMMIT_MESSAGE;

/// POST /api/commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CommitRequest {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Сообщение коммита; пустое или отсутствующее заменяется стандартным
    pub fn effective_message(&self) -> &str {
        match self.message.as_deref().map(str::trim) {
            Some(m) if !m.is_empty() => m,
            _ => DEFAULT_COMMIT_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_when_absent() {
        let req: CommitRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.effective_message(), DEFAULT_COMMIT_MESSAGE);
    }

    #[test]
    fn test_blank_message_falls_back() {
        let req = CommitRequest::with_message("   ");
        assert_eq!(req.effective_message(), DEFAULT_COMMIT_MESSAGE);
    }

    #[test]
    fn test_custom_message_is_trimmed() {
        let req = CommitRequest::with_message("  Planilha de maio ");
        assert_eq!(req.effective_message(), "Planilha de maio");
    }
}
