use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_error::ErrorResponse;
use thiserror::Error;

use crate::shared::vcs::VcsStepError;

/// Ошибки HTTP-обработчиков
///
/// Клиент получает только `{"error": "<общее сообщение>"}`; причина
/// пишется в лог.
#[derive(Debug, Error)]
pub enum AppError {
    /// Неверный запрос (нет файла, не Excel и т.п.)
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{context}: {source}")]
    Multipart {
        context: &'static str,
        #[source]
        source: MultipartError,
    },

    /// Ошибка внешней утилиты (git add / git commit)
    #[error("{context}: {source}")]
    ExternalTool {
        context: &'static str,
        #[source]
        source: VcsStepError,
    },

    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Internal(&'static str),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn io(context: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| Self::Io { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Multipart { source, .. } => source.status(),
            AppError::ExternalTool { .. } | AppError::Io { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Сообщение, которое уходит клиенту
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Multipart { context, .. }
            | AppError::ExternalTool { context, .. }
            | AppError::Io { context, .. } => context.to_string(),
            AppError::Internal(msg) => msg.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}
