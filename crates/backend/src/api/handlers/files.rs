use axum::extract::State;
use axum::Json;
use contracts::shared::files::FileListResponse;

use crate::app_state::AppState;
use crate::shared::error::AppError;

const ERR_LIST_FILES: &str = "Erro ao listar arquivos";

/// GET /api/files
pub async fn list_all(State(state): State<AppState>) -> Result<Json<FileListResponse>, AppError> {
    let files = state
        .store
        .list()
        .await
        .map_err(AppError::io(ERR_LIST_FILES))?;
    Ok(Json(FileListResponse { files }))
}
