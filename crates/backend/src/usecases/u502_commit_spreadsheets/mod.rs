pub mod executor;

pub use executor::{CommitExecutor, PublishOutcome};

use contracts::shared::timestamp::now_iso;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_commit_spreadsheets::{
    CommitRequest, CommitResponse, CommitSpreadsheets, ERR_COMMIT, MSG_COMMITTED,
};

use crate::app_state::AppState;
use crate::shared::error::AppError;

/// Запускает публикацию в отдельной задаче
///
/// Обрыв соединения клиентом не прерывает уже начатые git-команды.
pub async fn run(state: &AppState, request: CommitRequest) -> Result<CommitResponse, AppError> {
    let executor = CommitExecutor::new(state.vcs.clone(), state.push_enabled);
    let message = request.effective_message().to_string();

    let outcome = tokio::spawn(async move { executor.publish(&message).await })
        .await
        .map_err(|e| {
            tracing::error!("Commit task failed: {}", e);
            AppError::Internal(ERR_COMMIT)
        })?
        .map_err(|source| AppError::ExternalTool {
            context: ERR_COMMIT,
            source,
        })?;

    tracing::info!("{}: finished ({:?})", CommitSpreadsheets::full_name(), outcome);
    Ok(CommitResponse {
        message: MSG_COMMITTED.to_string(),
        timestamp: now_iso(),
    })
}
