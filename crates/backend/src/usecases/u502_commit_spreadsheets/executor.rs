use std::sync::Arc;

use crate::shared::vcs::{VcsStep, VcsStepError, VersionControl};

/// Чем закончилась публикация
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Коммит создан, push не выполнялся или не удался
    Committed,
    /// Коммит создан и отправлен в удалённый репозиторий
    Pushed,
}

/// git add → git commit → git push (best-effort)
pub struct CommitExecutor {
    vcs: Arc<dyn VersionControl>,
    push_enabled: bool,
}

impl CommitExecutor {
    pub fn new(vcs: Arc<dyn VersionControl>, push_enabled: bool) -> Self {
        Self { vcs, push_enabled }
    }

    /// Ошибки add и commit возвращаются вызывающему (включая
    /// "nothing to commit"); ошибка push только пишется в лог.
    pub async fn publish(&self, message: &str) -> Result<PublishOutcome, VcsStepError> {
        tracing::info!("Starting commit via {}", self.vcs.tool_name());

        self.vcs.stage_all().await.map_err(|source| VcsStepError {
            step: VcsStep::Stage,
            source,
        })?;
        tracing::info!("Staged all changes");

        self.vcs.commit(message).await.map_err(|source| VcsStepError {
            step: VcsStep::Commit,
            source,
        })?;
        tracing::info!("Committed: {}", message);

        if !self.push_enabled {
            tracing::info!("Push disabled in configuration, skipping");
            return Ok(PublishOutcome::Committed);
        }

        match self.vcs.push().await {
            Ok(()) => {
                tracing::info!("Pushed to remote");
                Ok(PublishOutcome::Pushed)
            }
            Err(e) => {
                // удалённый репозиторий может быть не настроен
                tracing::warn!("Push skipped: {}", e);
                Ok(PublishOutcome::Committed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::vcs::fake::FakeVcs;

    #[tokio::test]
    async fn test_full_pipeline_pushes() {
        let vcs = Arc::new(FakeVcs::new());
        let executor = CommitExecutor::new(vcs.clone(), true);

        let outcome = executor.publish("Atualização").await.unwrap();
        assert_eq!(outcome, PublishOutcome::Pushed);
        assert_eq!(vcs.calls(), vec!["add .", "commit -m Atualização", "push"]);
    }

    #[tokio::test]
    async fn test_push_failure_is_not_an_error() {
        let vcs = Arc::new(FakeVcs::failing_at(&[VcsStep::Push]));
        let executor = CommitExecutor::new(vcs.clone(), true);

        let outcome = executor.publish("msg").await.unwrap();
        assert_eq!(outcome, PublishOutcome::Committed);
        assert_eq!(vcs.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_push_disabled_is_not_attempted() {
        let vcs = Arc::new(FakeVcs::new());
        let executor = CommitExecutor::new(vcs.clone(), false);

        let outcome = executor.publish("msg").await.unwrap();
        assert_eq!(outcome, PublishOutcome::Committed);
        assert_eq!(vcs.calls(), vec!["add .", "commit -m msg"]);
    }

    #[tokio::test]
    async fn test_commit_failure_propagates_and_skips_push() {
        let vcs = Arc::new(FakeVcs::failing_at(&[VcsStep::Commit, VcsStep::Push]));
        let executor = CommitExecutor::new(vcs.clone(), true);

        let err = executor.publish("msg").await.unwrap_err();
        assert_eq!(err.step, VcsStep::Commit);
        assert_eq!(vcs.calls(), vec!["add .", "commit -m msg"]);
    }

    #[tokio::test]
    async fn test_stage_failure_stops_pipeline() {
        let vcs = Arc::new(FakeVcs::failing_at(&[VcsStep::Stage]));
        let executor = CommitExecutor::new(vcs.clone(), true);

        let err = executor.publish("msg").await.unwrap_err();
        assert_eq!(err.step, VcsStep::Stage);
        assert_eq!(vcs.calls(), vec!["add ."]);
    }
}
