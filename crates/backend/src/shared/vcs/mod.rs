//! Система контроля версий для каталога с таблицами
//!
//! Сервис видит только узкий интерфейс `VersionControl`; реальная
//! реализация запускает `git`, в тестах используется `FakeVcs`.

pub mod git_cli;

#[cfg(test)]
pub mod fake;

pub use git_cli::GitCli;

use async_trait::async_trait;
use thiserror::Error;

/// Ошибки внешней утилиты контроля версий
#[derive(Debug, Error)]
pub enum VcsError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {output}")]
    Exit {
        command: String,
        status: String,
        output: String,
    },
}

/// Шаг публикации изменений
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsStep {
    Stage,
    Commit,
    Push,
}

impl std::fmt::Display for VcsStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VcsStep::Stage => "stage",
            VcsStep::Commit => "commit",
            VcsStep::Push => "push",
        };
        f.write_str(name)
    }
}

/// Ошибка конкретного шага публикации
#[derive(Debug, Error)]
#[error("{step} failed: {source}")]
pub struct VcsStepError {
    pub step: VcsStep,
    #[source]
    pub source: VcsError,
}

/// Трейт для утилит контроля версий
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Добавить все изменения рабочего каталога в индекс
    async fn stage_all(&self) -> Result<(), VcsError>;

    /// Зафиксировать индекс с сообщением
    async fn commit(&self, message: &str) -> Result<(), VcsError>;

    /// Отправить коммиты в удалённый репозиторий
    async fn push(&self) -> Result<(), VcsError>;

    fn tool_name(&self) -> &str;
}
