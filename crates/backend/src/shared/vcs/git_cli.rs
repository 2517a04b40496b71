use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;

use super::{VcsError, VersionControl};

/// `git` из PATH, запускаемый в заданном рабочем каталоге
///
/// Аргументы передаются процессу напрямую, без оболочки, поэтому
/// сообщение коммита не нуждается в экранировании.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self::with_program("git", workdir)
    }

    pub fn with_program(program: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            workdir: workdir.into(),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<String, VcsError> {
        let command = format!("{} {}", self.program, args.join(" "));
        tracing::debug!("Running `{}` in {}", command, self.workdir.display());

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .await
            .map_err(|source| VcsError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() {
            // git commit пишет "nothing to commit" в stdout, а не в stderr
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(VcsError::Exit {
                command,
                status: output.status.to_string(),
                output: if stderr.is_empty() { stdout } else { stderr },
            });
        }

        Ok(stdout)
    }
}

#[async_trait]
impl VersionControl for GitCli {
    async fn stage_all(&self) -> Result<(), VcsError> {
        self.run(&["add", "."]).await.map(|_| ())
    }

    async fn commit(&self, message: &str) -> Result<(), VcsError> {
        self.run(&["commit", "-m", message]).await.map(|_| ())
    }

    async fn push(&self) -> Result<(), VcsError> {
        self.run(&["push"]).await.map(|_| ())
    }

    fn tool_name(&self) -> &str {
        &self.program
    }
}
