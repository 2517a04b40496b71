use async_trait::async_trait;
use std::sync::Mutex;

use super::{VcsError, VcsStep, VersionControl};

/// Тестовая реализация: записывает вызовы, может падать на выбранном шаге
#[derive(Debug, Default)]
pub struct FakeVcs {
    calls: Mutex<Vec<String>>,
    failing: Vec<VcsStep>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(steps: &[VcsStep]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: steps.to_vec(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, step: VcsStep, call: String) -> Result<(), VcsError> {
        self.calls.lock().unwrap().push(call.clone());
        if self.failing.contains(&step) {
            return Err(VcsError::Exit {
                command: call,
                status: "exit status: 1".into(),
                output: format!("fake {step} failure"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl VersionControl for FakeVcs {
    async fn stage_all(&self) -> Result<(), VcsError> {
        self.record(VcsStep::Stage, "add .".into())
    }

    async fn commit(&self, message: &str) -> Result<(), VcsError> {
        self.record(VcsStep::Commit, format!("commit -m {message}"))
    }

    async fn push(&self) -> Result<(), VcsError> {
        self.record(VcsStep::Push, "push".into())
    }

    fn tool_name(&self) -> &str {
        "fake"
    }
}
