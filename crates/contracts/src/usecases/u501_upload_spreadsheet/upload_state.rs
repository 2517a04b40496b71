use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::files::format_megabytes;

/// Шаг косметического прогресса (на каждый тик таймера)
pub const PROGRESS_STEP: u8 = 10;
/// Потолок косметического прогресса, 100% ставит только реальный ответ
pub const PROGRESS_CAP: u8 = 90;
/// Период тика таймера прогресса, мс
pub const PROGRESS_TICK_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploading,
    Success,
    Error,
}

impl UploadStatus {
    /// Надпись бейджа
    pub fn label(&self) -> &'static str {
        match self {
            UploadStatus::Uploading => "Enviando...",
            UploadStatus::Success => "Concluído",
            UploadStatus::Error => "Erro",
        }
    }
}

/// Файл в списке загрузок на странице Upload
///
/// Живёт только в UI: создаётся при выборе файла, удаляется при очистке
/// списка или перезагрузке страницы.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: Uuid,
    pub original_name: String,
    pub size_bytes: u64,
    pub status: UploadStatus,
    /// 0..=100
    pub progress: u8,
    pub error: Option<String>,
}

impl UploadedFile {
    pub fn new(original_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_name: original_name.into(),
            size_bytes,
            status: UploadStatus::Uploading,
            progress: 0,
            error: None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Косметический тик. После завершения загрузки ничего не меняет.
    pub fn tick(&mut self) {
        if self.is_uploading() {
            self.progress = self.progress.saturating_add(PROGRESS_STEP).min(PROGRESS_CAP);
        }
    }

    /// Реальный ответ сервера: успех
    pub fn complete(&mut self) {
        self.status = UploadStatus::Success;
        self.progress = 100;
        self.error = None;
    }

    /// Реальный ответ сервера: ошибка
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = UploadStatus::Error;
        self.progress = 0;
        self.error = Some(message.into());
    }

    pub fn size_display(&self) -> String {
        format_megabytes(self.size_bytes)
    }
}
