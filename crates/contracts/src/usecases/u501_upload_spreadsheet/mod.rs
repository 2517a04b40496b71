pub mod response;
pub mod upload_state;

pub use response::UploadResponse;
pub use upload_state::{
    UploadStatus, UploadedFile, PROGRESS_CAP, PROGRESS_STEP, PROGRESS_TICK_MS,
};

use crate::usecases::common::UseCaseMetadata;

/// Имя поля multipart-формы с файлом
pub const UPLOAD_FIELD: &str = "file";

pub const MSG_UPLOADED: &str = "Arquivo enviado com sucesso";
pub const ERR_NO_FILE: &str = "Nenhum arquivo foi enviado";
pub const ERR_NOT_SPREADSHEET: &str = "Apenas arquivos Excel são permitidos!";

pub struct UploadSpreadsheet;

impl UseCaseMetadata for UploadSpreadsheet {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "upload_spreadsheet"
    }

    fn display_name() -> &'static str {
        "Upload de Planilhas"
    }

    fn description() -> &'static str {
        "Envio de planilhas Excel de estoque para o servidor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants_are_exported() {
        assert_eq!(PROGRESS_TICK_MS, 100);
        assert!(PROGRESS_STEP > 0);
        assert_eq!(PROGRESS_CAP % PROGRESS_STEP, 0);
        assert!(PROGRESS_CAP < 100);
    }
}
