use axum::extract::Multipart;
use contracts::shared::spreadsheet::is_spreadsheet;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_upload_spreadsheet::{
    UploadResponse, UploadSpreadsheet, ERR_NOT_SPREADSHEET, ERR_NO_FILE, MSG_UPLOADED,
    UPLOAD_FIELD,
};

use crate::shared::error::AppError;
use crate::shared::format::format_size;
use crate::shared::spreadsheet_store::{sanitize_file_name, SpreadsheetStore};

const ERR_UPLOAD_READ: &str = "Erro no upload do arquivo";
const ERR_INTERNAL: &str = "Erro interno do servidor";

/// Принимает первый файл из поля `file` и сохраняет его в каталог
///
/// Проверка типа выполняется до записи: отклонённый файл на диск не попадает.
pub async fn receive(
    store: &SpreadsheetStore,
    multipart: &mut Multipart,
) -> Result<UploadResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|source| AppError::Multipart {
            context: ERR_UPLOAD_READ,
            source,
        })?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        // текстовое поле с тем же именем файлом не считается
        let Some(raw_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string);

        if !is_spreadsheet(&raw_name, content_type.as_deref()) {
            tracing::warn!(
                "Rejected upload {:?} (content type {:?})",
                raw_name,
                content_type
            );
            return Err(AppError::validation(ERR_NOT_SPREADSHEET));
        }
        let file_name =
            sanitize_file_name(&raw_name).ok_or_else(|| AppError::validation(ERR_NOT_SPREADSHEET))?;

        let bytes = field.bytes().await.map_err(|source| AppError::Multipart {
            context: ERR_UPLOAD_READ,
            source,
        })?;

        tracing::info!(
            "{}: received {} ({})",
            UploadSpreadsheet::full_name(),
            file_name,
            format_size(bytes.len() as u64)
        );
        store
            .save(&file_name, &bytes)
            .await
            .map_err(AppError::io(ERR_INTERNAL))?;

        return Ok(UploadResponse {
            message: MSG_UPLOADED.to_string(),
            filename: file_name,
            size: bytes.len() as u64,
        });
    }

    Err(AppError::validation(ERR_NO_FILE))
}
