/// Метаданные UseCase для идентификации в логах и UI
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "upload_spreadsheet")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u501_upload_spreadsheet"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_upload_spreadsheet::UploadSpreadsheet;
    use crate::usecases::u502_commit_spreadsheets::CommitSpreadsheets;
    use crate::usecases::u503_sync_database::SyncDatabase;

    #[test]
    fn test_full_names() {
        assert_eq!(UploadSpreadsheet::full_name(), "u501_upload_spreadsheet");
        assert_eq!(CommitSpreadsheets::full_name(), "u502_commit_spreadsheets");
        assert_eq!(SyncDatabase::full_name(), "u503_sync_database");
    }
}
