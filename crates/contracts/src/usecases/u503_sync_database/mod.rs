pub mod response;

pub use response::SyncResponse;

use crate::usecases::common::UseCaseMetadata;

pub const MSG_SYNCED: &str = "Base de dados sincronizada com sucesso";

pub struct SyncDatabase;

impl UseCaseMetadata for SyncDatabase {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "sync_database"
    }

    fn display_name() -> &'static str {
        "Sincronizar Base"
    }

    fn description() -> &'static str {
        "Atualiza a base de dados com as novas planilhas"
    }
}
