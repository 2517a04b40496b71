pub mod request;
pub mod response;

pub use request::CommitRequest;
pub use response::CommitResponse;

use crate::usecases::common::UseCaseMetadata;

pub const DEFAULT_COMMIT_MESSAGE: &str = "Atualização de planilhas de estoque";
pub const MSG_COMMITTED: &str = "Commit realizado com sucesso";
pub const ERR_COMMIT: &str = "Erro ao realizar commit";

pub struct CommitSpreadsheets;

impl UseCaseMetadata for CommitSpreadsheets {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "commit_spreadsheets"
    }

    fn display_name() -> &'static str {
        "Git Commit"
    }

    fn description() -> &'static str {
        "git add, git commit e git push (opcional) do diretório de trabalho"
    }
}
