use contracts::domain::a001_stock_item::{ItemCatalog, StaticItemCatalog};
use std::sync::Arc;
use std::time::Duration;

use crate::shared::config::Config;
use crate::shared::spreadsheet_store::SpreadsheetStore;
use crate::shared::vcs::{GitCli, VersionControl};

/// Общее состояние обработчиков
///
/// Изменяемого состояния нет: всё, что меняется, лежит на диске.
#[derive(Clone)]
pub struct AppState {
    pub store: SpreadsheetStore,
    pub vcs: Arc<dyn VersionControl>,
    pub catalog: Arc<dyn ItemCatalog>,
    pub push_enabled: bool,
    pub sync_delay: Duration,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            store: SpreadsheetStore::new(config.storage_dir()),
            vcs: Arc::new(GitCli::new(config.git_workdir())),
            catalog: Arc::new(StaticItemCatalog::sample()),
            push_enabled: config.git.push,
            sync_delay: config.sync_delay(),
            max_upload_bytes: config.max_upload_bytes(),
        }
    }
}
