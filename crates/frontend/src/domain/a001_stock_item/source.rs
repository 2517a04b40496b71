use std::sync::Arc;

use contracts::domain::a001_stock_item::{resolve_code, ItemCatalog, LookupOutcome, StaticItemCatalog};
use leptos::prelude::*;

use super::api;

/// Имитация задержки сети для локального справочника
pub const LOCAL_LOOKUP_DELAY_MS: u32 = 800;

/// Откуда страница поиска берёт товары
///
/// Кладётся в контекст в `App`; страница не знает, какой источник выбран.
#[derive(Clone)]
pub enum LookupSource {
    /// Справочник в памяти (по умолчанию)
    Local(Arc<dyn ItemCatalog>),
    /// GET /api/a001/stock-item/:code
    Remote,
}

impl Default for LookupSource {
    fn default() -> Self {
        LookupSource::Local(Arc::new(StaticItemCatalog::sample()))
    }
}

impl LookupSource {
    /// `None` для пустого ввода
    pub async fn lookup(&self, input: &str) -> Option<LookupOutcome> {
        match self {
            LookupSource::Local(catalog) => {
                let outcome = resolve_code(catalog.as_ref(), input)?;
                gloo_timers::future::TimeoutFuture::new(LOCAL_LOOKUP_DELAY_MS).await;
                Some(outcome)
            }
            LookupSource::Remote => {
                let code = contracts::domain::a001_stock_item::normalize_code(input)?;
                Some(match api::fetch_by_code(&code).await {
                    Ok(item) => LookupOutcome::from_option(item),
                    Err(e) => {
                        log::error!("Stock item lookup failed: {}", e);
                        LookupOutcome::Failed(e)
                    }
                })
            }
        }
    }

    /// Примеры кодов для подсказки на пустой странице
    pub fn sample_codes(&self) -> Vec<String> {
        match self {
            LookupSource::Local(catalog) => catalog.codes(),
            LookupSource::Remote => StaticItemCatalog::sample().codes(),
        }
    }
}

pub fn use_lookup_source() -> LookupSource {
    use_context::<LookupSource>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_stock_item::Item;

    #[test]
    fn test_default_is_local_sample() {
        let source = LookupSource::default();
        assert!(matches!(source, LookupSource::Local(_)));
        assert_eq!(source.sample_codes().len(), 3);
    }

    #[test]
    fn test_sample_codes_follow_injected_catalog() {
        let catalog =
            StaticItemCatalog::from_items([Item::new("X1", "PARAFUSO", 3, 1.5, "01A01")]).unwrap();
        let source = LookupSource::Local(Arc::new(catalog));
        assert_eq!(source.sample_codes(), vec!["X1".to_string()]);
    }
}
