use super::aggregate::Item;
use super::catalog::ItemCatalog;

pub const NOT_FOUND_MESSAGE: &str = "Item não encontrado. Verifique o código e tente novamente.";
pub const FAILED_MESSAGE: &str = "Erro ao buscar item. Tente novamente.";

/// Результат поиска товара по коду
///
/// "Не найдено" — обычный исход, а не ошибка; ошибка транспорта
/// отличается от него отдельным вариантом.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(Item),
    NotFound,
    Failed(String),
}

impl LookupOutcome {
    pub fn from_option(item: Option<Item>) -> Self {
        match item {
            Some(item) => Self::Found(item),
            None => Self::NotFound,
        }
    }

    pub fn item(&self) -> Option<&Item> {
        match self {
            Self::Found(item) => Some(item),
            _ => None,
        }
    }

    /// Текст сообщения для пользователя (None для найденного товара)
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Found(_) => None,
            Self::NotFound => Some(NOT_FOUND_MESSAGE),
            Self::Failed(_) => Some(FAILED_MESSAGE),
        }
    }
}

/// Обрезает пробелы; пустой ввод не является запросом
pub fn normalize_code(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Синхронный поиск по справочнику
pub fn resolve_code(catalog: &dyn ItemCatalog, input: &str) -> Option<LookupOutcome> {
    let code = normalize_code(input)?;
    Some(LookupOutcome::from_option(catalog.find_by_code(&code)))
}
