use contracts::domain::a001_stock_item::{normalize_code, Item, ItemCatalog};

use crate::shared::error::AppError;

pub const ERR_ITEM_NOT_FOUND: &str = "Item não encontrado";

/// Поиск товара по коду (пробелы по краям отбрасываются)
pub fn get_by_code(catalog: &dyn ItemCatalog, code: &str) -> Result<Item, AppError> {
    let code = normalize_code(code).ok_or_else(|| AppError::validation("Código vazio"))?;
    catalog
        .find_by_code(&code)
        .ok_or_else(|| AppError::not_found(ERR_ITEM_NOT_FOUND))
}
