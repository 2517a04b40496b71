use maplit::btreemap;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use super::aggregate::Item;

/// Источник карточек товаров по коду
///
/// UI и backend работают только через этот трейт, поэтому встроенный
/// справочник можно заменить на настоящий без изменений в отрисовке.
pub trait ItemCatalog: Send + Sync {
    /// Найти товар по точному коду
    fn find_by_code(&self, code: &str) -> Option<Item>;

    /// Все коды справочника в порядке сортировки
    fn codes(&self) -> Vec<String>;
}

/// Встроенный справочник (неизменяемый, живёт всё время работы процесса)
#[derive(Debug, Clone)]
pub struct StaticItemCatalog {
    items: BTreeMap<String, Item>,
}

static SAMPLE_ITEMS: Lazy<BTreeMap<String, Item>> = Lazy::new(|| {
    btreemap! {
        "00001013850064".to_string() =>
            Item::new("00001013850064", "TAMPA ENCHIMENTO", 1, 225.15, "05A04"),
        "0000160521".to_string() =>
            Item::new("0000160521", "JUNTA DA TAMPA DO CABECOTE", 4, 629.06, "22D01"),
        "0000173274".to_string() =>
            Item::new("0000173274", "PINO DE PRESSAO", 1, 47.25, "04H08"),
    }
});

impl StaticItemCatalog {
    /// Справочник с демонстрационными позициями
    pub fn sample() -> Self {
        Self {
            items: SAMPLE_ITEMS.clone(),
        }
    }

    /// Справочник из произвольного набора позиций (ключ — код товара)
    ///
    /// Первая невалидная позиция прерывает построение.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self, String> {
        let items = items
            .into_iter()
            .map(|item| item.validate().map(|_| (item.code.clone(), item)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for StaticItemCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl ItemCatalog for StaticItemCatalog {
    fn find_by_code(&self, code: &str) -> Option<Item> {
        self.items.get(code).cloned()
    }

    fn codes(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_lookup_returns_exact_record() {
        let catalog = StaticItemCatalog::sample();
        let item = catalog.find_by_code("00001013850064").unwrap();
        assert_eq!(item.description, "TAMPA ENCHIMENTO");
        assert_eq!(item.stock_count, 1);
        assert_eq!(item.price, 225.15);
        assert_eq!(item.location, "05A04");
    }

    #[test]
    fn test_absent_code_is_none() {
        let catalog = StaticItemCatalog::sample();
        assert!(catalog.find_by_code("nonexistent").is_none());
        // ключ точный, без нормализации
        assert!(catalog.find_by_code(" 0000160521").is_none());
    }

    #[test]
    fn test_sample_items_are_valid() {
        let catalog = StaticItemCatalog::sample();
        assert_eq!(catalog.len(), 3);
        for code in catalog.codes() {
            let item = catalog.find_by_code(&code).unwrap();
            assert_eq!(item.code, code);
            assert!(item.validate().is_ok());
        }
    }

    #[test]
    fn test_from_items_keys_by_code() {
        let catalog =
            StaticItemCatalog::from_items(vec![Item::new("A", "Alpha", 2, 1.5, "01A01")]).unwrap();
        assert_eq!(catalog.codes(), vec!["A".to_string()]);
        assert_eq!(catalog.find_by_code("A").unwrap().description, "Alpha");
    }

    #[test]
    fn test_from_items_rejects_invalid_item() {
        let result = StaticItemCatalog::from_items(vec![
            Item::new("A", "Alpha", 2, 1.5, "01A01"),
            Item::new("B", "Beta", 1, -3.0, "01A02"),
        ]);
        assert_eq!(result.unwrap_err(), "Preço inválido para B");

        let blank = StaticItemCatalog::from_items(vec![Item::new("  ", "Vazio", 1, 1.0, "01A03")]);
        assert!(blank.is_err());
    }
}
