use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Позиция складского остатка (карточка товара)
///
/// Имена полей в JSON совпадают с форматом, который уже используют клиенты:
/// `codigo`, `descricao`, `estoque`, `preco`, `localizacao`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Код товара (уникальный ключ)
    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "descricao")]
    pub description: String,

    /// Остаток на складе, шт.
    #[serde(rename = "estoque")]
    pub stock_count: u32,

    #[serde(rename = "preco")]
    pub price: f64,

    /// Ячейка хранения, например "05A04"
    #[serde(rename = "localizacao")]
    pub location: String,
}

impl Item {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        stock_count: u32,
        price: f64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            stock_count,
            price,
            location: location.into(),
        }
    }

    /// Есть ли товар в наличии
    pub fn in_stock(&self) -> bool {
        self.stock_count > 0
    }

    /// Цена в формате "R$ 225,15"
    pub fn price_display(&self) -> String {
        format!("R$ {}", format!("{:.2}", self.price).replace('.', ","))
    }

    /// Остаток в формате "4 unid."
    pub fn stock_display(&self) -> String {
        format!("{} unid.", self.stock_count)
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Código não pode ser vazio".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("Preço inválido para {}", self.code));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        Item::new("0000160521", "JUNTA DA TAMPA DO CABECOTE", 4, 629.06, "22D01")
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["codigo"], "0000160521");
        assert_eq!(json["descricao"], "JUNTA DA TAMPA DO CABECOTE");
        assert_eq!(json["estoque"], 4);
        assert_eq!(json["preco"], 629.06);
        assert_eq!(json["localizacao"], "22D01");
    }

    #[test]
    fn test_price_display_uses_comma() {
        assert_eq!(sample().price_display(), "R$ 629,06");
        let cheap = Item::new("1", "X", 0, 5.0, "A1");
        assert_eq!(cheap.price_display(), "R$ 5,00");
    }

    #[test]
    fn test_stock_flags() {
        assert!(sample().in_stock());
        assert_eq!(sample().stock_display(), "4 unid.");
        let empty = Item::new("1", "X", 0, 1.0, "A1");
        assert!(!empty.in_stock());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let bad = Item::new("1", "X", 1, -1.0, "A1");
        assert!(bad.validate().is_err());
        assert!(sample().validate().is_ok());
    }
}
