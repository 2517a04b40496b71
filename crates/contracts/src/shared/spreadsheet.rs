//! Распознавание файлов Excel
//!
//! Одно правило на backend и frontend: файл принимается, если MIME-тип
//! относится к Excel или имя заканчивается на `.xlsx` / `.xls`.
//! Листинг каталога на сервере использует только правило по расширению.

pub const MIME_XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const MIME_XLS: &str = "application/vnd.ms-excel";

pub const SPREADSHEET_MIME_TYPES: [&str; 2] = [MIME_XLSX, MIME_XLS];
pub const SPREADSHEET_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

/// Значение атрибута `accept` для `<input type="file">`
pub const ACCEPT_ATTR: &str = ".xlsx,.xls";

/// Имя файла оканчивается на расширение Excel (без учёта регистра)
pub fn has_spreadsheet_extension(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SPREADSHEET_EXTENSIONS
        .iter()
        .any(|ext| lower.len() > ext.len() && lower.ends_with(ext))
}

/// MIME-тип относится к Excel (параметры вида `; charset=` игнорируются)
pub fn is_spreadsheet_mime(mime: &str) -> bool {
    let essence = mime.split(';').next().unwrap_or_default().trim();
    SPREADSHEET_MIME_TYPES
        .iter()
        .any(|m| m.eq_ignore_ascii_case(essence))
}

/// Общее правило приёма файла на загрузку
pub fn is_spreadsheet(name: &str, mime: Option<&str>) -> bool {
    mime.map(is_spreadsheet_mime).unwrap_or(false) || has_spreadsheet_extension(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_rule() {
        assert!(has_spreadsheet_extension("inventory.xlsx"));
        assert!(has_spreadsheet_extension("ESTOQUE.XLS"));
        assert!(!has_spreadsheet_extension("notes.txt"));
        assert!(!has_spreadsheet_extension("archive.xlsx.zip"));
        assert!(!has_spreadsheet_extension(".xlsx"));
    }

    #[test]
    fn test_mime_rule() {
        assert!(is_spreadsheet_mime(MIME_XLSX));
        assert!(is_spreadsheet_mime("application/vnd.ms-excel; charset=binary"));
        assert!(!is_spreadsheet_mime("text/plain"));
        assert!(!is_spreadsheet_mime(""));
    }

    #[test]
    fn test_combined_rule() {
        // расширение спасает файл с неизвестным MIME
        assert!(is_spreadsheet("dados.xls", Some("application/octet-stream")));
        // MIME спасает файл без расширения
        assert!(is_spreadsheet("blob", Some(MIME_XLSX)));
        assert!(is_spreadsheet("dados.xlsx", None));
        assert!(!is_spreadsheet("notes.txt", Some("text/plain")));
        assert!(!is_spreadsheet("notes.txt", None));
    }

    #[test]
    fn test_uppercase_suffix_with_generic_mime() {
        assert!(is_spreadsheet("A.XLSX", Some("application/octet-stream")));
        assert!(!is_spreadsheet(".xlsx", Some("application/octet-stream")));
    }
}
