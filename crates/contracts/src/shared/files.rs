use serde::{Deserialize, Serialize};

/// Файл в каталоге загруженных таблиц
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
    /// Время изменения, RFC 3339 (UTC)
    pub modified: String,
    #[serde(rename = "isExcel")]
    pub is_excel: bool,
}

/// GET /api/files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListResponse {
    pub files: Vec<FileEntry>,
}

impl FileEntry {
    pub fn size_display(&self) -> String {
        format_megabytes(self.size)
    }
}

/// Размер в мегабайтах, "1.25 MB"
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

impl FileListResponse {
    pub fn find(&self, name: &str) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.name == name)
    }
}
