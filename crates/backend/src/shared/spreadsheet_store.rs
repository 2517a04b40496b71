use chrono::{DateTime, Utc};
use contracts::shared::files::FileEntry;
use contracts::shared::spreadsheet::has_spreadsheet_extension;
use contracts::shared::timestamp::to_iso;
use std::io;
use std::path::{Path, PathBuf};

use crate::shared::format::format_size;

/// Каталог с загруженными таблицами
///
/// Файлы хранятся под исходными именами, при совпадении имени файл
/// перезаписывается. Индекса нет: список каждый раз читается с диска.
#[derive(Debug, Clone)]
pub struct SpreadsheetStore {
    dir: PathBuf,
}

impl SpreadsheetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Создаёт каталог, если его ещё нет
    pub async fn ensure_dir(&self) -> io::Result<()> {
        if tokio::fs::try_exists(&self.dir).await? {
            return Ok(());
        }
        tokio::fs::create_dir_all(&self.dir).await?;
        tracing::info!("Created spreadsheet directory {}", self.dir.display());
        Ok(())
    }

    /// Записывает файл под именем `file_name` (уже очищенным от путей)
    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        self.ensure_dir().await?;
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, bytes).await?;
        tracing::info!(
            "Stored {} ({}) at {}",
            file_name,
            format_size(bytes.len() as u64),
            path.display()
        );
        Ok(path)
    }

    /// Файлы Excel в каталоге, по имени
    pub async fn list(&self) -> io::Result<Vec<FileEntry>> {
        self.ensure_dir().await?;

        let mut entries = Vec::new();
        let mut read_dir = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = read_dir.next_entry().await? {
            let name = entry.file_name().to_string_lossy().to_string();
            if !has_spreadsheet_extension(&name) {
                continue;
            }

            let metadata = match tokio::fs::metadata(entry.path()).await {
                Ok(m) => m,
                // файл удалили между read_dir и stat
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e),
            };
            if !metadata.is_file() {
                continue;
            }

            let modified: DateTime<Utc> = metadata.modified()?.into();
            entries.push(FileEntry {
                name,
                size: metadata.len(),
                modified: to_iso(modified),
                is_excel: true,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// Оставляет от имени, присланного клиентом, только последний компонент пути
///
/// Возвращает `None`, если безопасного имени не остаётся.
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    let name = raw
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." || name.contains('\0') {
        return None;
    }
    Some(name.to_string())
}
