use contracts::shared::timestamp::now_iso;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u503_sync_database::{SyncDatabase, SyncResponse, MSG_SYNCED};
use std::time::Duration;

/// Синхронизация базы данных (заглушка)
///
/// Реальной загрузки данных нет: выдерживается пауза и возвращается
/// успех. Каталог с таблицами не читается и не изменяется.
pub async fn run(delay: Duration) -> SyncResponse {
    tracing::info!("{}: database sync started", SyncDatabase::full_name());
    tokio::time::sleep(delay).await;
    tracing::info!("Database sync finished after {} ms", delay.as_millis());

    SyncResponse {
        message: MSG_SYNCED.to_string(),
        timestamp: now_iso(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sync_waits_and_succeeds() {
        let started = tokio::time::Instant::now();
        let response = run(Duration::from_millis(2000)).await;
        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(response.message, MSG_SYNCED);
        assert!(response.timestamp.ends_with('Z'));
    }
}
