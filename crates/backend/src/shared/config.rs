use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub git: GitConfig,
    pub sync: SyncConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Каталог для таблиц; относительный путь считается от рабочего каталога процесса
    pub dir: String,
    pub max_upload_mb: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GitConfig {
    /// Рабочий каталог репозитория для git add/commit/push
    pub workdir: String,
    /// Выполнять ли git push после коммита
    pub push: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SyncConfig {
    pub delay_ms: u64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3001

[storage]
dir = "planilhas"
max_upload_mb = 50

[git]
workdir = "."
push = true

[sync]
delay_ms = 2000
"#;

/// Environment variable that overrides `server.port`
pub const PORT_ENV: &str = "PORT";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

impl Config {
    /// Apply environment overrides (currently only `PORT`)
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        self.apply_port_override(std::env::var(PORT_ENV).ok())
    }

    pub fn apply_port_override(&mut self, value: Option<String>) -> anyhow::Result<()> {
        if let Some(raw) = value {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(());
            }
            self.server.port = raw
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid {PORT_ENV} value {raw:?}: {e}"))?;
            tracing::info!("Port overridden by {}: {}", PORT_ENV, self.server.port);
        }
        Ok(())
    }

    pub fn storage_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.dir)
    }

    pub fn git_workdir(&self) -> PathBuf {
        PathBuf::from(&self.git.workdir)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.storage.max_upload_mb.saturating_mul(1024 * 1024)
    }

    pub fn sync_delay(&self) -> Duration {
        Duration::from_millis(self.sync.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.storage.dir, "planilhas");
        assert_eq!(config.max_upload_bytes(), 50 * 1024 * 1024);
        assert!(config.git.push);
        assert_eq!(config.sync_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_port_override() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.apply_port_override(Some("8080".into())).unwrap();
        assert_eq!(config.server.port, 8080);

        config.apply_port_override(None).unwrap();
        assert_eq!(config.server.port, 8080);

        config.apply_port_override(Some("  ".into())).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        assert!(config.apply_port_override(Some("abc".into())).is_err());
        assert!(config.apply_port_override(Some("70000".into())).is_err());
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[server]\nport = 1\n").is_err());
    }
}
