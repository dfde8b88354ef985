//! CLI runtime configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

const USERS_FILE_NAME: &str = "users.json";

/// Configuration required to bootstrap the arena and logging.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub users_file: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub battle_config_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Directory holding `users.json` (default: platform data dir)
    /// - `BATTLE_USERS_FILE` - Explicit account file path, overrides `BATTLE_DATA_DIR`
    /// - `BATTLE_CATALOG_PATH` - RON creature catalog (default: built-in catalog)
    /// - `BATTLE_CONFIG_PATH` - TOML battle config (default: built-in rules)
    /// - `BATTLE_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `BATTLE_SESSION_ID` - Log session name (default: timestamp)
    /// - `BATTLE_SEED` - Seed for opponent creature picks (default: random)
    pub fn from_env() -> Self {
        Self {
            data_dir: read_path("BATTLE_DATA_DIR"),
            users_file: read_path("BATTLE_USERS_FILE"),
            catalog_path: read_path("BATTLE_CATALOG_PATH"),
            battle_config_path: read_path("BATTLE_CONFIG_PATH"),
            log_dir: read_path("BATTLE_LOG_DIR"),
            session_id: env::var("BATTLE_SESSION_ID").ok(),
            seed: read_env::<u64>("BATTLE_SEED"),
        }
    }

    /// Account file path after applying defaults.
    pub fn users_path(&self) -> PathBuf {
        if let Some(path) = &self.users_file {
            return path.clone();
        }
        let dir = self
            .data_dir
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(USERS_FILE_NAME)
    }

    /// Log directory after applying defaults.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.cache_dir().join("logs")))
            .unwrap_or_else(|| env::temp_dir().join("creature-battle").join("logs"))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "creature-battle")
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
