//! Terminal client entry point.
mod app;
mod config;
mod input;
mod presentation;

use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use app::CliApp;
use battle_content::{CatalogLoader, ConfigLoader, CreatureCatalog};
use battle_core::BattleConfig;
use battle_runtime::{Arena, FileAccountRepository};
use config::CliConfig;
use input::{Prompt, SecretMode};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = setup_logging(&config)?;

    let arena = build_arena(&config)?;

    let stdin = io::stdin();
    let secret_mode = if stdin.is_terminal() {
        SecretMode::Hidden
    } else {
        SecretMode::Plain
    };
    let prompt = Prompt::new(stdin.lock(), io::stdout(), secret_mode);

    CliApp::new(prompt, arena).run()?;
    tracing::info!("CLI client exited");
    Ok(())
}

fn build_arena(config: &CliConfig) -> Result<Arena<FileAccountRepository>> {
    let catalog = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => CreatureCatalog::builtin(),
    };
    let battle = match &config.battle_config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => BattleConfig::default(),
    };

    let users_path = config.users_path();
    let repository = FileAccountRepository::new(&users_path)
        .with_context(|| format!("Failed to open account file {}", users_path.display()))?;
    tracing::info!("Account file: {}", users_path.display());

    let mut builder = Arena::builder(repository)
        .catalog(catalog)
        .battle_config(battle);
    if let Some(seed) = config.seed {
        tracing::info!("Using fixed seed {}", seed);
        builder = builder.seed(seed);
    }
    Ok(builder.build()?)
}

fn load_catalog(path: &Path) -> Result<CreatureCatalog> {
    let catalog = CatalogLoader::load(path)?;
    tracing::info!("Loaded {} creatures from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Setup logging to a per-session file so the terminal stays clean.
fn setup_logging(config: &CliConfig) -> Result<WorkerGuard> {
    let session_id = config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = config.log_path().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn build_arena_creates_account_file_and_loads_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("creatures.ron");
        fs::write(
            &catalog_path,
            r#"[(name: "Eevee", hp: 55, attack: 55, defense: 50, speed: 55)]"#,
        )
        .unwrap();

        let config = CliConfig {
            users_file: Some(dir.path().join("data/users.json")),
            catalog_path: Some(catalog_path),
            seed: Some(1),
            ..CliConfig::default()
        };
        let mut arena = build_arena(&config).unwrap();

        assert!(dir.path().join("data/users.json").exists());
        assert_eq!(arena.catalog().len(), 1);
        assert_eq!(arena.pick_opponent_creature().name, "Eevee");
    }

    #[test]
    fn build_arena_rejects_invalid_battle_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("battle.toml");
        fs::write(&config_path, "minimum_damage = 0\n").unwrap();

        let config = CliConfig {
            users_file: Some(dir.path().join("users.json")),
            battle_config_path: Some(config_path),
            ..CliConfig::default()
        };
        assert!(build_arena(&config).is_err());
    }
}
