use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::path::PathBuf;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

/// Built-in context actions a user can place on the ring.  At most
/// four fit the arc; the default ring carries three so the occluding
/// finger stays clear of every button at once.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Archive,
    Delete,
    Move,
    Refresh,
    Share,
    Chat,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_actions")]
    pub actions: Vec<ActionKind>,
    #[serde(default = "default_haptics")]
    pub haptics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            actions: default_actions(),
            haptics: true,
        }
    }
}

fn default_actions() -> Vec<ActionKind> {
    vec![ActionKind::Archive, ActionKind::Delete, ActionKind::Share]
}

fn default_haptics() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no usable config directory on this platform")]
    NoConfigDir,
    #[error(transparent)]
    Load(#[from] config::ConfigError),
    #[error(transparent)]
    Watch(#[from] notify::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn config_file() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("org", "troia", "corona")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Merge order: built-in serde defaults, then the config file, then
/// `CORONA_*` environment overrides.
pub fn load_config() -> Result<Config, ConfigError> {
    let file = config::File::from(config_file()?).required(false);
    let merged = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix("CORONA"))
        .build()?;
    Ok(merged.try_deserialize()?)
}

/// Startup path: seed the commented default file on first run, and
/// fall back to built-in defaults instead of refusing to start.
pub fn load_or_setup() -> Config {
    match write_default_config() {
        Ok(path) => log::debug!("config file: {}", path.display()),
        Err(e) => log::warn!("could not seed default config: {e}"),
    }
    load_config().unwrap_or_else(|e| {
        log::error!("unusable config, starting with defaults: {e}");
        Config::default()
    })
}

/// Idempotent: creates the directory, writes the default file only if
/// none exists yet, and returns the path either way.
pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = config_file()?;
    if let Some(dir) = path.parent() {
        fs_err::create_dir_all(dir)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    if let Err(e) = watch_config_file(tx).await {
        log::error!("config watcher stopped: {e}");
    }
}

async fn watch_config_file(tx: Sender<AppEvent>) -> Result<(), ConfigError> {
    // Also guarantees the watched directory exists.
    let path = write_default_config()?;
    let Some(dir) = path.parent().map(PathBuf::from) else {
        return Ok(());
    };

    // notify calls back on its own thread; bridge into async land.
    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    while let Ok(res) = bridge_rx.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                log::warn!("watch error: {e}");
                continue;
            }
        };
        // Editors replace rather than modify in place, so create and
        // remove count as changes too.
        let relevant = matches!(
            event.kind,
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
        ) && event.paths.iter().any(|p| p == &path);
        if relevant && tx.send(AppEvent::ConfigReload).await.is_err() {
            break;
        }
    }
    Ok(())
}
