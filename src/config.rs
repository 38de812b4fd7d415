//! Application-level configuration loading, including the catalog seed set.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use time::{Date, macros::date};
use tracing::{info, warn};

use crate::state::game::GameDraft;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "GAME_STORE_CONFIG_PATH";
/// Port used when neither `PORT` nor `SERVER_PORT` is set.
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
/// Immutable runtime configuration read once at startup.
pub struct AppConfig {
    seed_games: Vec<GameDraft>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the baked-in seed set.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        count = app_config.seed_games.len(),
                        "loaded seed games from config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a configuration document. A document without `seedGames` keeps the built-in set.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let raw = serde_json::from_str::<RawConfig>(contents)?;
        Ok(raw.into())
    }

    /// Games inserted into the catalog at startup; validated when the catalog is built.
    pub fn seed_games(&self) -> &[GameDraft] {
        &self.seed_games
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_games: default_seed_games(),
        }
    }
}

/// Resolve the listen port from `PORT`, then `SERVER_PORT`.
pub fn listen_port() -> u16 {
    env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    seed_games: Option<Vec<RawSeedGame>>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        match value.seed_games {
            Some(games) => Self {
                seed_games: games.into_iter().map(Into::into).collect(),
            },
            None => Self::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// JSON representation of a single seed entry inside the configuration file.
struct RawSeedGame {
    name: String,
    genre: String,
    price: Decimal,
    release_date: Date,
}

impl From<RawSeedGame> for GameDraft {
    fn from(value: RawSeedGame) -> Self {
        Self {
            name: value.name,
            genre: value.genre,
            price: value.price,
            release_date: value.release_date,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in seed set shipped with the binary.
fn default_seed_games() -> Vec<GameDraft> {
    vec![
        GameDraft {
            name: "Street Fighter II".into(),
            genre: "Fighting".into(),
            price: Decimal::new(1999, 2),
            release_date: date!(1992 - 07 - 15),
        },
        GameDraft {
            name: "Final Fantasy XIV".into(),
            genre: "Roleplaying".into(),
            price: Decimal::new(5999, 2),
            release_date: date!(2010 - 09 - 30),
        },
        GameDraft {
            name: "FIFA 23".into(),
            genre: "Sports".into(),
            price: Decimal::new(6999, 2),
            release_date: date!(2022 - 09 - 27),
        },
    ]
}
