//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::ConfigError;
use crate::game_state::chess_rules::{
    DEFAULT_TICK_INTERVAL_MS, DEFAULT_TIME_BUDGET_SECS, DEFAULT_TROPHY_AWARD,
};

pub const DEFAULT_STORE_PATH: &str = "solo_chess_store.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Seconds on each side's clock at the start of a game.
    pub time_budget_secs: u32,

    /// How often the host samples the running clock.
    pub tick_interval: Duration,

    /// Trophies credited for a win.
    pub trophy_award: u32,

    /// JSON file backing the account and stats store.
    pub store_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_budget_secs: DEFAULT_TIME_BUDGET_SECS,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            trophy_award: DEFAULT_TROPHY_AWARD,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl GameConfig {
    /// Load configuration from `SOLO_CHESS_*` environment variables,
    /// falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let time_budget_secs = parse_var(&lookup, "SOLO_CHESS_TIME_BUDGET_SECS")?
            .unwrap_or(defaults.time_budget_secs);
        if time_budget_secs == 0 {
            return Err(ConfigError::Zero("SOLO_CHESS_TIME_BUDGET_SECS"));
        }

        let tick_interval = match parse_var::<u64, _>(&lookup, "SOLO_CHESS_TICK_MS")? {
            Some(0) => return Err(ConfigError::Zero("SOLO_CHESS_TICK_MS")),
            Some(ms) => Duration::from_millis(ms),
            None => defaults.tick_interval,
        };

        let trophy_award =
            parse_var(&lookup, "SOLO_CHESS_TROPHY_AWARD")?.unwrap_or(defaults.trophy_award);

        let store_path = lookup("SOLO_CHESS_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.store_path);

        Ok(Self {
            time_budget_secs,
            tick_interval,
            trophy_award,
            store_path,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
