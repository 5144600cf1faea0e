//! Per-user win/loss statistics and trophy accounting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::accounts::key_value_store::{KeyValueStore, STATS_KEY};
use crate::errors::StoreError;
use crate::session::results::ResultKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default)]
    pub trophies: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
}

type StatsTable = BTreeMap<String, UserStats>;

fn load_table<K: KeyValueStore + ?Sized>(store: &K) -> Result<StatsTable, StoreError> {
    match store.get(STATS_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(StatsTable::new()),
    }
}

/// Stats for `username`, zeroed when the user has never finished a game.
pub fn load_stats<K: KeyValueStore + ?Sized>(
    store: &K,
    username: &str,
) -> Result<UserStats, StoreError> {
    Ok(load_table(store)?.get(username).copied().unwrap_or_default())
}

/// Read-modify-write one user's record. A win adds `trophy_award`; counters
/// saturate at `u32::MAX`.
pub fn record_result<K: KeyValueStore + ?Sized>(
    store: &mut K,
    username: &str,
    outcome: ResultKind,
    trophy_award: u32,
) -> Result<UserStats, StoreError> {
    let mut table = load_table(store)?;
    let stats = table.entry(username.to_owned()).or_default();

    match outcome {
        ResultKind::Win => {
            stats.wins = stats.wins.saturating_add(1);
            stats.trophies = stats.trophies.saturating_add(trophy_award);
            info!(username, trophies = trophy_award, "trophies awarded");
        }
        ResultKind::Loss => stats.losses = stats.losses.saturating_add(1),
    }

    let updated = *stats;
    store.set(STATS_KEY, serde_json::to_string(&table)?)?;
    Ok(updated)
}
