//! User cache parsing.
//!
//! The server's usercache.json is an array of records mapping previously-seen
//! player names to their offline-mode UUIDs. Only `name` and `uuid` matter
//! here; extra fields (such as `expiresOn`) are ignored.

use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::player::Player;

#[derive(Debug, Deserialize)]
struct CacheRecord {
    name: String,
    uuid: String,
}

/// Load players from a user cache file, preserving record order.
///
/// Each record becomes one [`Player`] with its offline UUID populated and its
/// online UUID unresolved. Any structural problem is fatal: a migration must
/// not start from a partially-understood cache.
pub fn load(path: &Path) -> Result<Vec<Player>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::cache_unreadable(path.display().to_string(), e.to_string()))?;

    let records: Vec<CacheRecord> = serde_json::from_str(&content)
        .map_err(|e| Error::cache_invalid_json(path.display().to_string(), e))?;

    let mut players = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let offline_uuid = Uuid::try_parse(&record.uuid)
            .map_err(|_| Error::cache_invalid_entry(index, &record.name, &record.uuid))?;
        players.push(Player::new(record.name, offline_uuid));
    }

    Ok(players)
}
