//! Playerdata relocation.
//!
//! Renames `<offline-uuid>.dat` to `<online-uuid>.dat` inside the playerdata
//! directory. Never overwrites: a pre-existing destination leaves the source
//! untouched. Re-running after a completed migration is a no-op because the
//! sources no longer exist.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::player::Player;

/// Extension of per-player save files.
pub const DATA_EXT: &str = "dat";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamedFile {
    pub name: String,
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelocateReport {
    pub renamed: Vec<RenamedFile>,
    pub skipped_missing: Vec<String>,
    pub skipped_existing: Vec<String>,
}

fn data_file(dir: &Path, id: &Uuid) -> PathBuf {
    dir.join(format!("{}.{}", id, DATA_EXT))
}

/// Rename each player's save file from its offline to its online UUID.
///
/// Callers pass the filtered sequence; a player without an online UUID is
/// ignored. A rename failure is fatal, but files already renamed stay
/// renamed — there is no rollback, and re-running skips them.
pub fn relocate(dir: &Path, players: &[Player]) -> Result<RelocateReport> {
    let mut report = RelocateReport::default();

    for player in players {
        let Some(online_uuid) = player.online_uuid else {
            continue;
        };

        let from = data_file(dir, &player.offline_uuid);
        let to = data_file(dir, &online_uuid);

        if !from.exists() {
            report.skipped_missing.push(player.name.clone());
            continue;
        }

        if to.exists() {
            report.skipped_existing.push(player.name.clone());
            continue;
        }

        fs::rename(&from, &to).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("rename {}", from.display())))
        })?;

        report.renamed.push(RenamedFile {
            name: player.name.clone(),
            from,
            to,
        });
    }

    Ok(report)
}
