//! Migration pipeline.
//!
//! Wires the stages end to end: load the user cache, resolve online UUIDs,
//! drop unresolved players, then hand the planned renames to the
//! confirmation gate before touching the filesystem. Control flows strictly
//! downstream; no stage is revisited.

use std::path::PathBuf;

use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::lookup::ProfileLookup;
use crate::player;
use crate::relocate::{self, RelocateReport};
use crate::resolver;
use crate::usercache;

/// Explicit pipeline configuration, built by the CLI from its arguments.
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    pub playerdata_dir: PathBuf,
    pub usercache_path: PathBuf,
    pub dry_run: bool,
}

/// One planned rename, shown to the operator before anything is applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    pub name: String,
    pub offline_uuid: Uuid,
    pub online_uuid: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationStatus {
    Applied { report: RelocateReport },
    DryRun,
    Declined,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationOutcome {
    pub loaded: usize,
    pub unresolved: usize,
    pub mappings: Vec<Mapping>,
    pub status: MigrationStatus,
}

/// Run the full pipeline.
///
/// `at` is the point-in-time for name ownership lookups, normally "now".
/// `confirm` is invoked once with the planned renames, and only when this is
/// not a dry run; returning `false` stops the run with no filesystem
/// changes.
pub fn run(
    opts: &MigrateOptions,
    lookup: &dyn ProfileLookup,
    at: u64,
    confirm: &mut dyn FnMut(&[Mapping]) -> bool,
) -> Result<MigrationOutcome> {
    log_status!(
        "migrate",
        "Loading players from {}",
        opts.usercache_path.display()
    );
    let mut players = usercache::load(&opts.usercache_path)?;
    let loaded = players.len();

    log_status!("migrate", "Resolving online UUIDs");
    resolver::resolve_all(&mut players, lookup, at)?;

    let players = player::resolved_only(players);
    let unresolved = loaded - players.len();
    if unresolved > 0 {
        log_status!("migrate", "Dropping {} player(s) without an online UUID", unresolved);
    }

    let mappings: Vec<Mapping> = players
        .iter()
        .filter_map(|p| {
            p.online_uuid.map(|online_uuid| Mapping {
                name: p.name.clone(),
                offline_uuid: p.offline_uuid,
                online_uuid,
            })
        })
        .collect();

    if opts.dry_run {
        return Ok(MigrationOutcome {
            loaded,
            unresolved,
            mappings,
            status: MigrationStatus::DryRun,
        });
    }

    if !confirm(&mappings) {
        return Ok(MigrationOutcome {
            loaded,
            unresolved,
            mappings,
            status: MigrationStatus::Declined,
        });
    }

    let report = relocate::relocate(&opts.playerdata_dir, &players)?;

    Ok(MigrationOutcome {
        loaded,
        unresolved,
        mappings,
        status: MigrationStatus::Applied { report },
    })
}
