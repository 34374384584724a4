use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use uuidshift::lookup::MojangClient;
use uuidshift::migrate::{self, Mapping, MigrateOptions, MigrationStatus};

mod tty;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "uuidshift")]
#[command(version = VERSION)]
#[command(about = "Migrate Minecraft playerdata from offline-mode to online-mode UUIDs")]
struct Cli {
    /// Path to the world's playerdata directory
    playerdata: PathBuf,

    /// Path to the server's usercache.json
    usercache: PathBuf,

    /// Show planned renames without changing any files
    #[arg(long)]
    dryrun: bool,
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn print_mappings(mappings: &[Mapping]) {
    for mapping in mappings {
        println!(
            "{}: {} -> {}",
            mapping.name, mapping.offline_uuid, mapping.online_uuid
        );
    }
}

fn run(cli: Cli) -> uuidshift::Result<ExitCode> {
    let opts = MigrateOptions {
        playerdata_dir: cli.playerdata,
        usercache_path: cli.usercache,
        dry_run: cli.dryrun,
    };

    let client = MojangClient::new()?;

    let outcome = migrate::run(&opts, &client, now_unix(), &mut |mappings| {
        print_mappings(mappings);
        match tty::prompt("Please confirm the changes above (y/N): ") {
            Ok(answer) => answer == "y",
            Err(_) => false,
        }
    })?;

    match &outcome.status {
        MigrationStatus::DryRun => {
            print_mappings(&outcome.mappings);
            println!("Performing dry run, not changing anything");
        }
        MigrationStatus::Declined => {
            println!("Aborting!");
            return Ok(ExitCode::from(1));
        }
        MigrationStatus::Applied { report } => {
            println!(
                "Renamed {} file(s), skipped {} missing, {} already migrated",
                report.renamed.len(),
                report.skipped_missing.len(),
                report.skipped_existing.len()
            );
        }
    }

    println!("Done.");
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {} [{}]", err, err.code.as_str());
            if !err.details.is_null() {
                if let Ok(details) = serde_json::to_string_pretty(&err.details) {
                    eprintln!("{}", details);
                }
            }
            for hint in &err.hints {
                eprintln!("Hint: {}", hint.message);
            }
            ExitCode::from(1)
        }
    }
}
