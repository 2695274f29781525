//! Interactive REPL over the dialogue orchestrator.
//!
//! Plain lines are dialogue turns; lines starting with `:` are commands:
//! `:sleep N` (sleep N hours), `:stats`, `:save`, `:load`, `:quit`.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Once;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mnemo_consolidation::{ConsolidationEngine, TracingObserver};
use mnemo_core::config::MnemoConfig;
use mnemo_core::memory::Tier;
use mnemo_dialogue::Orchestrator;
use mnemo_embeddings::HashingEmbedder;
use mnemo_store::MemoryStore;

#[derive(Parser, Debug)]
#[command(name = "mnemo", version, about = "Associative memory REPL")]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Consolidation seed, overriding the config.
    #[arg(long)]
    seed: Option<u64>,

    /// Snapshot file for `:save` and `:load`. Loaded on startup if it
    /// exists.
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

static INIT: Once = Once::new();

/// Reads `MNEMO_LOG` for per-subsystem log levels, falling back to
/// `mnemo=info`. Idempotent.
fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("MNEMO_LOG").unwrap_or_else(|_| EnvFilter::new("mnemo=info"));
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}

fn load_store(cli: &Cli, config: &MnemoConfig) -> Result<MemoryStore> {
    if let Some(path) = &cli.snapshot {
        if path.exists() {
            let blob = std::fs::read(path)
                .with_context(|| format!("reading snapshot {}", path.display()))?;
            let store = MemoryStore::deserialize(
                &blob,
                Box::new(HashingEmbedder::default()),
                config.store.clone(),
                config.recall.clone(),
            )
            .context("restoring snapshot")?;
            eprintln!("loaded {} records from {}", store.len(), path.display());
            return Ok(store);
        }
    }
    Ok(MemoryStore::new(
        Box::new(HashingEmbedder::default()),
        config.store.clone(),
        config.recall.clone(),
    ))
}

fn print_stats(store: &MemoryStore) {
    let mut by_tier: BTreeMap<Tier, usize> = BTreeMap::new();
    for record in store.records() {
        *by_tier.entry(record.tier).or_default() += 1;
    }
    println!("records: {}", store.len());
    for (tier, count) in by_tier {
        println!("  {tier}: {count}");
    }
}

fn run_command(orch: &mut Orchestrator, snapshot: Option<&PathBuf>, line: &str) -> Result<bool> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(":quit") | Some(":q") => return Ok(false),
        Some(":stats") => print_stats(orch.store()),
        Some(":sleep") => {
            let hours: u32 = parts
                .next()
                .unwrap_or("8")
                .parse()
                .context("usage: :sleep <hours>")?;
            let session = orch.sleep_hours(hours)?;
            println!(
                "slept {}h: {} cycles, {} replayed, {} promoted, {} dropped{}",
                hours,
                session.stats.cycles_run,
                session.stats.replayed,
                session.stats.promoted,
                session.stats.dropped,
                if session.stats.truncated { " (truncated)" } else { "" },
            );
        }
        Some(":save") => {
            let Some(path) = snapshot else {
                bail!("no snapshot path; start with --snapshot <file>");
            };
            let blob = orch.store().serialize()?;
            std::fs::write(path, blob)
                .with_context(|| format!("writing snapshot {}", path.display()))?;
            println!("saved {} records to {}", orch.store().len(), path.display());
        }
        Some(":load") => {
            let Some(path) = snapshot else {
                bail!("no snapshot path; start with --snapshot <file>");
            };
            let blob = std::fs::read(path)
                .with_context(|| format!("reading snapshot {}", path.display()))?;
            let store = MemoryStore::deserialize(
                &blob,
                Box::new(HashingEmbedder::default()),
                orch.store().store_config().clone(),
                orch.store().recall_config().clone(),
            )?;
            println!("loaded {} records from {}", store.len(), path.display());
            orch.replace_store(store);
        }
        Some(other) => println!("unknown command: {other}"),
        None => {}
    }
    Ok(true)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => MnemoConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MnemoConfig::default(),
    };
    if cli.seed.is_some() {
        config.consolidation.seed = cli.seed;
    }

    let store = load_store(&cli, &config)?;
    let mut engine = ConsolidationEngine::new(config.consolidation.clone());
    engine.add_observer(Box::new(TracingObserver));
    let mut orch = Orchestrator::new(store, engine, config.dialogue.clone());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(':') {
            match run_command(&mut orch, cli.snapshot.as_ref(), line) {
                Ok(true) => continue,
                Ok(false) => break,
                Err(e) => {
                    eprintln!("error: {e:#}");
                    continue;
                }
            }
        }

        match orch.handle_turn(line) {
            Ok(turn) => println!("{}", turn.answer),
            Err(e) => eprintln!("error: {e:#}"),
        }
    }

    Ok(())
}
