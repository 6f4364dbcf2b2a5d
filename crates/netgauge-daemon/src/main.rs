//! `netgauged`: loads configuration, opens the verdict database, and drives
//! the collection and scoring cycle until interrupted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use netgauge_collectors::build_collectors;
use netgauge_core::tracing_setup::init_tracing;
use netgauge_core::GaugeConfig;
use netgauge_engine::{CycleScheduler, EvaluationEngine, SchedulerConfig, SystemClock};
use netgauge_storage::SqliteVerdictSink;

#[derive(Parser)]
#[command(name = "netgauged", version)]
#[command(about = "Scores Internet health from public measurement sources")]
struct Cli {
    /// Explicit config file, layered over the user and project files.
    #[arg(short, long, env = "NETGAUGE_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Default)]
enum Command {
    /// Run cycles until interrupted (default).
    #[default]
    Run,
    /// Run a single cycle and exit.
    Once,
    /// Print the last published verdict and its findings.
    Status,
    /// Print the resolved configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("cannot resolve working directory")?;
    let config = GaugeConfig::load(cli.config.as_deref(), &cwd).context("invalid configuration")?;

    match cli.command.unwrap_or_default() {
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        Command::Status => print_status(&config),
        Command::Once => {
            init_tracing(&config.observability);
            let mut scheduler = build_scheduler(&config)?;
            let report = scheduler.run_cycle().await;
            if let Some(error) = report.persist_error {
                anyhow::bail!("verdict not persisted: {error}");
            }
            Ok(())
        }
        Command::Run => {
            init_tracing(&config.observability);
            let mut scheduler = build_scheduler(&config)?;
            tokio::select! {
                _ = scheduler.run_forever() => {}
                signal = tokio::signal::ctrl_c() => {
                    signal.context("failed to listen for interrupt")?;
                    tracing::info!("interrupted, shutting down");
                }
            }
            Ok(())
        }
    }
}

fn build_scheduler(config: &GaugeConfig) -> Result<CycleScheduler<SystemClock>> {
    let metrics = config.metric_configs();
    let sink = open_sink(config)?;
    let registered = sink
        .register_metrics(&metrics)
        .context("failed to register metrics")?;
    tracing::debug!(registered, "metric registry stored");

    let engine = EvaluationEngine::from_metrics(config, &metrics)?;
    let mut scheduler = CycleScheduler::new(
        engine,
        &metrics,
        Arc::new(sink),
        SystemClock,
        SchedulerConfig::from_config(config),
    );
    for collector in build_collectors(config)? {
        scheduler.add_collector(collector);
    }
    Ok(scheduler)
}

fn open_sink(config: &GaugeConfig) -> Result<SqliteVerdictSink> {
    let path = Path::new(&config.storage.db_path);
    SqliteVerdictSink::open(path)
        .with_context(|| format!("cannot open verdict database at {}", path.display()))
}

fn print_status(config: &GaugeConfig) -> Result<()> {
    let sink = open_sink(config)?;
    let Some(status) = sink.current_status()? else {
        println!("no verdict published yet");
        return Ok(());
    };
    println!("{} ({})", status.status, status.timestamp);
    println!(
        "score {:.2} weighted, {} unweighted, cycle took {}s",
        status.weighted_score, status.unweighted_score, status.duration_secs
    );
    for finding in sink.current_findings()? {
        println!("  {:>5.2}  {}", finding.weight, finding.reason);
    }
    Ok(())
}
