//! `nodepool-selftest` CLI: runs the node pool self-test suite and prints
//! the result-code vocabulary.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use node_pool::{NodePool, ResultCode};
use nodepool_selftest::{ResultLog, SelfTest, SelfTestConfig, Suite};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Node pool self-test command line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase output verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// JSON configuration file.
    #[arg(long, env = "NODEPOOL_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
    /// Pool capacity, overriding the config file.
    #[arg(long, env = "NODEPOOL_CAPACITY", value_name = "N")]
    capacity: Option<NonZeroUsize>,
    /// Result log path, overriding the config file.
    #[arg(
        long,
        env = "NODEPOOL_LOG",
        value_name = "PATH",
        help = "Append-only result log (default: test_results.log)"
    )]
    log: Option<PathBuf>,
    /// Subcommand.
    #[command(subcommand)]
    command: Commands,
}

/// Commands for nodepool-selftest.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the self-test suite.
    Run {
        /// Suite to run, overriding the config file.
        #[arg(long, value_enum)]
        suite: Option<SuiteKind>,
        /// Print a JSON summary instead of console lines.
        #[arg(long)]
        json: bool,
    },
    /// Print every result code and its label.
    Codes,
}

/// Suites exposed via CLI.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum SuiteKind {
    Standard,
    Extended,
}

impl From<SuiteKind> for Suite {
    fn from(kind: SuiteKind) -> Self {
        match kind {
            SuiteKind::Standard => Suite::Standard,
            SuiteKind::Extended => Suite::Extended,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run { suite, json } => {
            let config = resolve_config(cli.config.as_deref(), cli.capacity, cli.log, suite)?;
            run(&config, json)
        }
        Commands::Codes => {
            for code in ResultCode::ALL {
                println!("{}\t{}", code.raw(), code.label());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve_config(
    path: Option<&Path>,
    capacity: Option<NonZeroUsize>,
    log: Option<PathBuf>,
    suite: Option<SuiteKind>,
) -> anyhow::Result<SelfTestConfig> {
    let mut config = SelfTestConfig::load_or_default(path)?;
    if let Some(capacity) = capacity {
        config.capacity = capacity;
    }
    if let Some(log) = log {
        config.log_path = log;
    }
    if let Some(suite) = suite {
        config.suite = suite.into();
    }
    config.validate()?;
    Ok(config)
}

fn run(config: &SelfTestConfig, json: bool) -> anyhow::Result<ExitCode> {
    let mut pool = NodePool::with_capacity(config.capacity);
    let mut log = ResultLog::open(&config.log_path)
        .with_context(|| format!("opening result log {}", config.log_path.display()))?;
    info!(
        capacity = config.capacity.get(),
        suite = ?config.suite,
        log = %log.path().display(),
        "self-test started"
    );

    let summary = SelfTest::new(config.suite.scenarios().iter().copied())
        .run(&mut pool, &mut log)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for outcome in &summary.outcomes {
            println!("{outcome}");
        }
    }
    Ok(ExitCode::from(summary.exit_code()))
}
