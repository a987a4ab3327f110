use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use folio::config::{Config, ConfigStore, Theme};
use folio::content::Content;
use folio::logging::init_tracing;
use folio::shutdown::{listen_for_signals, ShutdownCoordinator};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Academic profile in the terminal")]
struct Cli {
    /// Config file (default: <config dir>/folio/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// TOML content file to show instead of the built-in profile.
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Theme for this session; not saved.
    #[arg(long, value_name = "light|dark")]
    theme: Option<Theme>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the effective content as JSON and exit.
    Dump,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let content = match &cli.content {
        Some(path) => Content::load_from(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => Content::builtin(),
    };

    if let Some(Command::Dump) = cli.command {
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    let session_theme = cli.theme;
    if session_theme.is_some() {
        config.theme = session_theme;
    }

    let log_path = init_tracing(&config.logging).context("initializing logging")?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "starting folio"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    let shutdown = ShutdownCoordinator::new();
    runtime.spawn(listen_for_signals(shutdown.handle()));

    let store = ConfigStore::new(config, config_path);
    let result = folio::ui::run(
        store,
        Arc::new(content),
        runtime.handle().clone(),
        shutdown.handle(),
    );

    shutdown.signal();
    runtime.shutdown_timeout(std::time::Duration::from_millis(500));
    result.context("running terminal ui")
}
