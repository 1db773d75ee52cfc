//! Workbench shell.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────── workbench ────────────────────────┐
//!   │                                                           │
//!   │  config ──▶ shell ──▶ view::HealthCheck ──▶ client ───────┼──▶ GET <base-url>/health
//!   │               │             │                             │
//!   │               ▼             ▼                             │
//!   │            stdout      Lifetime guard ◀── lifecycle       │
//!   │           (frames)                        (Ctrl-C)        │
//!   └───────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use workbench::config::{self, ConfigOverrides};
use workbench::lifecycle::{signals, Shutdown};
use workbench::observability::logging;
use workbench::shell::exit_code;
use workbench::{HttpClient, Shell};

#[derive(Parser)]
#[command(name = "workbench")]
#[command(about = "Render the workbench shell and check backend health", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend API base URL (overrides config and WORKBENCH_API_URL).
    #[arg(short, long)]
    base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(short, long)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Exit with status 1 when the backend is unhealthy.
    #[arg(long)]
    exit_status: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::resolve_config(
        cli.config.as_deref(),
        |key| std::env::var(key).ok(),
        &cli.overrides(),
    )?;

    logging::init(&config.observability);
    tracing::info!(
        base_url = %config.api.base_url,
        timeout_secs = config.api.timeout_secs,
        "Configuration loaded"
    );

    let client = HttpClient::new(&config.api)?;
    let shell = Shell::new(config.shell.clone(), Arc::new(client));

    let shutdown = Shutdown::new();
    let signal_task = signals::spawn_ctrl_c(&shutdown);

    let mut stdout = std::io::stdout();
    let status = shell.run(&mut stdout, shutdown.subscribe()).await?;
    signal_task.abort();

    Ok(ExitCode::from(exit_code(&status, cli.exit_status)))
}
