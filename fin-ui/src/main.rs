use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use fin_ui::app::{self, App};
use fin_ui::config::{self, Overrides};
use fin_ui::themes::Theme;
use fin_ui::views::Presentation;
use fin_ui::{csv_loader, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal financial health check.
///
/// Collects monthly income and its allocation, validates that the budget
/// adds up, and asks the scoring service for a financial score.
#[derive(Debug, Parser)]
#[command(name = "finhealth", version)]
struct Cli {
    /// Settings file. Defaults to `finhealth.toml` in the working directory
    /// when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Scoring service backend.
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Base address of the scoring service (e.g. `http://localhost:5000`).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Display locale: `en-IN` or `en-US`.
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Log filter, a bare level or full directive.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill in the form interactively (default).
    Assess,
    /// Validate and score every row of a CSV file.
    Batch {
        /// CSV with monthly_income, monthly_expenses, loan_emi, savings,
        /// investments columns.
        path: PathBuf,
    },
    /// Print the most recent assessments.
    History,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    let mut cfg = config::load_config(cli.config.as_deref())?;
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = logging::effective_level(
        cli.log_level.as_deref(),
        cfg.logging.level.as_deref(),
        rust_log.as_deref(),
    )
    .map(str::to_owned);
    cfg.apply(Overrides {
        backend: cli.backend,
        base_url: cli.base_url,
        locale: cli.locale,
        log_level: cli.log_level,
        log_file: cli.log_file,
    });
    if let Some(level) = &level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cfg.logging.file {
        logging::enable_file_logging(path)?;
    }

    let presentation = Presentation::new(cfg.locale()?, cfg.currency_symbol()?, Theme::detect());

    let service_config = cfg.service_config();
    debug!("using {} backend at {}", service_config.backend, service_config.base_url);
    let registry = app::build_registry();
    let service = registry.create(&service_config).await?;

    let stdout = io::stdout();
    match cli.command.unwrap_or(Command::Assess) {
        Command::Assess => {
            let stdin = io::stdin();
            let mut app = App::new(&*service, presentation, stdin.lock(), stdout.lock());
            app.run().await?;
        }
        Command::Batch { path } => {
            let rows = csv_loader::load_from_file(&path)?;
            let summary = app::run_batch(&*service, &rows, &presentation, &mut stdout.lock())
                .await
                .context("failed to write batch report")?;
            info!(?summary, "batch complete");
        }
        Command::History => {
            app::run_history(&*service, &presentation, &mut stdout.lock()).await?;
        }
    }

    Ok(())
}
