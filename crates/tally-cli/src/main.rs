use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tally_core::config::DEFAULT_LOG_LEVEL;
use tally_core::menu::MenuRepository;
use tally_core::presentation::render_menu_table;
use tally_core::submission::{ConfirmationIssuer, OrderSubmitter, Receipt};
use tally_core::{Checkout, ConfigOverrides};
use tally_infrastructure::{ConfigService, CsvMenuRepository, CsvOrderHistoryRepository};

mod console;

use console::RustylineConsole;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "tally - take an order from a menu and record it", long_about = None)]
struct Cli {
    /// Config file (default: ./tally.toml, then ~/.config/tally/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Menu CSV file with Item and Price columns
    #[arg(long, value_name = "PATH")]
    menu: Option<PathBuf>,

    /// Order history CSV file to append to
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,

    /// Log filter, e.g. "info" or "tally_core=debug" (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            menu_path: self.menu.clone(),
            history_path: self.history.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("{:#}", e).red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ConfigService::new(cli.config.clone())
        .load(cli.overrides())
        .context("Failed to load configuration")?;
    init_tracing(&config.log_level);
    tracing::debug!("Using {:?}", config);

    let menu = CsvMenuRepository::new(&config.menu_path)
        .load()
        .context("Error reading menu file")?;
    print!("{}", render_menu_table(&menu));

    let mut console = RustylineConsole::new(&menu).context("Failed to start line editor")?;
    let submitter = OrderSubmitter::new(
        ConfirmationIssuer::from_entropy(),
        CsvOrderHistoryRepository::new(&config.history_path),
    );

    match Checkout::new(&menu, submitter).run(&mut console) {
        Ok(Some(receipt)) => report(&receipt),
        Ok(None) => {}
        Err(e) if e.is_cancelled() => {
            println!("{}", "CTRL-C detected. Order cancelled.".yellow());
        }
        Err(e) => return Err(e).context("Order collection failed"),
    }

    Ok(())
}

fn report(receipt: &Receipt) {
    if let Some(e) = &receipt.history_error {
        eprintln!("{}", format!("Error writing order to file: {}", e).red());
    }
    println!("{}", receipt.confirmation_message().bright_green());
}

/// Logs go to stderr so they never interleave with prompts.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
