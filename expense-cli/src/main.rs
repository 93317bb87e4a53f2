use anyhow::Result;
use clap::{Parser, Subcommand};
use expense_core::{catalog, ScanSession, ScanWorker};
use rand::SeedableRng;
use std::path::PathBuf;

mod config;
mod logging;
mod picker;
mod simulate;
mod state;
mod tui;

#[derive(Parser, Debug)]
#[command(
    name = "expense-scan",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("EXPENSE_SCAN_BUILD_SHA"), ")"),
    about = "Simulated receipt scanner"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the scanner UI (default)
    Scan,

    /// Upload one image headlessly and print the extracted receipt
    Simulate {
        /// Image to "scan"; omit to simulate a cancelled picker
        image: Option<PathBuf>,
    },

    /// Print the receipt catalog as JSON
    Catalog,

    /// Manage ~/.expense-scan/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Scan) {
        Command::Scan => {
            let mut session = start_session()?;
            tokio::task::block_in_place(|| tui::run_tui(&mut session))?;
        }

        Command::Simulate { image } => {
            let mut session = start_session()?;
            simulate::run_simulate(&mut session, image).await?;
        }

        Command::Catalog => {
            println!("{}", serde_json::to_string_pretty(catalog())?);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

fn start_session() -> Result<ScanSession> {
    let cfg = config::load_config()?;
    let home = state::ensure_expense_scan_home()?;
    let log_path = logging::init(&cfg.log, &home)?;
    log::info!(
        "expense-scan {} starting (delay {}ms, log {})",
        env!("CARGO_PKG_VERSION"),
        cfg.scan.delay_ms,
        log_path.display()
    );

    let worker = ScanWorker::spawn(cfg.scan_delay(), rand::rngs::StdRng::from_entropy());
    Ok(ScanSession::new(worker))
}
