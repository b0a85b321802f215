// File: services/barberbook_cli/src/main.rs
mod cli;
mod commands;
mod render;
mod views;

use barberbook_api::ApiClient;
use barberbook_common::time::parse_zone;
use barberbook_common::{config_error, BarberbookError, BookingApi, SessionService};
use barberbook_config::{ensure_dotenv_loaded, load_config, load_config_from};
use barberbook_pages::PageContext;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use cli::Cli;
use commands::{Outcome, Shell};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected) => ExitCode::from(1),
        Err(err) => {
            eprintln!("barberbook: {}", err);
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<Outcome, BarberbookError> {
    let mut config = match &cli.config {
        Some(dir) => {
            ensure_dotenv_loaded();
            load_config_from(dir)
        }
        None => load_config(),
    }
    .map_err(config_error)?;

    if let Some(api_url) = cli.api_url {
        config.api.base_url = Some(api_url);
    }

    let log_level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    barberbook_common::init_from_str(log_level);
    tracing::info!("Starting BarberBook v{}", env!("CARGO_PKG_VERSION"));

    let api: Arc<dyn BookingApi> = Arc::new(ApiClient::from_config(&config)?);
    // The watch handle must outlive the command.
    let (session, _watch) = barberbook_session::open_session(&config.session);
    let session: Arc<dyn SessionService> = session;

    let zone = parse_zone(&config.display.time_zone);
    let ctx = PageContext::new(api, session).with_zone(zone);

    Ok(Shell::new(ctx).run(cli.command).await)
}
