//! Python Service - Application entry point
//!
//! CLI-based entry point that dispatches to the available commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use python_service::{
    cli::{Cli, Commands},
    commands,
    config::Settings,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Settings decide the default log level, so load them before tracing
    let settings = Settings::load(&cli.env_file);
    let debug = settings.as_ref().map(|s| s.debug).unwrap_or(false);
    init_tracing(log_filter(
        cli.verbose,
        std::env::var("RUST_LOG").ok(),
        debug,
    ));

    let result = match settings {
        Ok(settings) => {
            tracing::debug!(?settings, "Configuration loaded");
            match cli.command {
                Commands::Serve(args) => commands::serve::execute(args, settings).await,
            }
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Pick the tracing filter: `--verbose`, then `RUST_LOG`, then the debug setting.
fn log_filter(verbose: bool, rust_log: Option<String>, debug: bool) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log.unwrap_or_else(|| if debug { "debug" } else { "info" }.to_string())
}

/// Initialize tracing subscriber
fn init_tracing(filter: String) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
