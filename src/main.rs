use std::process::ExitCode;

use alerter_config::AppConfig;
use alerter_core::{ErrorKind, LineConsole};
use clap::Parser;
use college_alerter::cli::Cli;
use college_alerter::logging::init_logging;
use college_alerter::router;
use college_alerter::state::init_app_state;
use dotenvy::dotenv;

fn main() -> ExitCode {
    dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(AppConfig::from_env());
    let _log_guard = init_logging(&config);
    tracing::debug!(?config, "Configuration loaded");

    let mut state = match init_app_state(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to initialise application state: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut console = LineConsole::stdio(state.config.clear_screen);
    match router::run(&mut state, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind == ErrorKind::InputClosed => {
            tracing::warn!("Input closed before Exit was selected");
            eprintln!("\n❌ Input closed before Exit was selected.");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "Console failure");
            eprintln!("\n❌ Console error: {}", e);
            ExitCode::FAILURE
        }
    }
}
