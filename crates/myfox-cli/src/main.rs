#![windows_subsystem = "windows"]

use myfox_cli::{commands, dialog};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    init_logging();

    // Arguments are ignored; the directory layout is the only configuration.
    match commands::launch::execute() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            dialog::show_error(&dialog::message_for(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("MYFOX_LOG")
        .unwrap_or_else(|_| EnvFilter::new("myfox=info,myfox_cli=info,myfox_browser=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
