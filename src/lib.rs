pub mod clipboard;
pub mod color;
pub mod config;
pub mod delivery;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod notification;
pub mod render;
pub mod session;
pub mod shell;
pub use error::{AppError, AppResult};

use std::io::{self, BufRead, Write};

/// Entrypoint used by the binary: an editing session driven by `input`.
pub fn run_with(input: impl BufRead, out: &mut dyn Write) -> AppResult<()> {
    logging::init();
    let config = config::load_app_config();
    tracing::info!(?config, "starting layerglow");

    let mut shell = shell::Shell::new(&config);
    shell.run(input, out)?;

    tracing::info!(
        layers = shell.session().model().layers().len(),
        "session ended"
    );
    Ok(())
}

/// Runs an editing session on stdin/stdout.
pub fn run() -> AppResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_with(stdin.lock(), &mut stdout)
}
