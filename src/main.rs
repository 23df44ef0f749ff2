//! # Sentiline Main Entry Point
//!
//! Starts the interactive analyzer, or analyzes once with `--text`.

use anyhow::Result;
use sentiline::cmd_args::CommandLineArgs;
use sentiline::config::Settings;
use sentiline::repl::io::{TerminalEventStream, TerminalRenderStream};
use sentiline::{logging, oneshot, AppController};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    let settings = Settings::resolve(&args)?;

    if let Some(text) = args.text() {
        logging::init_stderr_logging(&settings.log_level)?;
        return oneshot::run_stdio(&settings, text).await;
    }

    if let Err(e) = logging::init_file_logging(&settings.log_level, &settings.log_path) {
        // The UI owns the terminal, so carry on without a log
        eprintln!("Logging disabled: {e:#}");
    }
    tracing::info!("Starting sentiline against {}", settings.endpoint);

    let mut app = AppController::with_io_streams(
        &settings,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.run().await?;

    tracing::info!("Sentiline exited");
    Ok(())
}
