use clap::Parser;
use clap::error::ErrorKind;
use project_analyzer::app;
use project_analyzer::args::{Args, USAGE};
use project_analyzer_engine::report::ReportOptions;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(&args, &ReportOptions::default()) {
        Ok(path) => {
            println!("Analysis completed. Output written to: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) if e.is_usage() => {
            println!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("Application error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
