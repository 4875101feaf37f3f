use std::process::ExitCode;

use tally_sort_cli::config::Configuration;
use tally_sort_cli::{run, usage};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());

    // Skipped-parameter notices go to stdout alongside the report.
    let config = match Configuration::resolve(args, &mut std::io::stdout().lock()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            if e.is_usage_error() {
                eprintln!("{}", usage());
            }
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        Ok(summary) => {
            tracing::info!(
                data_kind = %summary.data_kind,
                sorting_mode = %summary.sorting_mode,
                total = summary.total,
                skipped = summary.skipped,
                groups = summary.groups,
                "report written"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the report; `RUST_LOG` overrides the `warn` default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
