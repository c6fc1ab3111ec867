mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use quiz_slide_gen::{run, to_answer_key};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let cli = Cli::parse();
    let opts = cli.run_options();

    match run(&opts) {
        Ok(report) => {
            tracing::info!("[quiz] {}", report.summary);
            if cli.answer_key {
                match serde_json::to_string_pretty(&to_answer_key(&report.generated)) {
                    Ok(key) => println!("{key}"),
                    Err(e) => tracing::warn!("could not serialize answer key: {e}"),
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(
                "[quiz] Failed to generate from {}: {e}",
                opts.display_path(&opts.input).display()
            );
            ExitCode::FAILURE
        }
    }
}
