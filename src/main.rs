use anyhow::{anyhow, Context, Result};
use clap::Parser;
use setup_my_action::cli::RootArgs;
use setup_my_action::{load_config, run_action, CommandOutput, FileOutput, ProbeOptions};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = RootArgs::parse();
    init_tracing(args.log_level());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &RootArgs) -> Result<()> {
    let config = load_config(args.config_path()).context("failed to load configuration")?;
    let probe = ProbeOptions::default();

    let report = if args.legacy_set_output {
        run_action(&config, &mut CommandOutput::stdout(), &probe)?
    } else {
        let path = args
            .output_path()
            .ok_or_else(|| anyhow!("GITHUB_OUTPUT is not set"))?;
        tracing::debug!(path = %path.display(), "writing step outputs");
        run_action(&config, &mut FileOutput::new(path), &probe)?
    };

    tracing::debug!(
        processed_text = %report.text.processed,
        sum = report.numbers.sum,
        average = report.numbers.average,
        response_field = %report.probe.response_field,
        "step outputs published"
    );
    Ok(())
}
