mod cli; // argument parsing and usage errors
mod report; // console output

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use aurus_steering::SteeringInput;
use cli::ArgumentError;
use report::Report;
use tracing::{debug, error, info};
use tracing_subscriber::{self, EnvFilter};

fn main() -> ExitCode {
    // stdout carries only the report, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let input = match cli::parse_args(&args) {
        Ok(input) => input,
        Err(e) => {
            match &e {
                ArgumentError::Count(got) => {
                    debug!(got, expected = cli::ARG_COUNT, "Wrong number of arguments")
                }
                ArgumentError::Parse { argument } => {
                    debug!(argument = %argument, "Argument is not a number")
                }
            }
            if let Err(write_err) = writeln!(io::stdout().lock(), "{e}")
                .context("Failed to write argument error")
            {
                error!("{:#}", write_err);
            }
            return ExitCode::from(e.exit_code());
        }
    };

    match run(input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(input: SteeringInput) -> anyhow::Result<()> {
    info!(%input, mode = %input.mode(), "Computing wheel speeds");

    let report = Report::new(input);
    debug!(speeds = %report.speeds(), radius = ?input.turning_radius(), "Wheel speeds computed");

    let mut stdout = io::stdout().lock();
    write!(stdout, "{report}").context("Failed to write wheel speed report")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}
