//! Summarises a saved lexicon listing response.
//!
//! Usage: `lexicon-inspect --input body.json [--response lists] [--max-depth 32]`.
//! Logs go to stderr as JSON; set `RUST_LOG=debug` to see decode details.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use lexicon_view::inspect::{self, InspectError, InspectSettings};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), InspectError> {
    let settings = InspectSettings::load_with_args(env::args_os())?;
    let summary = inspect::run(&settings)?;
    if let Err(err) = write!(io::stdout().lock(), "{summary}") {
        drop(err);
    }
    Ok(())
}
