//! Swatches - build color swatch archives from hex colors
//!
//! This application converts a space-separated list of hex colors into an
//! HSB swatch group and writes it as a zip archive holding `Swatches.json`.

use clap::error::ErrorKind;
use clap::Parser;
use swatches::cli::{ExitCode, SwatchArgs};
use swatches::constants::usage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> std::process::ExitCode {
    let args = match SwatchArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::MissingRequiredArgument => {
                println!("{}", usage());
                return ExitCode::UsageError.into();
            }
            _ => {
                eprint!("{e}");
                return ExitCode::UsageError.into();
            }
        },
    };

    // Initialize tracing on stderr so stdout only carries user-facing lines
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.execute() {
        Ok(()) => ExitCode::Success.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code().into()
        }
    }
}
