//! chime CLI entry point

use std::process::ExitCode;

use clap::Parser;

use chime::cli::{build_options, run_notify, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let home = dirs::home_dir();
    let options = build_options(cli.sound.as_deref(), cli.verbose, home.as_deref());

    run_notify(options).await
}
