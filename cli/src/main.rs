use clap::Parser;
use presentation::cli::{Cli, CliApp};
use shared::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let app = CliApp::new(&cli)?;
    app.run(cli.command)?;
    Ok(())
}
