use anyhow::Context;
use clap::Parser;
use fieldsales::cli::Cli;
use fieldsales::logging::init_tracing;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    let config = cli.load_config().context("Failed to load configuration")?;
    tracing::info!(
        destinations = config.destinations.len(),
        menu_entries = config.menu.len(),
        "Starting fieldsales"
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    fieldsales::ui::run(config, runtime.handle().clone()).context("Terminal UI failed")?;

    runtime.shutdown_background();
    Ok(())
}
