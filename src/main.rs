// src/main.rs — cutchain entry point

use clap::Parser;

use cutchain::cli::{Cli, Commands};
use cutchain::core::naming::NamingScheme;
use cutchain::infra::config::Config;
use cutchain::infra::logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging (respects RUST_LOG / CUTCHAIN_LOG)
    logger::init_logging(&cli.log_level);

    if let Err(e) = run(cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load config (falls back to defaults if no config file is found)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };
    config.validate()?;

    let mut naming = NamingScheme::new(cli.region(), &config.naming);
    if let Some(ref tag) = cli.date_tag {
        naming = naming.with_date_tag(tag);
    }

    match cli.command {
        Some(Commands::Plan { json }) => cutchain::cli::plan::show_plan(&naming, json),
        Some(Commands::Show { ref file, ref key }) => cutchain::cli::show::show_cuts(file, key),
        Some(Commands::Finalize { ref report }) => {
            cutchain::cli::run::run_finalize(&config, naming, report.as_deref()).await
        }
        Some(Commands::Run { ref report }) => {
            cutchain::cli::run::run_campaign(&config, naming, report.as_deref()).await
        }
        None => cutchain::cli::run::run_campaign(&config, naming, None).await,
    }
}
