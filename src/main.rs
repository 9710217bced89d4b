use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hnfeed::app::AppContext;
use hnfeed::cli::{commands, Cli, Commands};
use hnfeed::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Render { routes, out } => {
            commands::render_routes(&ctx, &routes, out.as_deref()).await?;
        }
        Commands::Browse { out, start } => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            commands::browse(&ctx, &out, &start, stdin).await?;
        }
    }

    Ok(())
}
