use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use variant_browser::{browse, cli, client, config, error, render};
use cli::{Cli, Commands};
use client::SearchClient;
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", e.exit_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    match cli.command {
        Commands::Search { filters, page, json } => {
            let client = SearchClient::new(&config)?;
            let criteria = filters.criteria();
            let result = browse::with_spinner(
                &format!("Searching {}...", client.base_url()),
                client.fetch_page(&criteria, page),
            )
            .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render::render_page(&result));
            }
        }

        Commands::Browse { filters } => {
            let client = SearchClient::new(&config)?;
            browse::run_browse(&client, filters.criteria()).await?;
        }

        Commands::Annotate { dbsnp_id } => {
            let client = SearchClient::new(&config)?;
            let info = browse::with_spinner(
                &format!("Fetching {} from Ensembl...", dbsnp_id),
                client.fetch_annotation(dbsnp_id.trim()),
            )
            .await?;
            println!("{}", dbsnp_id.trim());
            println!("{}", render::render_annotation(&info));
        }

        Commands::Config { base_url, timeout, show } => {
            let changed = base_url.is_some() || timeout.is_some();
            if let Some(url) = base_url {
                config.set_base_url(url)?;
            }
            if let Some(seconds) = timeout {
                config.set_timeout(seconds)?;
            }
            if changed {
                config.save()?;
                println!("✔ Config saved: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Config:");
                println!("  Search API:   {}", config.effective_base_url());
                println!("  Ensembl API:  {}", config.ensembl_url);
                println!("  Timeout:      {}s", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
