//! `portfolio-api` binary: serve the API or load the sample portfolio.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use portfolio_api::adapters::http::AppState;
use portfolio_api::adapters::memory::InMemoryPortfolioStore;
use portfolio_api::adapters::postgres;
use portfolio_api::config::{AppConfig, LogFormat, ServerConfig, StorageBackend};
use portfolio_api::ports::Repositories;
use portfolio_api::seed::{reset_and_seed, seed_sample_portfolio};
use portfolio_api::server::run_server;

#[derive(Debug, Parser)]
#[command(name = "portfolio-api", version, about = "Personal portfolio REST API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Load the sample portfolio before serving (memory backend only)
        #[arg(long)]
        seed: bool,
    },
    /// Delete every profile and load the sample portfolio
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.server)?;
    config.validate().context("invalid configuration")?;

    let repositories = open_storage(&config).await?;

    match cli.command.unwrap_or(Command::Serve { seed: false }) {
        Command::Serve { seed } => {
            if seed {
                if config.database.backend != StorageBackend::Memory {
                    anyhow::bail!("--seed is only supported with the memory backend");
                }
                seed_sample_portfolio(&repositories)
                    .await
                    .context("failed to load sample portfolio")?;
            }

            let state = AppState::new(repositories)
                .with_default_profile(config.portfolio.default_profile());
            run_server(state, &config.server).await?;
        }
        Command::Seed => {
            let report = reset_and_seed(&repositories)
                .await
                .context("failed to seed portfolio")?;
            tracing::info!(
                profiles_removed = report.profiles_removed,
                profile_id = %report.profile.id,
                "Seed complete"
            );
            println!(
                "Loaded sample portfolio for {} (profile {})",
                report.profile.name, report.profile.id
            );
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(server: &ServerConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .context("invalid log filter")?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match server.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    result.map_err(|err| anyhow::anyhow!(err))
}

async fn open_storage(config: &AppConfig) -> Result<Repositories> {
    match config.database.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on exit");
            Ok(InMemoryPortfolioStore::new().repositories())
        }
        StorageBackend::Postgres => {
            let pool = postgres::create_pool(&config.database)
                .await
                .context("failed to connect to database")?;
            if config.database.run_migrations {
                postgres::run_migrations(&pool)
                    .await
                    .context("failed to run migrations")?;
                tracing::info!("Database migrations applied");
            }
            Ok(postgres::repositories(pool))
        }
    }
}
