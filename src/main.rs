mod cli;
mod domain;
mod repository;
mod services;
mod utils;
mod web;

use anyhow::Context;
use clap::Parser;

use crate::{cli::{Cli, Command, DatabaseActions, ServerActions}, utils::{config::{get_config, Config, DatabaseConfig, IdentifierCheck}, db::Database}, web::{routes::{create_router, session_key, RouterSettings}, AppState}};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = get_config()?;

    match cli.command {
        Command::Server { action: ServerActions::Start } => start_server(config, false).await,
        Command::Server { action: ServerActions::DryStart } => start_server(config, true).await,
        Command::Database { action: DatabaseActions::Migrate } => {
            let db = Database::init_application_db(&config.database)?;
            db.run_migrations().await.context("Failed to apply migrations")?;
            log::info!("Migrations applied.");

            Ok(())
        }
    }
}

/// Builds the database handle. An unreachable database is not fatal, requests
/// that need it fail one by one; only an unusable `[database]` section is.
async fn prepare_database(db_config: &DatabaseConfig) -> anyhow::Result<Database> {
    let db = Database::init_application_db(db_config)?;

    match db.check_connection().await {
        Ok(()) => {
            log::info!("Connected to the database.");

            if let Err(err) = db.run_migrations().await {
                log::error!("Failed to apply migrations: {:#}", err);
            }
        },
        Err(err) => log::error!("Database connection error: {:#}", err)
    }

    Ok(db)
}

async fn start_server(config: &'static Config, dry: bool) -> anyhow::Result<()> {
    let db = prepare_database(&config.database).await?;

    if config.auth.identifier_check == IdentifierCheck::NameOnly {
        log::warn!("identifier_check = \"name_only\": logins only compare the product name.");
    }

    let app_state = AppState {
        pool: db.get_pool().clone(),
        identifier_check: config.auth.identifier_check
    };

    let settings = RouterSettings {
        public_dir: config.server.public_dir.clone(),
        session_key: session_key(config.session.secret.as_deref())?,
        session_inactivity_minutes: config.session.inactivity_minutes
    };

    let app = create_router(app_state, settings);

    if dry {
        log::info!("Dry start finished, router built for {}.", config.bind_address());
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;

    log::info!("Listening on http://{}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for ctrl-c: {}", err);
    }

    log::info!("Shutting down.");
}
