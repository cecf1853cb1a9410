use std::{fs::File, process::ExitCode, sync::Arc};

use bank_api::{
    AccountService, InMemoryStore, api,
    config::Config,
    domain::Account,
    seed::{self, CsvReader},
};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bank_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), bank_api::Error> {
    let accounts = load_accounts(&config)?;
    let store = InMemoryStore::from_accounts(accounts)?;
    let service = Arc::new(AccountService::new(store));
    info!(accounts = service.account_count(), "account store seeded");

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    info!("listening on http://{}", bind_address);
    info!("  POST /authenticate");
    info!("  POST /deposit");
    info!("  POST /bank-transfer");
    info!("  GET  /health");

    axum::serve(listener, api::router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

fn load_accounts(config: &Config) -> Result<Vec<Account>, bank_api::Error> {
    match &config.accounts {
        Some(path) => {
            info!(path = %path.display(), "loading accounts from seed file");
            let file = File::open(path).map_err(|e| {
                bank_api::Error::Seed(format!("cannot open {}: {}", path.display(), e))
            })?;
            CsvReader::new(file).accounts()
        }
        None => Ok(seed::default_accounts()),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
