//! Process entry point: load configuration, stand up the database pool and
//! bus connection, subscribe the dispatcher, and drain in-flight work on
//! SIGINT/SIGTERM.

use std::process::ExitCode;
use std::sync::Arc;

use billing_ledger::banker::{Banker, PgBanker};
use billing_ledger::config::BillingConfig;
use billing_ledger::db::Database;
use billing_ledger::dispatcher;
use billing_ledger::logging;
use billing_ledger::stores::{PgAccountStore, PgAssetStore, PgHistoryStore};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("billing-ledger: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = BillingConfig::load()?;
    logging::init_logging(&config.logging);

    tracing::info!(broker = %config.broker.server, "starting billing-ledger");

    let db = Database::connect(&config.database.url, config.database.heartbeat).await?;
    db.health_check().await?;
    db.migrate().await?;

    let banker: Arc<dyn Banker> = Arc::new(PgBanker::new(
        db.pool().clone(),
        Arc::new(PgAccountStore),
        Arc::new(PgAssetStore),
        Arc::new(PgHistoryStore),
    ));

    let client = async_nats::connect(&config.broker.server).await?;
    tracing::info!(broker = %config.broker.server, "connected to message bus");

    let mut tasks = dispatcher::subscribe_all(client.clone(), banker).await?;
    tracing::info!("subscribed to all bank.* subjects, awaiting requests");

    wait_for_shutdown_signal().await;
    tracing::info!("shutdown signal received, draining in-flight handlers");

    // Unsubscribes every queue subscription and flushes pending outbound
    // traffic; each listener task's message stream then ends naturally and
    // it drains its own in-flight handlers before returning.
    client.drain().await?;
    while tasks.join_next().await.is_some() {}

    db.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

/// Waits for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
