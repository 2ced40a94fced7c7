use std::sync::Arc;

use ledger::{Ledger, LedgerPool};
use server::ServerState;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expense_ledger={level},server={level},ledger={level},migration={level}",
            level = settings.app.level
        ))
        .init();

    let pool = LedgerPool::new(settings.database);
    if let Err(err) = pool.init().await {
        tracing::error!("failed to initialize database: {err}");
        return Err(err.into());
    }

    let ledger = Ledger::builder().pool(pool).build()?;
    if let Err(err) = ledger.ensure_schema().await {
        tracing::error!("failed to prepare schema: {err}");
        ledger.close().await?;
        return Err(err.into());
    }
    let ledger = Arc::new(ledger);

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let state = ServerState::new(ledger.clone(), settings.server.categories_path);

    let served = server::run_with_listener(state, listener, shutdown_signal()).await;
    if let Err(err) = &served {
        tracing::error!("server failed: {err}");
    }

    ledger.close().await?;
    served?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested, draining connections");
}
