use std::{future::Future, path::PathBuf, sync::Arc};

use axum::{
    Json, Router,
    routing::{get, post},
};
use ledger::Ledger;

use crate::{
    balance, budgets, categories, expenses, summary,
    types::{Health, Status},
};

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<Ledger>,
    /// JSON document served by `GET /categories`, read on every request.
    pub categories_path: PathBuf,
}

impl ServerState {
    pub fn new(ledger: Arc<Ledger>, categories_path: impl Into<PathBuf>) -> Self {
        Self {
            ledger,
            categories_path: categories_path.into(),
        }
    }
}

async fn health() -> Json<Health> {
    Json(Health { status: Status::Ok })
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/add_expense", post(expenses::add))
        .route("/list_expenses", post(expenses::list))
        .route("/summarize", post(expenses::summarize))
        .route("/edit_expense", post(expenses::edit))
        .route("/delete_expense", post(expenses::delete))
        .route("/credit_salary", post(balance::credit_salary))
        .route("/set_budget", post(budgets::set))
        .route("/check_budget_status", post(budgets::check_status))
        .route("/budgets", get(budgets::list))
        .route("/financial_summary", get(summary::get))
        .route("/categories", get(categories::get))
        .with_state(state)
}

/// Serve until `shutdown` resolves.
pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
