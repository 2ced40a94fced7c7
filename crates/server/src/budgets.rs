//! Budget endpoints.

use axum::{Json, extract::State};

use crate::{
    ServerError,
    server::ServerState,
    types::{
        Status,
        budget::{BudgetSet, BudgetStatusGet, BudgetStatusView, BudgetStored, BudgetView},
    },
};

pub(crate) fn map_budget(budget: ledger::Budget) -> BudgetView {
    BudgetView {
        category: budget.category,
        budget: budget.amount,
    }
}

pub async fn set(
    State(state): State<ServerState>,
    Json(payload): Json<BudgetSet>,
) -> Result<Json<BudgetStored>, ServerError> {
    let budget = state
        .ledger
        .set_budget(&payload.category, payload.amount)
        .await?;
    Ok(Json(BudgetStored {
        status: Status::Ok,
        category: budget.category,
        budget: budget.amount,
    }))
}

pub async fn check_status(
    State(state): State<ServerState>,
    Json(payload): Json<BudgetStatusGet>,
) -> Result<Json<BudgetStatusView>, ServerError> {
    let status = state.ledger.check_budget_status(&payload.category).await?;
    Ok(Json(BudgetStatusView {
        status: Status::Ok,
        category: status.category,
        budget: status.budget,
        spent: status.spent,
        remaining: status.remaining,
        notification: status.notification,
    }))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<BudgetView>>, ServerError> {
    let budgets = state
        .ledger
        .list_budgets()
        .await?
        .into_iter()
        .map(map_budget)
        .collect();
    Ok(Json(budgets))
}
