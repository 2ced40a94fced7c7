use axum::{Json, extract::State};

use crate::{
    ServerError, budgets::map_budget, server::ServerState,
    types::{Status, summary::FinancialSummary},
};

pub async fn get(State(state): State<ServerState>) -> Result<Json<FinancialSummary>, ServerError> {
    let summary = state.ledger.financial_summary().await?;
    Ok(Json(FinancialSummary {
        status: Status::Ok,
        total_balance: summary.total_balance,
        total_spent: summary.total_spent,
        remaining_balance: summary.remaining_balance,
        budgets: summary.budgets.into_iter().map(map_budget).collect(),
    }))
}
