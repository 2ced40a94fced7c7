use axum::{Json, extract::State};
use ledger::DEFAULT_CREDIT_SOURCE;

use crate::{
    ServerError,
    server::ServerState,
    types::{
        Status,
        balance::{BalanceCredited, CreditSalary},
    },
};

pub async fn credit_salary(
    State(state): State<ServerState>,
    Json(payload): Json<CreditSalary>,
) -> Result<Json<BalanceCredited>, ServerError> {
    let source = payload.source.as_deref().unwrap_or(DEFAULT_CREDIT_SOURCE);
    let total_balance = state.ledger.credit_salary(payload.amount, source).await?;
    Ok(Json(BalanceCredited {
        status: Status::Ok,
        total_balance,
    }))
}
