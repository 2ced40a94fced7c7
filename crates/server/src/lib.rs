use axum::{Json, http::StatusCode, response::IntoResponse};
use ledger::LedgerError;
use thiserror::Error;

pub use server::{ServerState, router, run_with_listener};

mod balance;
mod budgets;
mod categories;
mod expenses;
mod server;
mod summary;

pub mod types {
    pub use api_types::{Health, Status, StatusMessage};

    pub mod expense {
        pub use api_types::expense::{
            CategoryTotalView, ExpenseCreated, ExpenseDelete, ExpenseList, ExpenseNew,
            ExpenseUpdate, ExpenseView, Summarize,
        };
    }

    pub mod balance {
        pub use api_types::balance::{BalanceCredited, CreditSalary};
    }

    pub mod budget {
        pub use api_types::budget::{
            BudgetSet, BudgetStatusGet, BudgetStatusView, BudgetStored, BudgetView,
        };
    }

    pub mod summary {
        pub use api_types::summary::FinancialSummary;
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("categories unavailable: {0}")]
    Categories(String),
}

fn status_for_ledger_error(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::NotFound(_) | LedgerError::NoBudgetSet(_) => StatusCode::NOT_FOUND,
        LedgerError::NoFieldsProvided | LedgerError::MissingField(_) => StatusCode::BAD_REQUEST,
        LedgerError::PoolExhausted => StatusCode::SERVICE_UNAVAILABLE,
        LedgerError::NotInitialized(_)
        | LedgerError::StoreUnavailable(_)
        | LedgerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_ledger_error(err: LedgerError) -> String {
    match err {
        LedgerError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other if other.is_recoverable() => {
            tracing::debug!("request rejected: {other}");
            other.to_string()
        }
        other => {
            tracing::warn!("request failed: {other}");
            other.to_string()
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Ledger(err) => (status_for_ledger_error(&err), message_for_ledger_error(err)),
            ServerError::Categories(err) => {
                tracing::error!("categories resource failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "categories unavailable".to_string())
            }
        };

        (status, Json(types::StatusMessage::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let res = ServerError::from(LedgerError::NotFound(999)).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_budget_maps_to_404() {
        let res = ServerError::from(LedgerError::NoBudgetSet("food".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn empty_patch_maps_to_400() {
        let res = ServerError::from(LedgerError::NoFieldsProvided).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn pool_exhausted_maps_to_503() {
        let res = ServerError::from(LedgerError::PoolExhausted).into_response();
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn not_initialized_maps_to_500() {
        let res =
            ServerError::from(LedgerError::NotInitialized("pool".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
