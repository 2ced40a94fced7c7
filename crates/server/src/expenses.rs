//! Expense ledger endpoints.

use axum::{Json, extract::State};
use ledger::{Expense, ExpensePatch, NewExpense};

use crate::{
    ServerError,
    server::ServerState,
    types::{
        Status, StatusMessage,
        expense::{
            CategoryTotalView, ExpenseCreated, ExpenseDelete, ExpenseList, ExpenseNew,
            ExpenseUpdate, ExpenseView, Summarize,
        },
    },
};

fn map_expense(expense: Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        date: expense.date,
        amount: expense.amount,
        category: expense.category,
        subcategory: expense.subcategory,
        note: expense.note,
    }
}

pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<Json<ExpenseCreated>, ServerError> {
    let expense = NewExpense::new(payload.date, payload.amount, payload.category)
        .subcategory(payload.subcategory)
        .note(payload.note);
    let id = state.ledger.add_expense(expense).await?;
    Ok(Json(ExpenseCreated {
        status: Status::Ok,
        id,
    }))
}

pub async fn list(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseList>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let expenses = state
        .ledger
        .list_expenses(payload.start_date, payload.end_date)
        .await?
        .into_iter()
        .map(map_expense)
        .collect();
    Ok(Json(expenses))
}

pub async fn summarize(
    State(state): State<ServerState>,
    Json(payload): Json<Summarize>,
) -> Result<Json<Vec<CategoryTotalView>>, ServerError> {
    let totals = state
        .ledger
        .summarize(
            payload.start_date,
            payload.end_date,
            payload.category.as_deref(),
        )
        .await?
        .into_iter()
        .map(|total| CategoryTotalView {
            category: total.category,
            total_amount: total.total_amount,
        })
        .collect();
    Ok(Json(totals))
}

pub async fn edit(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseUpdate>,
) -> Result<Json<StatusMessage>, ServerError> {
    let id = payload.expense_id;
    let patch = ExpensePatch {
        date: payload.date,
        amount: payload.amount,
        category: payload.category,
        subcategory: payload.subcategory,
        note: payload.note,
    };
    state.ledger.edit_expense(id, patch).await?;
    Ok(Json(StatusMessage::ok(format!("Expense {id} updated"))))
}

pub async fn delete(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseDelete>,
) -> Result<Json<StatusMessage>, ServerError> {
    let id = payload.expense_id;
    state.ledger.delete_expense(id).await?;
    Ok(Json(StatusMessage::ok(format!("Expense {id} deleted"))))
}
