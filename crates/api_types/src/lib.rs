//! Wire types of the expense ledger HTTP API.
//!
//! Decimals travel as JSON numbers, dates as `YYYY-MM-DD` strings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `status` of every envelope-style response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// `{status, message}` body, used for confirmations and expected failures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub status: Status,
    pub message: String,
}

impl StatusMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
        }
    }
}

/// Liveness body, `{status: "ok"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: Status,
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub date: NaiveDate,
        pub amount: Decimal,
        pub category: String,
        #[serde(default)]
        pub subcategory: String,
        #[serde(default)]
        pub note: String,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        pub status: Status,
        pub id: i32,
    }

    /// Inclusive date range.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseList {
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: i32,
        pub date: NaiveDate,
        pub amount: Decimal,
        pub category: String,
        pub subcategory: String,
        pub note: String,
    }

    /// Partial update: absent (or `null`) fields are left unchanged.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        pub expense_id: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub date: Option<NaiveDate>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub amount: Option<Decimal>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub subcategory: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub note: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseDelete {
        pub expense_id: i32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Summarize {
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
        #[serde(default)]
        pub category: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CategoryTotalView {
        pub category: String,
        pub total_amount: Decimal,
    }
}

pub mod balance {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CreditSalary {
        pub amount: Decimal,
        #[serde(default)]
        pub source: Option<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct BalanceCredited {
        pub status: Status,
        pub total_balance: Decimal,
    }
}

pub mod budget {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetSet {
        pub category: String,
        pub amount: Decimal,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct BudgetStored {
        pub status: Status,
        pub category: String,
        pub budget: Decimal,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetStatusGet {
        pub category: String,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct BudgetStatusView {
        pub status: Status,
        pub category: String,
        pub budget: Decimal,
        pub spent: Decimal,
        pub remaining: Decimal,
        pub notification: String,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct BudgetView {
        pub category: String,
        pub budget: Decimal,
    }
}

pub mod summary {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct FinancialSummary {
        pub status: Status,
        pub total_balance: Decimal,
        pub total_spent: Decimal,
        pub remaining_balance: Decimal,
        pub budgets: Vec<budget::BudgetView>,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[test]
    fn health_carries_only_status() {
        let body = serde_json::to_value(Health { status: Status::Ok }).unwrap();
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[test]
    fn status_message_serializes_lowercase() {
        let body = serde_json::to_value(StatusMessage::error("Expense ID not found")).unwrap();
        assert_eq!(
            body,
            json!({"status": "error", "message": "Expense ID not found"})
        );
    }

    #[test]
    fn expense_new_defaults_optional_text() {
        let payload: expense::ExpenseNew = serde_json::from_value(json!({
            "date": "2025-01-15",
            "amount": 2000,
            "category": "food"
        }))
        .unwrap();
        assert_eq!(payload.amount, dec!(2000));
        assert_eq!(payload.subcategory, "");
        assert_eq!(payload.note, "");
    }

    #[test]
    fn update_distinguishes_absent_from_empty() {
        let payload: expense::ExpenseUpdate = serde_json::from_value(json!({
            "expense_id": 3,
            "note": ""
        }))
        .unwrap();
        assert_eq!(payload.note.as_deref(), Some(""));
        assert!(payload.category.is_none());
        assert!(payload.amount.is_none());
    }

    #[test]
    fn decimals_are_json_numbers() {
        let body = serde_json::to_value(balance::BalanceCredited {
            status: Status::Ok,
            total_balance: dec!(1750.25),
        })
        .unwrap();
        assert_eq!(body["total_balance"], json!(1750.25));
        assert_eq!(body["status"], json!("ok"));
    }
}
