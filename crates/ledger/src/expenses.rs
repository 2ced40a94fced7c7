//! The module contains the `Expense` type, a dated monetary entry of the
//! ledger, and the `expenses` table entity.
//!
//! Positive amounts are spending. Credits are recorded with a category
//! starting with [`INCOME_CATEGORY_PREFIX`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, Value, entity::prelude::*};

use crate::{LedgerError, ResultLedger};

/// Category prefix of the audit rows written by `credit_salary`.
pub const INCOME_CATEGORY_PREFIX: &str = "income:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub id: i32,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub subcategory: String,
    pub note: String,
}

impl Expense {
    pub fn is_income(&self) -> bool {
        self.category.starts_with(INCOME_CATEGORY_PREFIX)
    }
}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            amount: model.amount,
            category: model.category,
            subcategory: model.subcategory,
            note: model.note,
        }
    }
}

/// A new ledger entry. Subcategory and note default to empty strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub subcategory: String,
    pub note: String,
}

impl NewExpense {
    pub fn new(date: NaiveDate, amount: Decimal, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            subcategory: String::new(),
            note: String::new(),
        }
    }

    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub(crate) fn into_active_model(self) -> ResultLedger<ActiveModel> {
        if self.category.trim().is_empty() {
            return Err(LedgerError::MissingField("category"));
        }
        Ok(ActiveModel {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(self.date),
            amount: ActiveValue::Set(self.amount),
            category: ActiveValue::Set(self.category),
            subcategory: ActiveValue::Set(self.subcategory),
            note: ActiveValue::Set(self.note),
        })
    }
}

/// Partial update of an expense.
///
/// `None` leaves the column untouched, `Some("")` stores an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpensePatch {
    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub note: Option<String>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }

    /// The SET clause as `(column, value)` pairs, in column order.
    ///
    /// Only these five columns can ever be updated.
    pub(crate) fn assignments(&self) -> Vec<(Column, Value)> {
        [
            (Column::Date, self.date.map(Value::from)),
            (Column::Amount, self.amount.map(Value::from)),
            (Column::Category, self.category.clone().map(Value::from)),
            (Column::Subcategory, self.subcategory.clone().map(Value::from)),
            (Column::Note, self.note.clone().map(Value::from)),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|value| (column, value)))
        .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub amount: Decimal,
    pub category: String,
    pub subcategory: String,
    pub note: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
