use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dates;

/// A single transaction against a budget category.
///
/// Purchases only ever describe the current week: the whole ledger is
/// cleared at every week rollover, and deleting an expense removes its
/// purchases with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    /// The owning expense.
    pub expense_id: String,
    pub date: NaiveDate,
    pub spent: Decimal,
}

impl Purchase {
    pub fn generate_id() -> String {
        format!("purchase::{}", Uuid::new_v4())
    }

    /// Weekday name of the purchase date, for list views.
    pub fn weekday(&self) -> &'static str {
        dates::weekday_name(self.date)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PurchaseValidationError {
    #[error("Purchase amount cannot be negative")]
    NegativeSpent,
}
