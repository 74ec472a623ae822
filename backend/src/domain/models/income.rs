use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A monthly income source. Pure input to the budget allocator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
}

impl Income {
    pub fn generate_id() -> String {
        format!("income::{}", Uuid::new_v4())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IncomeValidationError {
    #[error("Income name cannot be empty")]
    EmptyName,
    #[error("Income name cannot exceed 100 characters")]
    NameTooLong,
    #[error("Income amount cannot be negative")]
    NegativeAmount,
}
