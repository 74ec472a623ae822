use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fixed monthly bill.
///
/// `is_paid` is flipped by the settings checkbox and reset for every bill
/// when the rollover crosses a month boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub name: String,
    pub cost: Decimal,
    pub is_paid: bool,
}

impl Bill {
    pub fn generate_id() -> String {
        format!("bill::{}", Uuid::new_v4())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BillValidationError {
    #[error("Bill name cannot be empty")]
    EmptyName,
    #[error("Bill name cannot exceed 100 characters")]
    NameTooLong,
    #[error("Bill cost cannot be negative")]
    NegativeCost,
}
