use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name reserved for the savings pseudo-category.
pub const SAVINGS_EXPENSE_NAME: &str = "Savings";

/// A budget category.
///
/// `spent` is the sum of the category's purchases and `is_overspent` is
/// derived from it; both are refreshed on read. At most one expense carries
/// `is_savings = true`: the pseudo-category holding money set aside rather
/// than spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    /// Unique, case-sensitive category name.
    pub name: String,
    pub allocated: Decimal,
    pub spent: Decimal,
    pub is_overspent: bool,
    pub is_savings: bool,
}

impl Expense {
    pub fn generate_id() -> String {
        format!("expense::{}", Uuid::new_v4())
    }

    /// Share of the allocation consumed, as a percentage. `None` when
    /// nothing is allocated.
    pub fn percentage_spent(&self) -> Option<Decimal> {
        if self.allocated.is_zero() {
            return None;
        }
        Some(self.spent / self.allocated * Decimal::ONE_HUNDRED)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Expense name cannot be empty")]
    EmptyName,
    #[error("Expense name cannot exceed 100 characters")]
    NameTooLong,
    #[error("An expense with this name already exists")]
    DuplicateName,
    #[error("The savings category name is reserved")]
    ReservedSavingsName,
    #[error("Allocated amount cannot be negative")]
    NegativeAllocation,
    #[error("A savings category already exists")]
    SavingsAlreadyExists,
}
