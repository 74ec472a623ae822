use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A savings goal on the wishlist.
///
/// At most one goal carries `is_main_goal = true`: the goal receiving the
/// weekly allocation and forecast tracking. `saved` only grows, via the
/// rollover migrating `allocated` into it; `is_fulfilled` is derived from
/// `saved >= cost` and refreshed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub cost: Decimal,
    /// Amount committed to this goal each week.
    pub allocated: Decimal,
    pub saved: Decimal,
    pub is_fulfilled: bool,
    pub is_main_goal: bool,
}

impl Goal {
    pub fn generate_id() -> String {
        format!("goal::{}", Uuid::new_v4())
    }

    /// Share of the cost already saved, as a percentage. `None` when the
    /// goal costs nothing.
    pub fn percentage_saved(&self) -> Option<Decimal> {
        if self.cost.is_zero() {
            return None;
        }
        Some(self.saved / self.cost * Decimal::ONE_HUNDRED)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GoalValidationError {
    #[error("Goal name cannot be empty")]
    EmptyName,
    #[error("Goal name cannot exceed 100 characters")]
    NameTooLong,
    #[error("Goal cost cannot be negative")]
    NegativeCost,
    #[error("Allocated amount cannot be negative")]
    NegativeAllocation,
    #[error("Saved amount cannot be negative")]
    NegativeSaved,
}
