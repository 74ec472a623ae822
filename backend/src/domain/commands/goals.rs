use rust_decimal::Decimal;

use crate::domain::models::goal::Goal;

#[derive(Debug, Clone)]
pub struct CreateGoalCommand {
    pub name: String,
    pub cost: Decimal,
}

#[derive(Debug, Clone)]
pub struct CreateGoalResult {
    pub goal: Goal,
}

/// Wishlist edit: name, cost, and the saved amount correction.
#[derive(Debug, Clone)]
pub struct UpdateGoalCommand {
    pub goal_id: String,
    pub name: String,
    pub cost: Decimal,
    pub saved: Decimal,
}

/// Settings edit of the main goal: name and weekly allocation.
#[derive(Debug, Clone)]
pub struct UpdateGoalAllocationCommand {
    pub goal_id: String,
    pub name: String,
    pub allocated: Decimal,
}

#[derive(Debug, Clone)]
pub struct UpdateGoalResult {
    pub goal: Goal,
}

#[derive(Debug, Clone)]
pub struct SetMainGoalCommand {
    pub goal_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteGoalCommand {
    pub goal_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteGoalResult {
    /// The goal promoted to main when the deleted goal was the main one.
    pub promoted: Option<Goal>,
}
