//! Wishlist goal management.
//!
//! The main-goal flag is exclusive: swaps go through the storage layer's
//! clear-then-set operation, the first goal ever created becomes main, and
//! deleting the main goal promotes another one when any remains.

use std::sync::Arc;

use anyhow::Result;
use log::info;
use rust_decimal::Decimal;

use crate::domain::commands::goals::{
    CreateGoalCommand, CreateGoalResult, DeleteGoalCommand, DeleteGoalResult, SetMainGoalCommand,
    UpdateGoalAllocationCommand, UpdateGoalCommand, UpdateGoalResult,
};
use crate::domain::errors::NotFoundError;
use crate::domain::models::goal::{Goal, GoalValidationError};
use crate::storage::csv::{CsvConnection, GoalRepository};
use crate::storage::GoalStorage;

/// Service for managing savings goals.
#[derive(Clone)]
pub struct GoalService {
    goal_repository: GoalRepository,
}

impl GoalService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            goal_repository: GoalRepository::new((*connection).clone()),
        }
    }

    /// Create a goal. The first goal in the system becomes the main goal.
    pub fn create_goal(&self, command: CreateGoalCommand) -> Result<CreateGoalResult> {
        let name = command.name.trim().to_string();
        validate_name(&name)?;
        if command.cost < Decimal::ZERO {
            return Err(GoalValidationError::NegativeCost.into());
        }

        let is_main_goal = self.goal_repository.list_goals()?.is_empty();
        let goal = Goal {
            id: Goal::generate_id(),
            name,
            cost: command.cost,
            allocated: Decimal::ZERO,
            saved: Decimal::ZERO,
            is_fulfilled: false,
            is_main_goal,
        };
        self.goal_repository.store_goal(&goal)?;
        if is_main_goal {
            info!("Goal {} is the only goal, making it the main goal", goal.name);
        }
        Ok(CreateGoalResult { goal })
    }

    /// Wishlist edit: name, cost, and a saved-amount correction.
    /// `is_fulfilled` follows the new figures.
    pub fn update_goal(&self, command: UpdateGoalCommand) -> Result<UpdateGoalResult> {
        let mut goal = self
            .goal_repository
            .get_goal(&command.goal_id)?
            .ok_or_else(|| NotFoundError::Goal(command.goal_id.clone()))?;

        let name = command.name.trim().to_string();
        validate_name(&name)?;
        if command.cost < Decimal::ZERO {
            return Err(GoalValidationError::NegativeCost.into());
        }
        if command.saved < Decimal::ZERO {
            return Err(GoalValidationError::NegativeSaved.into());
        }

        goal.name = name;
        goal.cost = command.cost;
        goal.saved = command.saved;
        goal.is_fulfilled = goal.saved >= goal.cost;
        self.goal_repository.update_goal(&goal)?;
        Ok(UpdateGoalResult { goal })
    }

    /// Settings edit of the main goal: name and weekly allocation.
    pub fn update_goal_allocation(
        &self,
        command: UpdateGoalAllocationCommand,
    ) -> Result<UpdateGoalResult> {
        let mut goal = self
            .goal_repository
            .get_goal(&command.goal_id)?
            .ok_or_else(|| NotFoundError::Goal(command.goal_id.clone()))?;

        let name = command.name.trim().to_string();
        validate_name(&name)?;
        if command.allocated < Decimal::ZERO {
            return Err(GoalValidationError::NegativeAllocation.into());
        }

        goal.name = name;
        goal.allocated = command.allocated;
        self.goal_repository.update_goal(&goal)?;
        Ok(UpdateGoalResult { goal })
    }

    /// Make the given goal the main one, demoting the previous holder.
    pub fn set_main_goal(&self, command: SetMainGoalCommand) -> Result<UpdateGoalResult> {
        let goal = self
            .goal_repository
            .get_goal(&command.goal_id)?
            .ok_or_else(|| NotFoundError::Goal(command.goal_id.clone()))?;
        if !goal.is_main_goal {
            info!("Promoting {} to main goal", goal.name);
            self.goal_repository.set_exclusive_main(&goal.id)?;
        }
        let goal = self
            .goal_repository
            .get_goal(&command.goal_id)?
            .ok_or_else(|| NotFoundError::Goal(command.goal_id.clone()))?;
        Ok(UpdateGoalResult { goal })
    }

    /// Delete a goal. Deleting the main goal promotes another goal when
    /// one exists.
    pub fn delete_goal(&self, command: DeleteGoalCommand) -> Result<DeleteGoalResult> {
        let goal = self
            .goal_repository
            .get_goal(&command.goal_id)?
            .ok_or_else(|| NotFoundError::Goal(command.goal_id.clone()))?;
        let was_main = goal.is_main_goal;
        self.goal_repository.delete_goal(&goal.id)?;

        let mut promoted = None;
        if was_main {
            if let Some(next) = self.goal_repository.list_goals()?.into_iter().next() {
                self.goal_repository.set_exclusive_main(&next.id)?;
                info!("Main goal deleted, promoted {}", next.name);
                promoted = self.goal_repository.get_goal(&next.id)?;
            }
        }
        Ok(DeleteGoalResult { promoted })
    }

    pub fn goal_detail(&self, goal_id: &str) -> Result<Goal> {
        self.goal_repository
            .get_goal(goal_id)?
            .ok_or_else(|| NotFoundError::Goal(goal_id.to_string()).into())
    }

    /// The wishlist: every goal, main goal first.
    pub fn list_goals(&self) -> Result<Vec<Goal>> {
        let mut goals = self.goal_repository.list_goals()?;
        goals.sort_by_key(|goal| !goal.is_main_goal);
        Ok(goals)
    }

    pub fn main_goal(&self) -> Result<Option<Goal>> {
        self.goal_repository.get_main_goal()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GoalValidationError::EmptyName.into());
    }
    if name.len() > 100 {
        return Err(GoalValidationError::NameTooLong.into());
    }
    Ok(())
}
