//! # CSV Goal Repository
//!
//! Stores savings goals in `goals.csv`. The `is_main_goal` flag is
//! exclusive; moving it always goes through
//! [`set_exclusive_main`](crate::storage::GoalStorage::set_exclusive_main),
//! which clears and sets it in a single file rewrite.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use super::connection::CsvConnection;
use super::{read_records, write_records};
use crate::domain::models::goal::Goal;
use crate::storage::traits::GoalStorage;

/// CSV-backed goal repository.
#[derive(Clone)]
pub struct GoalRepository {
    connection: CsvConnection,
}

impl GoalRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn file_path(&self) -> PathBuf {
        self.connection.data_file("goals.csv")
    }

    fn read_all(&self) -> Result<Vec<Goal>> {
        read_records(&self.file_path())
    }

    fn write_all(&self, goals: &[Goal]) -> Result<()> {
        write_records(&self.file_path(), goals)
    }
}

impl GoalStorage for GoalRepository {
    fn store_goal(&self, goal: &Goal) -> Result<()> {
        let mut goals = self.read_all()?;
        goals.push(goal.clone());
        self.write_all(&goals)
    }

    fn get_goal(&self, goal_id: &str) -> Result<Option<Goal>> {
        Ok(self.read_all()?.into_iter().find(|goal| goal.id == goal_id))
    }

    fn get_main_goal(&self) -> Result<Option<Goal>> {
        Ok(self.read_all()?.into_iter().find(|goal| goal.is_main_goal))
    }

    fn list_goals(&self) -> Result<Vec<Goal>> {
        self.read_all()
    }

    fn update_goal(&self, goal: &Goal) -> Result<()> {
        let mut goals = self.read_all()?;
        let position = goals
            .iter()
            .position(|stored| stored.id == goal.id)
            .ok_or_else(|| anyhow!("Goal not found: {}", goal.id))?;
        goals[position] = goal.clone();
        self.write_all(&goals)
    }

    fn delete_goal(&self, goal_id: &str) -> Result<bool> {
        let mut goals = self.read_all()?;
        let before = goals.len();
        goals.retain(|goal| goal.id != goal_id);
        if goals.len() == before {
            return Ok(false);
        }
        self.write_all(&goals)?;
        Ok(true)
    }

    fn set_exclusive_main(&self, goal_id: &str) -> Result<()> {
        let mut goals = self.read_all()?;
        if !goals.iter().any(|goal| goal.id == goal_id) {
            return Err(anyhow!("Goal not found: {}", goal_id));
        }
        for goal in &mut goals {
            goal.is_main_goal = goal.id == goal_id;
        }
        self.write_all(&goals)
    }
}
