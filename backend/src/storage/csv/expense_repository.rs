//! # CSV Expense Repository
//!
//! Stores budget categories in `expenses.csv`. Expense rows are flat, so
//! the domain model doubles as the record:
//!
//! ```csv
//! id,name,allocated,spent,is_overspent,is_savings
//! expense::4f…,Groceries,200,50,false,false
//! expense::a1…,Savings,150,0,false,true
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use super::connection::CsvConnection;
use super::{read_records, write_records};
use crate::domain::models::expense::Expense;
use crate::storage::traits::ExpenseStorage;

/// CSV-backed expense repository.
#[derive(Clone)]
pub struct ExpenseRepository {
    connection: CsvConnection,
}

impl ExpenseRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn file_path(&self) -> PathBuf {
        self.connection.data_file("expenses.csv")
    }

    fn read_all(&self) -> Result<Vec<Expense>> {
        read_records(&self.file_path())
    }

    fn write_all(&self, expenses: &[Expense]) -> Result<()> {
        write_records(&self.file_path(), expenses)
    }
}

impl ExpenseStorage for ExpenseRepository {
    fn store_expense(&self, expense: &Expense) -> Result<()> {
        let mut expenses = self.read_all()?;
        expenses.push(expense.clone());
        self.write_all(&expenses)
    }

    fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>> {
        Ok(self
            .read_all()?
            .into_iter()
            .find(|expense| expense.id == expense_id))
    }

    fn get_expense_by_name(&self, name: &str) -> Result<Option<Expense>> {
        Ok(self.read_all()?.into_iter().find(|expense| expense.name == name))
    }

    fn get_savings_expense(&self) -> Result<Option<Expense>> {
        Ok(self.read_all()?.into_iter().find(|expense| expense.is_savings))
    }

    fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.read_all()
    }

    fn update_expense(&self, expense: &Expense) -> Result<()> {
        let mut expenses = self.read_all()?;
        let position = expenses
            .iter()
            .position(|stored| stored.id == expense.id)
            .ok_or_else(|| anyhow!("Expense not found: {}", expense.id))?;
        expenses[position] = expense.clone();
        self.write_all(&expenses)
    }

    fn delete_expense(&self, expense_id: &str) -> Result<bool> {
        let mut expenses = self.read_all()?;
        let before = expenses.len();
        expenses.retain(|expense| expense.id != expense_id);
        if expenses.len() == before {
            return Ok(false);
        }
        self.write_all(&expenses)?;
        Ok(true)
    }
}
