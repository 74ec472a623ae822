//! # CSV Income Repository
//!
//! Stores income sources in `incomes.csv`.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use super::connection::CsvConnection;
use super::{read_records, write_records};
use crate::domain::models::income::Income;
use crate::storage::traits::IncomeStorage;

/// CSV-backed income repository.
#[derive(Clone)]
pub struct IncomeRepository {
    connection: CsvConnection,
}

impl IncomeRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn file_path(&self) -> PathBuf {
        self.connection.data_file("incomes.csv")
    }

    fn read_all(&self) -> Result<Vec<Income>> {
        read_records(&self.file_path())
    }

    fn write_all(&self, incomes: &[Income]) -> Result<()> {
        write_records(&self.file_path(), incomes)
    }
}

impl IncomeStorage for IncomeRepository {
    fn store_income(&self, income: &Income) -> Result<()> {
        let mut incomes = self.read_all()?;
        incomes.push(income.clone());
        self.write_all(&incomes)
    }

    fn get_income(&self, income_id: &str) -> Result<Option<Income>> {
        Ok(self
            .read_all()?
            .into_iter()
            .find(|income| income.id == income_id))
    }

    fn list_incomes(&self) -> Result<Vec<Income>> {
        self.read_all()
    }

    fn update_income(&self, income: &Income) -> Result<()> {
        let mut incomes = self.read_all()?;
        let position = incomes
            .iter()
            .position(|stored| stored.id == income.id)
            .ok_or_else(|| anyhow!("Income not found: {}", income.id))?;
        incomes[position] = income.clone();
        self.write_all(&incomes)
    }

    fn delete_income(&self, income_id: &str) -> Result<bool> {
        let mut incomes = self.read_all()?;
        let before = incomes.len();
        incomes.retain(|income| income.id != income_id);
        if incomes.len() == before {
            return Ok(false);
        }
        self.write_all(&incomes)?;
        Ok(true)
    }
}
