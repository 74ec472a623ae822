//! # CSV Bill Repository
//!
//! Stores monthly bills in `bills.csv`.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use super::connection::CsvConnection;
use super::{read_records, write_records};
use crate::domain::models::bill::Bill;
use crate::storage::traits::BillStorage;

/// CSV-backed bill repository.
#[derive(Clone)]
pub struct BillRepository {
    connection: CsvConnection,
}

impl BillRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn file_path(&self) -> PathBuf {
        self.connection.data_file("bills.csv")
    }

    fn read_all(&self) -> Result<Vec<Bill>> {
        read_records(&self.file_path())
    }

    fn write_all(&self, bills: &[Bill]) -> Result<()> {
        write_records(&self.file_path(), bills)
    }
}

impl BillStorage for BillRepository {
    fn store_bill(&self, bill: &Bill) -> Result<()> {
        let mut bills = self.read_all()?;
        bills.push(bill.clone());
        self.write_all(&bills)
    }

    fn get_bill(&self, bill_id: &str) -> Result<Option<Bill>> {
        Ok(self.read_all()?.into_iter().find(|bill| bill.id == bill_id))
    }

    fn list_bills(&self) -> Result<Vec<Bill>> {
        self.read_all()
    }

    fn update_bill(&self, bill: &Bill) -> Result<()> {
        let mut bills = self.read_all()?;
        let position = bills
            .iter()
            .position(|stored| stored.id == bill.id)
            .ok_or_else(|| anyhow!("Bill not found: {}", bill.id))?;
        bills[position] = bill.clone();
        self.write_all(&bills)
    }

    fn delete_bill(&self, bill_id: &str) -> Result<bool> {
        let mut bills = self.read_all()?;
        let before = bills.len();
        bills.retain(|bill| bill.id != bill_id);
        if bills.len() == before {
            return Ok(false);
        }
        self.write_all(&bills)?;
        Ok(true)
    }
}
