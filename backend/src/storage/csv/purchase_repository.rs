//! # CSV Purchase Repository
//!
//! Stores the purchase ledger in `purchases.csv`. The ledger only ever
//! describes the current week; the rollover clears the whole file through
//! [`delete_all_purchases`](crate::storage::PurchaseStorage::delete_all_purchases).

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use super::connection::CsvConnection;
use super::{read_records, write_records};
use crate::domain::models::purchase::Purchase;
use crate::storage::traits::PurchaseStorage;

/// CSV-backed purchase repository.
#[derive(Clone)]
pub struct PurchaseRepository {
    connection: CsvConnection,
}

impl PurchaseRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn file_path(&self) -> PathBuf {
        self.connection.data_file("purchases.csv")
    }

    fn read_all(&self) -> Result<Vec<Purchase>> {
        read_records(&self.file_path())
    }

    fn write_all(&self, purchases: &[Purchase]) -> Result<()> {
        write_records(&self.file_path(), purchases)
    }
}

impl PurchaseStorage for PurchaseRepository {
    fn store_purchase(&self, purchase: &Purchase) -> Result<()> {
        let mut purchases = self.read_all()?;
        purchases.push(purchase.clone());
        self.write_all(&purchases)
    }

    fn get_purchase(&self, purchase_id: &str) -> Result<Option<Purchase>> {
        Ok(self
            .read_all()?
            .into_iter()
            .find(|purchase| purchase.id == purchase_id))
    }

    fn list_purchases(&self) -> Result<Vec<Purchase>> {
        self.read_all()
    }

    fn list_purchases_for_expense(&self, expense_id: &str) -> Result<Vec<Purchase>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|purchase| purchase.expense_id == expense_id)
            .collect())
    }

    fn update_purchase(&self, purchase: &Purchase) -> Result<()> {
        let mut purchases = self.read_all()?;
        let position = purchases
            .iter()
            .position(|stored| stored.id == purchase.id)
            .ok_or_else(|| anyhow!("Purchase not found: {}", purchase.id))?;
        purchases[position] = purchase.clone();
        self.write_all(&purchases)
    }

    fn delete_purchase(&self, purchase_id: &str) -> Result<bool> {
        let mut purchases = self.read_all()?;
        let before = purchases.len();
        purchases.retain(|purchase| purchase.id != purchase_id);
        if purchases.len() == before {
            return Ok(false);
        }
        self.write_all(&purchases)?;
        Ok(true)
    }

    fn delete_purchases_for_expense(&self, expense_id: &str) -> Result<u32> {
        let mut purchases = self.read_all()?;
        let before = purchases.len();
        purchases.retain(|purchase| purchase.expense_id != expense_id);
        let deleted = (before - purchases.len()) as u32;
        if deleted > 0 {
            self.write_all(&purchases)?;
        }
        Ok(deleted)
    }

    fn delete_all_purchases(&self) -> Result<u32> {
        let deleted = self.read_all()?.len() as u32;
        self.write_all(&[])?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::{sample_purchase, TestHelper};

    #[test]
    fn test_list_purchases_for_expense() {
        let helper = TestHelper::new().expect("Failed to create test helper");

        let groceries = sample_purchase("expense::groceries", 2024, 3, 12, 25);
        let fuel = sample_purchase("expense::fuel", 2024, 3, 13, 40);
        helper
            .purchase_repo
            .store_purchase(&groceries)
            .expect("Failed to store purchase");
        helper
            .purchase_repo
            .store_purchase(&fuel)
            .expect("Failed to store purchase");

        let for_groceries = helper
            .purchase_repo
            .list_purchases_for_expense("expense::groceries")
            .expect("Failed to list purchases");
        assert_eq!(for_groceries.len(), 1);
        assert_eq!(for_groceries[0].id, groceries.id);
    }

    #[test]
    fn test_delete_purchases_for_expense() {
        let helper = TestHelper::new().expect("Failed to create test helper");

        for day in 11..=13 {
            helper
                .purchase_repo
                .store_purchase(&sample_purchase("expense::groceries", 2024, 3, day, 10))
                .expect("Failed to store purchase");
        }
        helper
            .purchase_repo
            .store_purchase(&sample_purchase("expense::fuel", 2024, 3, 14, 40))
            .expect("Failed to store purchase");

        let deleted = helper
            .purchase_repo
            .delete_purchases_for_expense("expense::groceries")
            .expect("Failed to delete purchases");
        assert_eq!(deleted, 3);
        assert_eq!(
            helper
                .purchase_repo
                .list_purchases()
                .expect("Failed to list purchases")
                .len(),
            1
        );
    }

    #[test]
    fn test_delete_all_purchases() {
        let helper = TestHelper::new().expect("Failed to create test helper");

        for day in 11..=14 {
            helper
                .purchase_repo
                .store_purchase(&sample_purchase("expense::groceries", 2024, 3, day, 10))
                .expect("Failed to store purchase");
        }

        let deleted = helper
            .purchase_repo
            .delete_all_purchases()
            .expect("Failed to delete purchases");
        assert_eq!(deleted, 4);
        assert!(helper
            .purchase_repo
            .list_purchases()
            .expect("Failed to list purchases")
            .is_empty());
    }
}
