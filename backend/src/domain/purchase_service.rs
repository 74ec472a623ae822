//! Purchase ledger management.
//!
//! Every mutation refreshes the owning expense's `spent` and `is_overspent`
//! so the category totals never lag the ledger.

use std::sync::Arc;

use anyhow::Result;
use log::info;
use rust_decimal::Decimal;

use crate::domain::commands::purchases::{
    CreatePurchaseCommand, DeletePurchaseCommand, PurchaseMutationResult, UpdatePurchaseCommand,
};
use crate::domain::errors::NotFoundError;
use crate::domain::models::expense::Expense;
use crate::domain::models::purchase::{Purchase, PurchaseValidationError};
use crate::storage::csv::{CsvConnection, ExpenseRepository, PurchaseRepository};
use crate::storage::{ExpenseStorage, PurchaseStorage};

/// Service for recording purchases against budget categories.
#[derive(Clone)]
pub struct PurchaseService {
    purchase_repository: PurchaseRepository,
    expense_repository: ExpenseRepository,
}

impl PurchaseService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            purchase_repository: PurchaseRepository::new((*connection).clone()),
            expense_repository: ExpenseRepository::new((*connection).clone()),
        }
    }

    pub fn create_purchase(&self, command: CreatePurchaseCommand) -> Result<PurchaseMutationResult> {
        if self
            .expense_repository
            .get_expense(&command.expense_id)?
            .is_none()
        {
            return Err(NotFoundError::Expense(command.expense_id).into());
        }
        if command.spent < Decimal::ZERO {
            return Err(PurchaseValidationError::NegativeSpent.into());
        }

        let purchase = Purchase {
            id: Purchase::generate_id(),
            expense_id: command.expense_id,
            date: command.date,
            spent: command.spent,
        };
        self.purchase_repository.store_purchase(&purchase)?;
        let expense = self.refresh_expense_totals(&purchase.expense_id)?;
        info!(
            "Recorded purchase of {} against {}",
            purchase.spent, expense.name
        );
        Ok(PurchaseMutationResult { purchase, expense })
    }

    pub fn update_purchase(&self, command: UpdatePurchaseCommand) -> Result<PurchaseMutationResult> {
        let mut purchase = self
            .purchase_repository
            .get_purchase(&command.purchase_id)?
            .ok_or_else(|| NotFoundError::Purchase(command.purchase_id.clone()))?;
        if command.spent < Decimal::ZERO {
            return Err(PurchaseValidationError::NegativeSpent.into());
        }

        purchase.date = command.date;
        purchase.spent = command.spent;
        self.purchase_repository.update_purchase(&purchase)?;
        let expense = self.refresh_expense_totals(&purchase.expense_id)?;
        Ok(PurchaseMutationResult { purchase, expense })
    }

    pub fn delete_purchase(&self, command: DeletePurchaseCommand) -> Result<PurchaseMutationResult> {
        let purchase = self
            .purchase_repository
            .get_purchase(&command.purchase_id)?
            .ok_or_else(|| NotFoundError::Purchase(command.purchase_id.clone()))?;
        self.purchase_repository.delete_purchase(&purchase.id)?;
        let expense = self.refresh_expense_totals(&purchase.expense_id)?;
        Ok(PurchaseMutationResult { purchase, expense })
    }

    /// Recompute the owning expense's totals from its surviving purchases.
    fn refresh_expense_totals(&self, expense_id: &str) -> Result<Expense> {
        let mut expense = self
            .expense_repository
            .get_expense(expense_id)?
            .ok_or_else(|| NotFoundError::Expense(expense_id.to_string()))?;
        let spent: Decimal = self
            .purchase_repository
            .list_purchases_for_expense(expense_id)?
            .iter()
            .map(|purchase| purchase.spent)
            .sum();
        expense.spent = spent;
        expense.is_overspent = spent > expense.allocated;
        self.expense_repository.update_expense(&expense)?;
        Ok(expense)
    }
}
