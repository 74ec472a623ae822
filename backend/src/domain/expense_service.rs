//! Budget category management.
//!
//! Handles expense CRUD, the savings pseudo-category bootstrap, and the
//! detail view's recomputation of `spent`/`is_overspent` from the purchase
//! ledger. Deleting an expense takes its purchases with it.

use std::sync::Arc;

use anyhow::Result;
use log::info;
use rust_decimal::Decimal;

use crate::domain::commands::expenses::{
    CreateExpenseCommand, CreateExpenseResult, DeleteExpenseCommand, DeleteExpenseResult,
    ExpenseDetailQuery, ExpenseDetailResult, UpdateExpenseCommand, UpdateExpenseResult,
};
use crate::domain::errors::NotFoundError;
use crate::domain::models::expense::{Expense, ExpenseValidationError, SAVINGS_EXPENSE_NAME};
use crate::storage::csv::{CsvConnection, ExpenseRepository, PurchaseRepository};
use crate::storage::{ExpenseStorage, PurchaseStorage};

/// Service for managing budget categories.
#[derive(Clone)]
pub struct ExpenseService {
    expense_repository: ExpenseRepository,
    purchase_repository: PurchaseRepository,
}

impl ExpenseService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            expense_repository: ExpenseRepository::new((*connection).clone()),
            purchase_repository: PurchaseRepository::new((*connection).clone()),
        }
    }

    /// Create a regular budget category.
    pub fn create_expense(&self, command: CreateExpenseCommand) -> Result<CreateExpenseResult> {
        let name = command.name.trim().to_string();
        self.validate_name(&name, None)?;
        if command.allocated < Decimal::ZERO {
            return Err(ExpenseValidationError::NegativeAllocation.into());
        }

        let expense = Expense {
            id: Expense::generate_id(),
            name,
            allocated: command.allocated,
            spent: Decimal::ZERO,
            is_overspent: false,
            is_savings: false,
        };
        self.expense_repository.store_expense(&expense)?;
        info!("Created expense {} ({})", expense.name, expense.id);
        Ok(CreateExpenseResult { expense })
    }

    /// Create the single savings pseudo-category. Fails when one exists.
    pub fn create_savings_expense(&self, allocated: Decimal) -> Result<CreateExpenseResult> {
        if self.expense_repository.get_savings_expense()?.is_some() {
            return Err(ExpenseValidationError::SavingsAlreadyExists.into());
        }
        if allocated < Decimal::ZERO {
            return Err(ExpenseValidationError::NegativeAllocation.into());
        }

        let expense = Expense {
            id: Expense::generate_id(),
            name: SAVINGS_EXPENSE_NAME.to_string(),
            allocated,
            spent: Decimal::ZERO,
            is_overspent: false,
            is_savings: true,
        };
        self.expense_repository.store_expense(&expense)?;
        info!("Created savings category with allocation {}", allocated);
        Ok(CreateExpenseResult { expense })
    }

    /// Rename and re-allocate a category.
    pub fn update_expense(&self, command: UpdateExpenseCommand) -> Result<UpdateExpenseResult> {
        let mut expense = self
            .expense_repository
            .get_expense(&command.expense_id)?
            .ok_or_else(|| NotFoundError::Expense(command.expense_id.clone()))?;

        let name = command.name.trim().to_string();
        if !expense.is_savings {
            self.validate_name(&name, Some(&expense.id))?;
        }
        if command.allocated < Decimal::ZERO {
            return Err(ExpenseValidationError::NegativeAllocation.into());
        }

        if !expense.is_savings {
            expense.name = name;
        }
        expense.allocated = command.allocated;
        expense.is_overspent = expense.spent > expense.allocated;
        self.expense_repository.update_expense(&expense)?;
        Ok(UpdateExpenseResult { expense })
    }

    /// Delete a category and every purchase recorded against it.
    pub fn delete_expense(&self, command: DeleteExpenseCommand) -> Result<DeleteExpenseResult> {
        if self
            .expense_repository
            .get_expense(&command.expense_id)?
            .is_none()
        {
            return Err(NotFoundError::Expense(command.expense_id).into());
        }
        let deleted_purchases = self
            .purchase_repository
            .delete_purchases_for_expense(&command.expense_id)?;
        self.expense_repository.delete_expense(&command.expense_id)?;
        info!(
            "Deleted expense {} and {} purchases",
            command.expense_id, deleted_purchases
        );
        Ok(DeleteExpenseResult { deleted_purchases })
    }

    /// Detail view: the expense with `spent` and `is_overspent` recomputed
    /// from its purchases, plus the purchases themselves.
    pub fn expense_detail(&self, query: ExpenseDetailQuery) -> Result<ExpenseDetailResult> {
        let mut expense = self
            .expense_repository
            .get_expense(&query.expense_id)?
            .ok_or_else(|| NotFoundError::Expense(query.expense_id.clone()))?;
        let purchases = self
            .purchase_repository
            .list_purchases_for_expense(&query.expense_id)?;

        let spent: Decimal = purchases.iter().map(|purchase| purchase.spent).sum();
        expense.spent = spent;
        expense.is_overspent = spent > expense.allocated;
        self.expense_repository.update_expense(&expense)?;

        Ok(ExpenseDetailResult { expense, purchases })
    }

    /// Every category, savings included.
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.expense_repository.list_expenses()
    }

    /// The home-page list: every category except savings.
    pub fn list_budget_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self
            .expense_repository
            .list_expenses()?
            .into_iter()
            .filter(|expense| !expense.is_savings)
            .collect())
    }

    pub fn savings_expense(&self) -> Result<Option<Expense>> {
        self.expense_repository.get_savings_expense()
    }

    fn validate_name(&self, name: &str, own_id: Option<&str>) -> Result<()> {
        if name.is_empty() {
            return Err(ExpenseValidationError::EmptyName.into());
        }
        if name.len() > 100 {
            return Err(ExpenseValidationError::NameTooLong.into());
        }
        if name.eq_ignore_ascii_case(SAVINGS_EXPENSE_NAME) {
            return Err(ExpenseValidationError::ReservedSavingsName.into());
        }
        if let Some(existing) = self.expense_repository.get_expense_by_name(name)? {
            if own_id != Some(existing.id.as_str()) {
                return Err(ExpenseValidationError::DuplicateName.into());
            }
        }
        Ok(())
    }
}
