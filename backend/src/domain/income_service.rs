//! Income source management.

use std::sync::Arc;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::domain::commands::incomes::{
    CreateIncomeCommand, DeleteIncomeCommand, IncomeResult, UpdateIncomeCommand,
};
use crate::domain::errors::NotFoundError;
use crate::domain::models::income::{Income, IncomeValidationError};
use crate::storage::csv::{CsvConnection, IncomeRepository};
use crate::storage::IncomeStorage;

/// Service for managing income sources.
#[derive(Clone)]
pub struct IncomeService {
    income_repository: IncomeRepository,
}

impl IncomeService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            income_repository: IncomeRepository::new((*connection).clone()),
        }
    }

    pub fn create_income(&self, command: CreateIncomeCommand) -> Result<IncomeResult> {
        let name = command.name.trim().to_string();
        validate(&name, command.amount)?;

        let income = Income {
            id: Income::generate_id(),
            name,
            amount: command.amount,
        };
        self.income_repository.store_income(&income)?;
        Ok(IncomeResult { income })
    }

    pub fn update_income(&self, command: UpdateIncomeCommand) -> Result<IncomeResult> {
        let mut income = self
            .income_repository
            .get_income(&command.income_id)?
            .ok_or_else(|| NotFoundError::Income(command.income_id.clone()))?;

        let name = command.name.trim().to_string();
        validate(&name, command.amount)?;

        income.name = name;
        income.amount = command.amount;
        self.income_repository.update_income(&income)?;
        Ok(IncomeResult { income })
    }

    pub fn delete_income(&self, command: DeleteIncomeCommand) -> Result<()> {
        if !self.income_repository.delete_income(&command.income_id)? {
            return Err(NotFoundError::Income(command.income_id).into());
        }
        Ok(())
    }

    pub fn list_incomes(&self) -> Result<Vec<Income>> {
        self.income_repository.list_incomes()
    }
}

fn validate(name: &str, amount: Decimal) -> Result<()> {
    if name.is_empty() {
        return Err(IncomeValidationError::EmptyName.into());
    }
    if name.len() > 100 {
        return Err(IncomeValidationError::NameTooLong.into());
    }
    if amount < Decimal::ZERO {
        return Err(IncomeValidationError::NegativeAmount.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestHelper;

    #[test]
    fn test_income_lifecycle() {
        let helper = TestHelper::new().expect("Failed to create test helper");
        let service = IncomeService::new(helper.connection.clone());

        let income = service
            .create_income(CreateIncomeCommand {
                name: "Salary".to_string(),
                amount: Decimal::from(3000),
            })
            .expect("Failed to create income")
            .income;

        let updated = service
            .update_income(UpdateIncomeCommand {
                income_id: income.id.clone(),
                name: "Salary".to_string(),
                amount: Decimal::from(3200),
            })
            .expect("Failed to update income")
            .income;
        assert_eq!(updated.amount, Decimal::from(3200));

        service
            .delete_income(DeleteIncomeCommand {
                income_id: income.id,
            })
            .expect("Failed to delete income");
        assert!(service.list_incomes().expect("list failed").is_empty());
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let helper = TestHelper::new().expect("Failed to create test helper");
        let service = IncomeService::new(helper.connection.clone());

        let error = service
            .create_income(CreateIncomeCommand {
                name: "Salary".to_string(),
                amount: Decimal::from(-1),
            })
            .expect_err("Negative amount should fail");
        assert!(matches!(
            error.downcast_ref::<IncomeValidationError>(),
            Some(IncomeValidationError::NegativeAmount)
        ));
    }
}
