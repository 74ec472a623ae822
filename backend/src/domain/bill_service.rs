//! Monthly bill management.

use std::sync::Arc;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::domain::commands::bills::{
    BillResult, CreateBillCommand, DeleteBillCommand, SetBillPaidCommand, UpdateBillCommand,
};
use crate::domain::errors::NotFoundError;
use crate::domain::models::bill::{Bill, BillValidationError};
use crate::storage::csv::{BillRepository, CsvConnection};
use crate::storage::BillStorage;

/// Service for managing fixed monthly bills.
#[derive(Clone)]
pub struct BillService {
    bill_repository: BillRepository,
}

impl BillService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self {
            bill_repository: BillRepository::new((*connection).clone()),
        }
    }

    pub fn create_bill(&self, command: CreateBillCommand) -> Result<BillResult> {
        let name = command.name.trim().to_string();
        validate(&name, command.cost)?;

        let bill = Bill {
            id: Bill::generate_id(),
            name,
            cost: command.cost,
            is_paid: false,
        };
        self.bill_repository.store_bill(&bill)?;
        Ok(BillResult { bill })
    }

    pub fn update_bill(&self, command: UpdateBillCommand) -> Result<BillResult> {
        let mut bill = self
            .bill_repository
            .get_bill(&command.bill_id)?
            .ok_or_else(|| NotFoundError::Bill(command.bill_id.clone()))?;

        let name = command.name.trim().to_string();
        validate(&name, command.cost)?;

        bill.name = name;
        bill.cost = command.cost;
        self.bill_repository.update_bill(&bill)?;
        Ok(BillResult { bill })
    }

    /// The settings-page paid checkbox.
    pub fn set_bill_paid(&self, command: SetBillPaidCommand) -> Result<BillResult> {
        let mut bill = self
            .bill_repository
            .get_bill(&command.bill_id)?
            .ok_or_else(|| NotFoundError::Bill(command.bill_id.clone()))?;
        bill.is_paid = command.is_paid;
        self.bill_repository.update_bill(&bill)?;
        Ok(BillResult { bill })
    }

    pub fn delete_bill(&self, command: DeleteBillCommand) -> Result<()> {
        if !self.bill_repository.delete_bill(&command.bill_id)? {
            return Err(NotFoundError::Bill(command.bill_id).into());
        }
        Ok(())
    }

    pub fn list_bills(&self) -> Result<Vec<Bill>> {
        self.bill_repository.list_bills()
    }
}

fn validate(name: &str, cost: Decimal) -> Result<()> {
    if name.is_empty() {
        return Err(BillValidationError::EmptyName.into());
    }
    if name.len() > 100 {
        return Err(BillValidationError::NameTooLong.into());
    }
    if cost < Decimal::ZERO {
        return Err(BillValidationError::NegativeCost.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestHelper;

    #[test]
    fn test_bill_lifecycle() {
        let helper = TestHelper::new().expect("Failed to create test helper");
        let service = BillService::new(helper.connection.clone());

        let bill = service
            .create_bill(CreateBillCommand {
                name: "Rent".to_string(),
                cost: Decimal::from(800),
            })
            .expect("Failed to create bill")
            .bill;
        assert!(!bill.is_paid);

        let paid = service
            .set_bill_paid(SetBillPaidCommand {
                bill_id: bill.id.clone(),
                is_paid: true,
            })
            .expect("Failed to mark paid")
            .bill;
        assert!(paid.is_paid);

        let updated = service
            .update_bill(UpdateBillCommand {
                bill_id: bill.id.clone(),
                name: "Rent".to_string(),
                cost: Decimal::from(850),
            })
            .expect("Failed to update bill")
            .bill;
        assert_eq!(updated.cost, Decimal::from(850));
        // The paid flag survives a cost edit.
        assert!(updated.is_paid);

        service
            .delete_bill(DeleteBillCommand {
                bill_id: bill.id.clone(),
            })
            .expect("Failed to delete bill");
        assert!(service.list_bills().expect("list failed").is_empty());
    }

    #[test]
    fn test_unknown_bill_is_a_not_found_error() {
        let helper = TestHelper::new().expect("Failed to create test helper");
        let service = BillService::new(helper.connection.clone());

        let error = service
            .set_bill_paid(SetBillPaidCommand {
                bill_id: "bill::missing".to_string(),
                is_paid: true,
            })
            .expect_err("Unknown bill should fail");
        assert!(matches!(
            error.downcast_ref::<NotFoundError>(),
            Some(NotFoundError::Bill(_))
        ));
    }
}
