use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::models::expense::Expense;
use crate::domain::models::purchase::Purchase;

#[derive(Debug, Clone)]
pub struct CreatePurchaseCommand {
    pub expense_id: String,
    pub date: NaiveDate,
    pub spent: Decimal,
}

#[derive(Debug, Clone)]
pub struct UpdatePurchaseCommand {
    pub purchase_id: String,
    pub date: NaiveDate,
    pub spent: Decimal,
}

#[derive(Debug, Clone)]
pub struct DeletePurchaseCommand {
    pub purchase_id: String,
}

/// Result of any purchase mutation: the purchase involved plus the owning
/// expense with refreshed totals.
#[derive(Debug, Clone)]
pub struct PurchaseMutationResult {
    pub purchase: Purchase,
    pub expense: Expense,
}
