use rust_decimal::Decimal;

use crate::domain::models::expense::Expense;
use crate::domain::models::purchase::Purchase;

#[derive(Debug, Clone)]
pub struct CreateExpenseCommand {
    pub name: String,
    pub allocated: Decimal,
}

#[derive(Debug, Clone)]
pub struct CreateExpenseResult {
    pub expense: Expense,
}

#[derive(Debug, Clone)]
pub struct UpdateExpenseCommand {
    pub expense_id: String,
    pub name: String,
    pub allocated: Decimal,
}

#[derive(Debug, Clone)]
pub struct UpdateExpenseResult {
    pub expense: Expense,
}

#[derive(Debug, Clone)]
pub struct DeleteExpenseCommand {
    pub expense_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteExpenseResult {
    /// Purchases removed along with the expense.
    pub deleted_purchases: u32,
}

#[derive(Debug, Clone)]
pub struct ExpenseDetailQuery {
    pub expense_id: String,
}

/// Detail view: the expense with `spent`/`is_overspent` freshly recomputed
/// from its purchases.
#[derive(Debug, Clone)]
pub struct ExpenseDetailResult {
    pub expense: Expense,
    pub purchases: Vec<Purchase>,
}
