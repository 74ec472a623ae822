use rust_decimal::Decimal;

use crate::domain::models::income::Income;

#[derive(Debug, Clone)]
pub struct CreateIncomeCommand {
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone)]
pub struct UpdateIncomeCommand {
    pub income_id: String,
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone)]
pub struct DeleteIncomeCommand {
    pub income_id: String,
}

#[derive(Debug, Clone)]
pub struct IncomeResult {
    pub income: Income,
}
