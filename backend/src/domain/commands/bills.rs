use rust_decimal::Decimal;

use crate::domain::models::bill::Bill;

#[derive(Debug, Clone)]
pub struct CreateBillCommand {
    pub name: String,
    pub cost: Decimal,
}

#[derive(Debug, Clone)]
pub struct UpdateBillCommand {
    pub bill_id: String,
    pub name: String,
    pub cost: Decimal,
}

/// The settings-page paid checkbox.
#[derive(Debug, Clone)]
pub struct SetBillPaidCommand {
    pub bill_id: String,
    pub is_paid: bool,
}

#[derive(Debug, Clone)]
pub struct DeleteBillCommand {
    pub bill_id: String,
}

#[derive(Debug, Clone)]
pub struct BillResult {
    pub bill: Bill,
}
