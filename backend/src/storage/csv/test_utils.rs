//! Test utilities for the CSV storage backend.
//!
//! Provides a temporary data directory with every repository wired over it,
//! plus small factories for domain fixtures. Cleanup is RAII-based: the
//! directory disappears when the helper drops, even if a test panics.

use std::sync::Arc;

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use tempfile::TempDir;

use super::{
    BillRepository, CsvConnection, ExpenseRepository, GoalRepository, IncomeRepository,
    PurchaseRepository, WeekRepository,
};
use crate::domain::models::bill::Bill;
use crate::domain::models::expense::{Expense, SAVINGS_EXPENSE_NAME};
use crate::domain::models::goal::Goal;
use crate::domain::models::income::Income;
use crate::domain::models::purchase::Purchase;
use crate::domain::models::week::Week;

/// Every repository over one temporary connection.
pub struct TestHelper {
    pub connection: Arc<CsvConnection>,
    pub week_repo: WeekRepository,
    pub expense_repo: ExpenseRepository,
    pub purchase_repo: PurchaseRepository,
    pub goal_repo: GoalRepository,
    pub bill_repo: BillRepository,
    pub income_repo: IncomeRepository,
    _temp_dir: TempDir,
}

impl TestHelper {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = Arc::new(CsvConnection::new(temp_dir.path())?);
        Ok(Self {
            week_repo: WeekRepository::new((*connection).clone()),
            expense_repo: ExpenseRepository::new((*connection).clone()),
            purchase_repo: PurchaseRepository::new((*connection).clone()),
            goal_repo: GoalRepository::new((*connection).clone()),
            bill_repo: BillRepository::new((*connection).clone()),
            income_repo: IncomeRepository::new((*connection).clone()),
            connection,
            _temp_dir: temp_dir,
        })
    }
}

/// A week starting on `start` (expected to be a Monday) with seven
/// consecutive dates.
pub fn week_of(year: i32, month: u32, week_number: u32, start: NaiveDate) -> Week {
    let dates = (0..7).map(|day| start + Duration::days(day)).collect();
    Week::new(year, month, week_number, dates)
}

pub fn sample_expense(name: &str, allocated: i64) -> Expense {
    Expense {
        id: Expense::generate_id(),
        name: name.to_string(),
        allocated: Decimal::from(allocated),
        spent: Decimal::ZERO,
        is_overspent: false,
        is_savings: false,
    }
}

pub fn sample_savings_expense(allocated: i64) -> Expense {
    Expense {
        id: Expense::generate_id(),
        name: SAVINGS_EXPENSE_NAME.to_string(),
        allocated: Decimal::from(allocated),
        spent: Decimal::ZERO,
        is_overspent: false,
        is_savings: true,
    }
}

pub fn sample_purchase(expense_id: &str, year: i32, month: u32, day: u32, spent: i64) -> Purchase {
    Purchase {
        id: Purchase::generate_id(),
        expense_id: expense_id.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid date"),
        spent: Decimal::from(spent),
    }
}

pub fn sample_goal(name: &str, cost: i64, allocated: i64, saved: i64, is_main_goal: bool) -> Goal {
    Goal {
        id: Goal::generate_id(),
        name: name.to_string(),
        cost: Decimal::from(cost),
        allocated: Decimal::from(allocated),
        saved: Decimal::from(saved),
        is_fulfilled: false,
        is_main_goal,
    }
}

pub fn sample_bill(name: &str, cost: i64, is_paid: bool) -> Bill {
    Bill {
        id: Bill::generate_id(),
        name: name.to_string(),
        cost: Decimal::from(cost),
        is_paid,
    }
}

pub fn sample_income(name: &str, amount: i64) -> Income {
    Income {
        id: Income::generate_id(),
        name: name.to_string(),
        amount: Decimal::from(amount),
    }
}
