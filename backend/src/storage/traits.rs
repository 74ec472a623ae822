//! # Storage Traits
//!
//! Per-entity storage abstractions so the domain layer works against any
//! persistence backend without modification. All operations are synchronous;
//! each trait exposes exactly the lookups the domain needs: weeks by
//! (year, week number) and by the current flag, expenses by name and by the
//! savings flag, goals by the main flag, bills and incomes as plain lists,
//! purchases by owning expense plus the global sweep.

use anyhow::Result;

use crate::domain::models::bill::Bill;
use crate::domain::models::expense::Expense;
use crate::domain::models::goal::Goal;
use crate::domain::models::income::Income;
use crate::domain::models::purchase::Purchase;
use crate::domain::models::week::Week;

/// Storage interface for generated calendar weeks.
pub trait WeekStorage: Send + Sync {
    /// Store a newly generated week.
    fn store_week(&self, week: &Week) -> Result<()>;

    /// Look a week up by its (year, week number) key.
    fn get_week(&self, year: i32, week_number: u32) -> Result<Option<Week>>;

    /// The single week flagged as current, if any.
    fn get_current_week(&self) -> Result<Option<Week>>;

    /// Every stored week, in storage order.
    fn list_weeks(&self) -> Result<Vec<Week>>;

    /// All weeks attributed to the zero-based `month` of `year`.
    fn list_weeks_for_month(&self, year: i32, month: u32) -> Result<Vec<Week>>;

    /// Update an existing week, matched by id.
    fn update_week(&self, week: &Week) -> Result<()>;

    /// Clear every `is_current_week` flag, then set it on the week with the
    /// given key. The whole swap happens in one storage write.
    fn set_exclusive_current(&self, year: i32, week_number: u32) -> Result<()>;
}

/// Storage interface for budget categories.
pub trait ExpenseStorage: Send + Sync {
    fn store_expense(&self, expense: &Expense) -> Result<()>;

    fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>>;

    /// Case-sensitive name lookup.
    fn get_expense_by_name(&self, name: &str) -> Result<Option<Expense>>;

    /// The single expense flagged `is_savings`, if any.
    fn get_savings_expense(&self) -> Result<Option<Expense>>;

    fn list_expenses(&self) -> Result<Vec<Expense>>;

    fn update_expense(&self, expense: &Expense) -> Result<()>;

    /// Delete an expense by id. Returns whether it existed.
    fn delete_expense(&self, expense_id: &str) -> Result<bool>;
}

/// Storage interface for the purchase ledger.
pub trait PurchaseStorage: Send + Sync {
    fn store_purchase(&self, purchase: &Purchase) -> Result<()>;

    fn get_purchase(&self, purchase_id: &str) -> Result<Option<Purchase>>;

    fn list_purchases(&self) -> Result<Vec<Purchase>>;

    fn list_purchases_for_expense(&self, expense_id: &str) -> Result<Vec<Purchase>>;

    fn update_purchase(&self, purchase: &Purchase) -> Result<()>;

    /// Delete a purchase by id. Returns whether it existed.
    fn delete_purchase(&self, purchase_id: &str) -> Result<bool>;

    /// Delete every purchase owned by `expense_id`. Returns the number
    /// removed.
    fn delete_purchases_for_expense(&self, expense_id: &str) -> Result<u32>;

    /// Delete the entire ledger. Returns the number removed.
    fn delete_all_purchases(&self) -> Result<u32>;
}

/// Storage interface for savings goals.
pub trait GoalStorage: Send + Sync {
    fn store_goal(&self, goal: &Goal) -> Result<()>;

    fn get_goal(&self, goal_id: &str) -> Result<Option<Goal>>;

    /// The single goal flagged `is_main_goal`, if any.
    fn get_main_goal(&self) -> Result<Option<Goal>>;

    fn list_goals(&self) -> Result<Vec<Goal>>;

    fn update_goal(&self, goal: &Goal) -> Result<()>;

    /// Delete a goal by id. Returns whether it existed.
    fn delete_goal(&self, goal_id: &str) -> Result<bool>;

    /// Clear every `is_main_goal` flag, then set it on the given goal. The
    /// whole swap happens in one storage write.
    fn set_exclusive_main(&self, goal_id: &str) -> Result<()>;
}

/// Storage interface for monthly bills.
pub trait BillStorage: Send + Sync {
    fn store_bill(&self, bill: &Bill) -> Result<()>;

    fn get_bill(&self, bill_id: &str) -> Result<Option<Bill>>;

    fn list_bills(&self) -> Result<Vec<Bill>>;

    fn update_bill(&self, bill: &Bill) -> Result<()>;

    /// Delete a bill by id. Returns whether it existed.
    fn delete_bill(&self, bill_id: &str) -> Result<bool>;
}

/// Storage interface for income sources.
pub trait IncomeStorage: Send + Sync {
    fn store_income(&self, income: &Income) -> Result<()>;

    fn get_income(&self, income_id: &str) -> Result<Option<Income>>;

    fn list_incomes(&self) -> Result<Vec<Income>>;

    fn update_income(&self, income: &Income) -> Result<()>;

    /// Delete an income by id. Returns whether it existed.
    fn delete_income(&self, income_id: &str) -> Result<bool>;
}
