use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label shown when the main goal has no weekly allocation and a completion
/// date cannot be projected.
pub const NO_ALLOCATION_LABEL: &str = "No allocated amount";

/// Derived budget figures for the settings views.
///
/// All amounts are monthly unless the field name says otherwise. Weekly
/// figures are rounded down to the nearest 10 currency units before they
/// reach this struct; nothing here re-rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Income minus bills. Negative means the budget is over-committed.
    pub available_monthly: Decimal,
    /// Even weekly distribution of the yearly available amount, floored to
    /// the nearest 10.
    pub available_weekly: Decimal,
    /// The current week's allocated total.
    pub currently_allocated: Decimal,
    /// `available_weekly` minus `currently_allocated`.
    pub remaining_available: Decimal,
    /// The current week's spent total.
    pub currently_spent: Decimal,
    /// Spend summed over this month's weeks before the current one.
    pub previously_spent: Decimal,
    pub income_monthly: Decimal,
    pub bills_monthly: Decimal,
    /// Suggested weekly savings (10% of income), floored to the nearest 10.
    pub recommended_savings: Decimal,
}

/// The current-week read model for the home view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeek {
    /// Today's date (ISO 8601, YYYY-MM-DD).
    pub today: String,
    pub week_number: u32,
    /// Label like "1st of January - 7th of January".
    pub date_range: String,
    /// The seven dates of the week, Monday through Sunday (ISO 8601).
    pub dates_in_week: Vec<String>,
    /// Projected completion label for the main goal, or
    /// [`NO_ALLOCATION_LABEL`] when nothing is allocated to it.
    pub goal_achieved_by: String,
}
