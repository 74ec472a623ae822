//! Budget derivation for the settings views.
//!
//! Read-mostly: sums income and bills, spreads the monthly surplus evenly
//! across the year, and reports the current week's position against it.
//! Weekly figures are floored to the nearest 10 currency units, a coarse
//! presentation rule applied on decimals so no float drift can leak into
//! the rounding.

use std::sync::Arc;

use anyhow::Result;
use chrono::Datelike;
use log::debug;
use rust_decimal::Decimal;

use shared::BudgetSummary;

use crate::domain::dates;
use crate::domain::errors::NotFoundError;
use crate::domain::time::{Clock, SystemClock};
use crate::storage::csv::{BillRepository, CsvConnection, IncomeRepository, WeekRepository};
use crate::storage::{BillStorage, IncomeStorage, WeekStorage};

/// Share of income suggested for savings.
const SAVINGS_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1); // 0.1

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Service deriving the budget figures.
pub struct BudgetService {
    income_repository: IncomeRepository,
    bill_repository: BillRepository,
    week_repository: WeekRepository,
    clock: Arc<dyn Clock>,
}

impl BudgetService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self::with_clock(connection, Arc::new(SystemClock))
    }

    pub fn with_clock(connection: Arc<CsvConnection>, clock: Arc<dyn Clock>) -> Self {
        Self {
            income_repository: IncomeRepository::new((*connection).clone()),
            bill_repository: BillRepository::new((*connection).clone()),
            week_repository: WeekRepository::new((*connection).clone()),
            clock,
        }
    }

    /// Derive every figure of the budget read model.
    ///
    /// Requires a current week (fails with
    /// [`NotFoundError::NoCurrentWeek`] otherwise); a negative
    /// `available_monthly` is a valid over-budget signal, not an error.
    pub fn budget_summary(&self) -> Result<BudgetSummary> {
        let income_monthly: Decimal = self
            .income_repository
            .list_incomes()?
            .iter()
            .map(|income| income.amount)
            .sum();
        let bills_monthly: Decimal = self
            .bill_repository
            .list_bills()?
            .iter()
            .map(|bill| bill.cost)
            .sum();
        let available_monthly = income_monthly - bills_monthly;

        // Spread the monthly surplus evenly across the year's days, then
        // regroup by week.
        let days_in_year = Decimal::from(dates::days_in_year(self.clock.today().year()));
        let available_yearly = available_monthly * MONTHS_PER_YEAR;
        let available_daily = available_yearly / days_in_year;
        let available_weekly = floor_to_ten(available_daily * DAYS_PER_WEEK);

        let current_week = self
            .week_repository
            .get_current_week()?
            .ok_or(NotFoundError::NoCurrentWeek)?;
        let currently_allocated = current_week.allocated;
        let currently_spent = current_week.spent;
        let remaining_available = available_weekly - currently_allocated;

        // Trim the month's week list from the end until only the weeks
        // before the current one remain, then sum their spend.
        let mut weeks_in_month = current_week.weeks_in_month.clone();
        while weeks_in_month
            .last()
            .is_some_and(|last| *last >= current_week.week_number)
        {
            weeks_in_month.pop();
        }
        let mut previously_spent = Decimal::ZERO;
        for week_number in &weeks_in_month {
            if let Some(week) = self
                .week_repository
                .get_week(current_week.year, *week_number)?
            {
                previously_spent += week.spent;
            }
        }
        debug!(
            "💰 BUDGET: {} previous weeks this month, {} spent",
            weeks_in_month.len(),
            previously_spent
        );

        let recommended_savings =
            floor_to_ten(income_monthly * SAVINGS_RATE * MONTHS_PER_YEAR / days_in_year * DAYS_PER_WEEK);

        Ok(BudgetSummary {
            available_monthly,
            available_weekly,
            currently_allocated,
            remaining_available,
            currently_spent,
            previously_spent,
            income_monthly,
            bills_monthly,
            recommended_savings,
        })
    }
}

/// Round down to the nearest multiple of 10, also for negative amounts
/// (toward minus infinity, like the floor it is built on).
fn floor_to_ten(amount: Decimal) -> Decimal {
    (amount / Decimal::TEN).floor() * Decimal::TEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time::FixedClock;
    use crate::storage::csv::test_utils::{
        sample_bill, sample_income, week_of, TestHelper,
    };
    use chrono::NaiveDate;

    fn service_at(helper: &TestHelper, year: i32, month: u32, day: u32) -> BudgetService {
        let clock = FixedClock(NaiveDate::from_ymd_opt(year, month, day).unwrap());
        BudgetService::with_clock(helper.connection.clone(), Arc::new(clock))
    }

    /// Week 11 of March 2024 as the current week, with the month's full
    /// week list attached.
    fn seed_current_week(helper: &TestHelper, allocated: i64, spent: i64) {
        let mut week = week_of(2024, 2, 11, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        week.weeks_in_month = vec![9, 10, 11, 12, 13];
        week.allocated = Decimal::from(allocated);
        week.spent = Decimal::from(spent);
        helper.week_repo.store_week(&week).expect("Failed to store week");
        helper
            .week_repo
            .set_exclusive_current(2024, 11)
            .expect("Failed to set current");
    }

    #[test]
    fn test_budget_summary_derives_all_figures() {
        let helper = TestHelper::new().expect("Failed to create test helper");
        helper
            .income_repo
            .store_income(&sample_income("Salary", 3000))
            .expect("Failed to store income");
        helper
            .bill_repo
            .store_bill(&sample_bill("Rent", 500, false))
            .expect("Failed to store bill");
        helper
            .bill_repo
            .store_bill(&sample_bill("Power", 300, false))
            .expect("Failed to store bill");
        seed_current_week(&helper, 450, 120);

        let summary = service_at(&helper, 2024, 3, 15)
            .budget_summary()
            .expect("Failed to derive summary");

        assert_eq!(summary.income_monthly, Decimal::from(3000));
        assert_eq!(summary.bills_monthly, Decimal::from(800));
        assert_eq!(summary.available_monthly, Decimal::from(2200));
        // 2200 * 12 / 366 * 7 = 504.9…, floored to 500.
        assert_eq!(summary.available_weekly, Decimal::from(500));
        assert_eq!(summary.currently_allocated, Decimal::from(450));
        assert_eq!(summary.currently_spent, Decimal::from(120));
        assert_eq!(summary.remaining_available, Decimal::from(50));
        // 3000 * 0.1 * 12 / 366 * 7 = 68.8…, floored to 60.
        assert_eq!(summary.recommended_savings, Decimal::from(60));
    }

    #[test]
    fn test_previously_spent_sums_only_earlier_weeks_of_the_month() {
        let helper = TestHelper::new().expect("Failed to create test helper");
        seed_current_week(&helper, 0, 0);

        let mut week9 = week_of(2024, 2, 9, NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        week9.spent = Decimal::from(80);
        let mut week10 = week_of(2024, 2, 10, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        week10.spent = Decimal::from(180);
        let mut week12 = week_of(2024, 2, 12, NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
        week12.spent = Decimal::from(999);
        for week in [&week9, &week10, &week12] {
            helper.week_repo.store_week(week).expect("Failed to store week");
        }

        let summary = service_at(&helper, 2024, 3, 15)
            .budget_summary()
            .expect("Failed to derive summary");
        // Weeks 11 and later are trimmed; only 9 and 10 count.
        assert_eq!(summary.previously_spent, Decimal::from(260));
    }

    #[test]
    fn test_negative_available_is_reported_not_rejected() {
        let helper = TestHelper::new().expect("Failed to create test helper");
        helper
            .income_repo
            .store_income(&sample_income("Side job", 100))
            .expect("Failed to store income");
        helper
            .bill_repo
            .store_bill(&sample_bill("Rent", 500, false))
            .expect("Failed to store bill");
        seed_current_week(&helper, 0, 0);

        let summary = service_at(&helper, 2024, 3, 15)
            .budget_summary()
            .expect("Failed to derive summary");
        assert_eq!(summary.available_monthly, Decimal::from(-400));
        // -400 * 12 / 366 * 7 = -91.8…, floored away from zero to -100.
        assert_eq!(summary.available_weekly, Decimal::from(-100));
    }

    #[test]
    fn test_weekly_figures_are_multiples_of_ten_and_never_rounded_up() {
        let helper = TestHelper::new().expect("Failed to create test helper");
        seed_current_week(&helper, 0, 0);

        for (income, year_day) in [(1234, 15), (987, 16), (5000, 17)] {
            let helper_income = sample_income("Salary", income);
            helper
                .income_repo
                .store_income(&helper_income)
                .expect("Failed to store income");

            let summary = service_at(&helper, 2024, 3, year_day)
                .budget_summary()
                .expect("Failed to derive summary");

            for figure in [summary.available_weekly, summary.recommended_savings] {
                assert_eq!(figure % Decimal::TEN, Decimal::ZERO);
            }
            let exact_weekly =
                summary.available_monthly * Decimal::from(12) / Decimal::from(366) * Decimal::from(7);
            assert!(summary.available_weekly <= exact_weekly);

            helper
                .income_repo
                .delete_income(&helper_income.id)
                .expect("Failed to delete income");
        }
    }

    #[test]
    fn test_non_leap_year_uses_365_days() {
        let helper = TestHelper::new().expect("Failed to create test helper");
        helper
            .income_repo
            .store_income(&sample_income("Salary", 3000))
            .expect("Failed to store income");
        // Week 11 of 2025, seeded directly for the 2025 clock.
        let mut week = week_of(2025, 2, 11, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        week.weeks_in_month = vec![9, 10, 11, 12, 13];
        helper.week_repo.store_week(&week).expect("Failed to store week");
        helper
            .week_repo
            .set_exclusive_current(2025, 11)
            .expect("Failed to set current");

        let summary = service_at(&helper, 2025, 3, 14)
            .budget_summary()
            .expect("Failed to derive summary");
        // 3000 * 12 / 365 * 7 = 690.4…, floored to 690.
        assert_eq!(summary.available_weekly, Decimal::from(690));
    }

    #[test]
    fn test_missing_current_week_is_a_not_found_error() {
        let helper = TestHelper::new().expect("Failed to create test helper");

        let error = service_at(&helper, 2024, 3, 15)
            .budget_summary()
            .expect_err("Summary should fail");
        assert_eq!(
            error.downcast_ref::<NotFoundError>(),
            Some(&NotFoundError::NoCurrentWeek)
        );
    }
}
