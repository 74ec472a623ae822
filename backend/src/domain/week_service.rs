//! Week tracking and rollover for the budget cycle.
//!
//! Every invocation resolves today's ISO week, generates the year's
//! calendar on first contact, performs the rollover transition when the
//! stored current week has gone stale, and refreshes the derived figures
//! the home view shows. The transition is the one critical section in the
//! system: it migrates the committed savings and main-goal allocations into
//! the closing week, credits the main goal, wipes the purchase ledger,
//! resets bills on a month change, and moves the current flag.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Datelike;
use log::{debug, info};
use rust_decimal::Decimal;

use shared::CurrentWeek;

use crate::domain::calendar_service::CalendarService;
use crate::domain::errors::{ConfigurationError, NotFoundError};
use crate::domain::forecast_service::ForecastService;
use crate::domain::models::week::Week;
use crate::domain::time::{Clock, SystemClock};
use crate::storage::csv::{
    BillRepository, CsvConnection, ExpenseRepository, GoalRepository, PurchaseRepository,
    WeekRepository,
};
use crate::storage::{BillStorage, ExpenseStorage, GoalStorage, PurchaseStorage, WeekStorage};

/// Service owning the global current-week pointer.
pub struct WeekService {
    week_repository: WeekRepository,
    expense_repository: ExpenseRepository,
    purchase_repository: PurchaseRepository,
    goal_repository: GoalRepository,
    bill_repository: BillRepository,
    calendar_service: CalendarService,
    forecast_service: ForecastService,
    clock: Arc<dyn Clock>,
    /// Serializes rollover transitions; see [`transition_to`](Self::transition_to).
    rollover_lock: Mutex<()>,
}

impl WeekService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self::with_clock(connection, Arc::new(SystemClock))
    }

    pub fn with_clock(connection: Arc<CsvConnection>, clock: Arc<dyn Clock>) -> Self {
        Self {
            week_repository: WeekRepository::new((*connection).clone()),
            expense_repository: ExpenseRepository::new((*connection).clone()),
            purchase_repository: PurchaseRepository::new((*connection).clone()),
            goal_repository: GoalRepository::new((*connection).clone()),
            bill_repository: BillRepository::new((*connection).clone()),
            calendar_service: CalendarService::new(connection.clone()),
            forecast_service: ForecastService::new(connection),
            clock,
            rollover_lock: Mutex::new(()),
        }
    }

    /// Resolve today's week, rolling the budget cycle over first when the
    /// stored current week is no longer today's week.
    ///
    /// Calling this twice in a row is a no-op the second time: the
    /// transition only runs while the looked-up week is not yet flagged
    /// current, and the flag is re-checked under the rollover lock.
    pub fn current_week_info(&self) -> Result<CurrentWeek> {
        let today = self.clock.today();
        let iso = today.iso_week();
        let (year, week_number) = (iso.year(), iso.week());

        let mut current = match self.week_repository.get_week(year, week_number)? {
            Some(week) => week,
            None => {
                info!("📅 WEEK: no week {} of {} yet, generating calendar", week_number, year);
                self.calendar_service.setup_year(year)?;
                self.week_repository
                    .get_week(year, week_number)?
                    .ok_or(NotFoundError::WeekNotGenerated { year, week_number })?
            }
        };

        if !current.is_current_week {
            let _guard = self.rollover_lock.lock().unwrap();
            // Re-read under the lock: a concurrent caller may have finished
            // the same transition already.
            current = self
                .week_repository
                .get_week(year, week_number)?
                .ok_or(NotFoundError::WeekNotGenerated { year, week_number })?;
            if !current.is_current_week {
                self.transition_to(&mut current)?;
            }
        }

        self.refresh_goal_fulfillment()?;
        self.refresh_week_totals(&mut current)?;
        let goal_achieved_by = self
            .forecast_service
            .main_goal_achieved_by(year, week_number)?;

        Ok(CurrentWeek {
            today: today.format("%Y-%m-%d").to_string(),
            week_number,
            date_range: current.date_range(),
            dates_in_week: current
                .dates_in_week
                .iter()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .collect(),
            goal_achieved_by,
        })
    }

    /// The rollover transition. Aborts before moving any money when the
    /// savings category or the main goal is missing; the first-ever
    /// activation (no previous current week) only sets the flag.
    fn transition_to(&self, current: &mut Week) -> Result<()> {
        info!("📅 WEEK: new week {} of {}", current.week_number, current.year);

        if let Some(mut previous) = self.week_repository.get_current_week()? {
            let savings = self
                .expense_repository
                .get_savings_expense()?
                .ok_or(ConfigurationError::MissingSavingsExpense)?;
            let mut main_goal = self
                .goal_repository
                .get_main_goal()?
                .ok_or(ConfigurationError::MissingMainGoal)?;

            // Everything earmarked for savings and the main goal counts as
            // spent in the closing week, even though no purchases exist for
            // it. The goal's allocation is realized into its saved balance.
            previous.spent += savings.allocated;
            previous.spent += main_goal.allocated;
            main_goal.saved += main_goal.allocated;
            self.goal_repository.update_goal(&main_goal)?;
            info!(
                "📅 WEEK: migrated savings {} and goal allocation {} into week {}, goal saved now {}",
                savings.allocated, main_goal.allocated, previous.week_number, main_goal.saved
            );

            // The ledger only describes one week; wipe it wholesale.
            let deleted = self.purchase_repository.delete_all_purchases()?;
            debug!("📅 WEEK: cleared {} purchases", deleted);

            previous.is_current_week = false;
            self.week_repository.update_week(&previous)?;

            if current.month != previous.month {
                info!("📅 WEEK: month changed, marking every bill unpaid");
                for mut bill in self.bill_repository.list_bills()? {
                    bill.is_paid = false;
                    self.bill_repository.update_bill(&bill)?;
                }
            }
        }

        self.week_repository
            .set_exclusive_current(current.year, current.week_number)?;
        current.is_current_week = true;
        Ok(())
    }

    /// `is_fulfilled` is derived state; refresh it for every goal.
    fn refresh_goal_fulfillment(&self) -> Result<()> {
        for mut goal in self.goal_repository.list_goals()? {
            let fulfilled = goal.saved >= goal.cost;
            if goal.is_fulfilled != fulfilled {
                goal.is_fulfilled = fulfilled;
                self.goal_repository.update_goal(&goal)?;
            }
        }
        Ok(())
    }

    /// Recompute the current week's totals from the post-rollover state:
    /// every expense's `spent` from its surviving purchases, then the week's
    /// `allocated` (expenses plus the main goal) and `spent` (expenses).
    fn refresh_week_totals(&self, current: &mut Week) -> Result<()> {
        let mut currently_allocated = Decimal::ZERO;
        let mut currently_spent = Decimal::ZERO;

        for mut expense in self.expense_repository.list_expenses()? {
            let spent: Decimal = self
                .purchase_repository
                .list_purchases_for_expense(&expense.id)?
                .iter()
                .map(|purchase| purchase.spent)
                .sum();
            let overspent = spent > expense.allocated;
            if expense.spent != spent || expense.is_overspent != overspent {
                expense.spent = spent;
                expense.is_overspent = overspent;
                self.expense_repository.update_expense(&expense)?;
            }
            currently_allocated += expense.allocated;
            currently_spent += expense.spent;
        }

        if let Some(main_goal) = self.goal_repository.get_main_goal()? {
            currently_allocated += main_goal.allocated;
        }

        current.allocated = currently_allocated;
        current.spent = currently_spent;
        self.week_repository.update_week(current)
    }
}
