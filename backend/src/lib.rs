//! # Budget Tracker Backend
//!
//! Domain services and storage for the household budget tracker. The crate
//! is presentation-agnostic: it exposes synchronous services over a CSV
//! persistence layer and hands the embedding application plain read models
//! (see the `shared` crate). The budget cycle itself lives in [`domain`];
//! everything it persists goes through the per-entity storage traits in
//! [`storage`].

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

pub mod domain;
pub mod storage;

pub use storage::csv::CsvConnection;

/// Main backend struct that orchestrates all services.
pub struct Backend {
    pub calendar_service: domain::CalendarService,
    pub week_service: domain::WeekService,
    pub budget_service: domain::BudgetService,
    pub forecast_service: domain::ForecastService,
    pub expense_service: domain::ExpenseService,
    pub purchase_service: domain::PurchaseService,
    pub goal_service: domain::GoalService,
    pub bill_service: domain::BillService,
    pub income_service: domain::IncomeService,
}

impl Backend {
    /// Create a backend instance with every service rooted at `data_dir`.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let connection = Arc::new(CsvConnection::new(data_dir)?);

        Ok(Backend {
            calendar_service: domain::CalendarService::new(connection.clone()),
            week_service: domain::WeekService::new(connection.clone()),
            budget_service: domain::BudgetService::new(connection.clone()),
            forecast_service: domain::ForecastService::new(connection.clone()),
            expense_service: domain::ExpenseService::new(connection.clone()),
            purchase_service: domain::PurchaseService::new(connection.clone()),
            goal_service: domain::GoalService::new(connection.clone()),
            bill_service: domain::BillService::new(connection.clone()),
            income_service: domain::IncomeService::new(connection),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backend_wires_all_services_over_one_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let backend = Backend::new(temp_dir.path()).expect("Failed to create backend");

        // A service write is visible through its sibling services.
        backend
            .expense_service
            .create_savings_expense(rust_decimal::Decimal::from(50))
            .expect("Failed to create savings");
        assert!(backend
            .expense_service
            .savings_expense()
            .expect("lookup failed")
            .is_some());
    }
}
