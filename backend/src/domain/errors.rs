//! Error taxonomy shared by the domain services.
//!
//! Configuration and not-found failures abort the operation that hit them
//! and surface to the caller unmodified; the presentation layer decides how
//! to render them. Model-level validation enums live next to their models.

use thiserror::Error;

/// The data required for a money-moving operation is not set up. Fatal: the
/// rollover aborts rather than silently dropping committed amounts.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("No savings category is configured")]
    MissingSavingsExpense,
    #[error("No main goal is configured")]
    MissingMainGoal,
}

/// A lookup that must succeed came back empty.
#[derive(Debug, Error, PartialEq)]
pub enum NotFoundError {
    /// The calendar generator ran for `year` and the requested week is
    /// still missing: a generator defect or an out-of-range year.
    #[error("Week {week_number} of {year} is missing after calendar generation")]
    WeekNotGenerated { year: i32, week_number: u32 },
    #[error("No week is marked as current")]
    NoCurrentWeek,
    #[error("Expense not found: {0}")]
    Expense(String),
    #[error("Purchase not found: {0}")]
    Purchase(String),
    #[error("Goal not found: {0}")]
    Goal(String),
    #[error("Bill not found: {0}")]
    Bill(String),
    #[error("Income not found: {0}")]
    Income(String),
}
