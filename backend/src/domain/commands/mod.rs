//! Command and result types for the domain services.

pub mod bills;
pub mod expenses;
pub mod goals;
pub mod incomes;
pub mod purchases;
