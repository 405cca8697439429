//! Project-scoped financial analytics.
//!
//! Every view here is restricted to one project and one currency:
//! - Task estimates
//! - Cost breakdown by category
//! - Expense analysis by frequency
//! - Financial summary against the project budget

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::ProjectAnalyticsService;
pub use types::*;
