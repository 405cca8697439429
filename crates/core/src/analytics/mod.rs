//! Financial analytics over costs, recurring expenses, and budgets.
//!
//! This module provides pure aggregation logic:
//! - Grand totals and budget utilization
//! - Category breakdown
//! - Six-month trend
//! - Budget vs actual
//! - Top spending categories

pub mod service;
pub mod tally;
pub mod types;


pub use service::{AnalyticsService, TOP_CATEGORY_LIMIT, TREND_MONTHS};
pub use tally::{CategoryTally, CategoryTotals};
pub use types::*;
