//! Input entities: costs, recurring expenses, budgets, and tasks.

pub mod filter;
pub mod types;


pub use filter::{FinancialRecord, RecordFilter};
pub use types::{Budget, BudgetPeriod, Category, Cost, Expense, Frequency, Snapshot, Task};
