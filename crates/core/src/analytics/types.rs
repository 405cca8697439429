//! Analytics query and output types.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finboard_shared::types::{Currency, ProjectId};

use crate::records::{Category, RecordFilter};

/// What to aggregate and when "now" is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsQuery {
    /// Currency to report in.
    pub currency: Currency,
    /// Restrict to one project.
    pub project_id: Option<ProjectId>,
    /// Anchor for the trend window.
    pub as_of: NaiveDate,
}

impl AnalyticsQuery {
    /// Creates a query across all projects, anchored at today (UTC).
    #[must_use]
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            project_id: None,
            as_of: Utc::now().date_naive(),
        }
    }

    /// Narrows the query to one project.
    #[must_use]
    pub fn for_project(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Pins "now" to a fixed date.
    #[must_use]
    pub const fn anchored_at(mut self, as_of: NaiveDate) -> Self {
        self.as_of = as_of;
        self
    }

    /// The record filter implied by this query.
    #[must_use]
    pub fn filter(&self) -> RecordFilter {
        RecordFilter {
            currency: self.currency,
            project_id: self.project_id.clone(),
        }
    }
}

impl Default for AnalyticsQuery {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// Aggregate financial view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAnalytics {
    /// Currency all figures are in.
    pub currency: Currency,
    /// Σ one-time costs.
    pub total_costs: Decimal,
    /// Σ monthly-equivalent active expenses.
    pub total_expenses: Decimal,
    /// Σ budget amounts.
    pub total_budgets: Decimal,
    /// Costs as a percentage of budgets.
    pub budget_utilization: Decimal,
    /// One entry per reported category.
    pub category_breakdown: Vec<CategoryBreakdown>,
    /// Trailing months, oldest first.
    pub monthly_trend: Vec<MonthlyTrend>,
    /// One entry per reported category.
    pub budget_vs_actual: Vec<BudgetVsActual>,
    /// Highest-spending categories, at most five.
    pub top_categories: Vec<CategorySpending>,
}

/// Spending and budget for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    /// Category.
    pub category: Category,
    /// Σ costs.
    pub costs: Decimal,
    /// Σ monthly-equivalent active expenses.
    pub expenses: Decimal,
    /// Σ budgets.
    pub budgets: Decimal,
    /// Share of all category spending.
    pub percentage: Decimal,
}

/// Totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// Label, e.g. "Mar 2024".
    pub month: String,
    /// First day of the month.
    pub period_start: NaiveDate,
    /// Σ costs dated in the month.
    pub costs: Decimal,
    /// Σ monthly-equivalent active expenses running on the first of the month.
    pub expenses: Decimal,
    /// Σ budgets running on the first of the month.
    pub budgets: Decimal,
}

/// Budget against actual spending for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetVsActual {
    /// Category.
    pub category: Category,
    /// Σ budgets.
    pub budgeted: Decimal,
    /// Costs plus projected expenses.
    pub actual: Decimal,
    /// `actual - budgeted`.
    pub variance: Decimal,
    /// `actual / budgeted * 100`.
    pub percentage: Decimal,
    /// Variance classification.
    pub status: BudgetStatus,
}

/// Where actual spending stands against the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Spending exceeds the budget.
    OverBudget,
    /// Spending is below the budget.
    UnderBudget,
    /// Spending matches the budget exactly.
    OnBudget,
}

impl BudgetStatus {
    /// Classifies a signed `actual - budgeted` variance.
    #[must_use]
    pub fn from_variance(variance: Decimal) -> Self {
        match variance.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Self::OverBudget,
            std::cmp::Ordering::Less => Self::UnderBudget,
            std::cmp::Ordering::Equal => Self::OnBudget,
        }
    }
}

/// Ranked category spending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    /// Category.
    pub category: Category,
    /// Costs plus projected expenses.
    pub total: Decimal,
    /// Number of costs and active expenses.
    pub count: usize,
}
