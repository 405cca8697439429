//! Project analytics output types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finboard_shared::types::{Currency, ProjectId};

use crate::records::{Category, Frequency};

/// Cost estimates attached to a project's tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEstimates {
    /// Number of tasks in the project.
    pub task_count: usize,
    /// Tasks with a positive estimate.
    pub estimated_task_count: usize,
    /// Σ estimates.
    pub total_estimated_cost: Decimal,
    /// Mean over estimated tasks, 0 if none.
    pub average_estimated_cost: Decimal,
}

/// One category's share of a project's costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCategoryShare {
    /// Category.
    pub category: Category,
    /// Σ costs in the category.
    pub amount: Decimal,
    /// Number of costs in the category.
    pub count: usize,
    /// Share of the project's total costs.
    pub percentage: Decimal,
}

/// Recurring expense profile of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseAnalysis {
    /// Active expenses.
    pub active_count: usize,
    /// Inactive expenses.
    pub inactive_count: usize,
    /// Σ monthly-equivalent active expenses.
    pub monthly_total: Decimal,
    /// `monthly_total * 12`.
    pub yearly_projection: Decimal,
    /// Σ raw amounts of active one-time expenses.
    pub one_time_total: Decimal,
    /// Active expenses grouped by frequency.
    pub by_frequency: Vec<FrequencyTotal>,
}

/// Active expenses sharing one frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyTotal {
    /// Frequency.
    pub frequency: Frequency,
    /// Number of expenses.
    pub count: usize,
    /// Σ raw amounts.
    pub amount: Decimal,
    /// Σ monthly equivalents.
    pub monthly_equivalent: Decimal,
}

/// Full financial picture of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFinancialSummary {
    /// Project.
    pub project_id: ProjectId,
    /// Currency all figures are in.
    pub currency: Currency,
    /// Σ raw budget amounts.
    pub total_budget: Decimal,
    /// Σ costs.
    pub total_costs: Decimal,
    /// Σ monthly-equivalent active expenses.
    pub monthly_expenses: Decimal,
    /// `total_costs + monthly_expenses`.
    pub total_spent: Decimal,
    /// `total_budget - total_spent`.
    pub remaining_budget: Decimal,
    /// Spent as a percentage of budget.
    pub budget_utilization: Decimal,
    /// Task estimates.
    pub task_estimates: TaskEstimates,
    /// `total_spent + task_estimates.total_estimated_cost`.
    pub estimated_completion: Decimal,
    /// `total_budget - estimated_completion`.
    pub variance: Decimal,
    /// Whether the estimated completion exceeds the budget.
    pub is_over_budget: bool,
    /// Costs per category.
    pub cost_breakdown: Vec<CostCategoryShare>,
    /// Expense profile.
    pub expense_analysis: ExpenseAnalysis,
}
