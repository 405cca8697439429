//! Project-scoped aggregation.

use rust_decimal::Decimal;
use tracing::debug;

use finboard_shared::types::{Currency, ProjectId};

use crate::analytics::CategoryTotals;
use crate::normalization::{MONTHS_PER_YEAR, monthly_equivalent, percentage_of, sum_amounts};
use crate::records::{Cost, Expense, FinancialRecord, Frequency, RecordFilter, Snapshot, Task};

use super::types::{
    CostCategoryShare, ExpenseAnalysis, FrequencyTotal, ProjectFinancialSummary, TaskEstimates,
};

/// Service for the financial views of a single project.
pub struct ProjectAnalyticsService;

impl ProjectAnalyticsService {
    /// Summarizes task estimates for a project.
    ///
    /// Tasks carry no currency, so only the project filter applies.
    #[must_use]
    pub fn task_estimates(tasks: &[Task], project_id: &ProjectId) -> TaskEstimates {
        let tasks: Vec<&Task> = tasks.iter().filter(|task| task.belongs_to(project_id)).collect();
        let estimates: Vec<Decimal> = tasks
            .iter()
            .map(|task| task.estimated_cost.value())
            .filter(|estimate| *estimate > Decimal::ZERO)
            .collect();

        let total_estimated_cost = sum_amounts(estimates.iter().copied());
        let average_estimated_cost = if estimates.is_empty() {
            Decimal::ZERO
        } else {
            total_estimated_cost
                .checked_div(Decimal::from(estimates.len()))
                .unwrap_or(Decimal::ZERO)
        };

        TaskEstimates {
            task_count: tasks.len(),
            estimated_task_count: estimates.len(),
            total_estimated_cost,
            average_estimated_cost,
        }
    }

    /// Costs per category, largest first.
    ///
    /// Only categories with at least one cost appear; ties keep display
    /// order. Percentages are of every matching cost, `Unlisted` included.
    #[must_use]
    pub fn cost_breakdown(
        costs: &[Cost],
        project_id: &ProjectId,
        currency: Currency,
    ) -> Vec<CostCategoryShare> {
        let costs = Self::filter(project_id, currency).apply(costs);
        Self::breakdown_of(&costs)
    }

    /// Active and inactive expenses of a project with their projections.
    #[must_use]
    pub fn expense_analysis(
        expenses: &[Expense],
        project_id: &ProjectId,
        currency: Currency,
    ) -> ExpenseAnalysis {
        let expenses = Self::filter(project_id, currency).apply(expenses);
        Self::analysis_of(&expenses)
    }

    /// Budget, spending, and estimate roll-up for one project.
    #[must_use]
    pub fn financial_summary(
        snapshot: &Snapshot,
        project_id: &ProjectId,
        currency: Currency,
    ) -> ProjectFinancialSummary {
        let filter = Self::filter(project_id, currency);
        let costs = filter.apply(&snapshot.costs);
        let expenses = filter.apply(&snapshot.expenses);
        let budgets = filter.apply(&snapshot.budgets);

        debug!(
            %project_id,
            %currency,
            costs = costs.len(),
            expenses = expenses.len(),
            budgets = budgets.len(),
            "Calculating project financial summary"
        );

        let total_budget = sum_amounts(budgets.iter().map(|budget| budget.amount()));
        let total_costs = sum_amounts(costs.iter().map(|cost| cost.amount()));
        let expense_analysis = Self::analysis_of(&expenses);
        let monthly_expenses = expense_analysis.monthly_total;
        let task_estimates = Self::task_estimates(&snapshot.tasks, project_id);

        let total_spent = total_costs.saturating_add(monthly_expenses);
        let estimated_completion = total_spent.saturating_add(task_estimates.total_estimated_cost);
        let variance = total_budget.saturating_sub(estimated_completion);

        ProjectFinancialSummary {
            project_id: project_id.clone(),
            currency,
            total_budget,
            total_costs,
            monthly_expenses,
            total_spent,
            remaining_budget: total_budget.saturating_sub(total_spent),
            budget_utilization: percentage_of(total_spent, total_budget),
            task_estimates,
            estimated_completion,
            variance,
            is_over_budget: variance < Decimal::ZERO,
            cost_breakdown: Self::breakdown_of(&costs),
            expense_analysis,
        }
    }

    fn filter(project_id: &ProjectId, currency: Currency) -> RecordFilter {
        RecordFilter::new(currency).with_project(project_id.clone())
    }

    fn breakdown_of(costs: &[&Cost]) -> Vec<CostCategoryShare> {
        let total = sum_amounts(costs.iter().map(|cost| cost.amount()));
        let totals = CategoryTotals::collect(costs, &[], &[]);

        let mut shares: Vec<CostCategoryShare> = totals
            .iter()
            .filter(|(_, tally)| tally.cost_count > 0)
            .map(|(category, tally)| CostCategoryShare {
                category,
                amount: tally.costs,
                count: tally.cost_count,
                percentage: percentage_of(tally.costs, total),
            })
            .collect();

        shares.sort_by(|a, b| b.amount.cmp(&a.amount));
        shares
    }

    fn analysis_of(expenses: &[&Expense]) -> ExpenseAnalysis {
        let (active, inactive): (Vec<&Expense>, Vec<&Expense>) =
            expenses.iter().copied().partition(|expense| expense.is_active);

        let monthly_total = sum_amounts(active.iter().map(|expense| expense.monthly_amount()));
        let one_time_total = sum_amounts(
            active
                .iter()
                .filter(|expense| expense.frequency == Frequency::OneTime)
                .map(|expense| expense.amount()),
        );

        let by_frequency = Frequency::ALL
            .into_iter()
            .filter_map(|frequency| {
                let matching: Vec<Decimal> = active
                    .iter()
                    .filter(|expense| expense.frequency == frequency)
                    .map(|expense| expense.amount())
                    .collect();
                if matching.is_empty() {
                    return None;
                }

                let amount = sum_amounts(matching.iter().copied());
                Some(FrequencyTotal {
                    frequency,
                    count: matching.len(),
                    amount,
                    monthly_equivalent: sum_amounts(
                        matching
                            .iter()
                            .map(|value| monthly_equivalent(*value, frequency)),
                    ),
                })
            })
            .collect();

        ExpenseAnalysis {
            active_count: active.len(),
            inactive_count: inactive.len(),
            monthly_total,
            yearly_projection: monthly_total.saturating_mul(MONTHS_PER_YEAR),
            one_time_total,
            by_frequency,
        }
    }
}
