//! Financial analytics aggregation.

use chrono::NaiveDate;
use tracing::debug;

use crate::normalization::{
    far_future, month_label, month_start, months_back, percentage_of, same_month, sum_amounts,
};
use crate::records::{Budget, Cost, Expense, FinancialRecord};

use super::tally::CategoryTotals;
use super::types::{
    AnalyticsQuery, BudgetStatus, BudgetVsActual, CategoryBreakdown, CategorySpending,
    FinancialAnalytics, MonthlyTrend,
};

/// Number of months in the trailing trend, current month included.
pub const TREND_MONTHS: u32 = 6;

/// Maximum number of ranked categories.
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Service for aggregating costs, expenses, and budgets.
pub struct AnalyticsService;

impl AnalyticsService {
    /// Computes every aggregate view for the records matching `query`.
    ///
    /// Records in other currencies, or outside the requested project, are
    /// ignored entirely. Never fails: unreadable amounts count as zero and
    /// zero denominators yield zero percentages.
    #[must_use]
    pub fn calculate(
        costs: &[Cost],
        expenses: &[Expense],
        budgets: &[Budget],
        query: &AnalyticsQuery,
    ) -> FinancialAnalytics {
        let filter = query.filter();
        let costs = filter.apply(costs);
        let expenses = filter.apply(expenses);
        let budgets = filter.apply(budgets);

        debug!(
            currency = %query.currency,
            project_id = ?query.project_id,
            as_of = %query.as_of,
            costs = costs.len(),
            expenses = expenses.len(),
            budgets = budgets.len(),
            "Calculating financial analytics"
        );

        let total_costs = sum_amounts(costs.iter().map(|cost| cost.amount()));
        let total_expenses = sum_amounts(expenses.iter().map(|expense| expense.monthly_amount()));
        let total_budgets = sum_amounts(budgets.iter().map(|budget| budget.amount()));

        let totals = CategoryTotals::collect(&costs, &expenses, &budgets);

        FinancialAnalytics {
            currency: query.currency,
            total_costs,
            total_expenses,
            total_budgets,
            budget_utilization: percentage_of(total_costs, total_budgets),
            category_breakdown: Self::category_breakdown(&totals),
            monthly_trend: Self::monthly_trend(&costs, &expenses, &budgets, query.as_of),
            budget_vs_actual: Self::budget_vs_actual(&totals),
            top_categories: Self::top_categories(&totals),
        }
    }

    /// One entry per reported category, empty ones included.
    #[must_use]
    pub fn category_breakdown(totals: &CategoryTotals) -> Vec<CategoryBreakdown> {
        let grand_total = totals.spending_total();

        totals
            .iter()
            .map(|(category, tally)| CategoryBreakdown {
                category,
                costs: tally.costs,
                expenses: tally.expenses,
                budgets: tally.budgets,
                percentage: percentage_of(tally.spending(), grand_total),
            })
            .collect()
    }

    /// Trailing [`TREND_MONTHS`] months ending at the month of `as_of`, oldest first.
    ///
    /// Costs match on calendar month. Expenses and budgets count when their
    /// active window contains the first day of the month; open-ended windows
    /// run until [`far_future`].
    #[must_use]
    pub fn monthly_trend(
        costs: &[&Cost],
        expenses: &[&Expense],
        budgets: &[&Budget],
        as_of: NaiveDate,
    ) -> Vec<MonthlyTrend> {
        let current = month_start(as_of);
        let horizon = far_future(as_of);

        debug!(%current, %horizon, "Building monthly trend");

        (0..TREND_MONTHS)
            .rev()
            .map(|back| {
                let month = months_back(current, back);

                MonthlyTrend {
                    month: month_label(month),
                    period_start: month,
                    costs: sum_amounts(
                        costs
                            .iter()
                            .filter(|cost| same_month(cost.date, month))
                            .map(|cost| cost.amount()),
                    ),
                    expenses: sum_amounts(
                        expenses
                            .iter()
                            .filter(|expense| expense.is_active && expense.runs_on(month, horizon))
                            .map(|expense| expense.monthly_amount()),
                    ),
                    budgets: sum_amounts(
                        budgets
                            .iter()
                            .filter(|budget| budget.runs_on(month, horizon))
                            .map(|budget| budget.amount()),
                    ),
                }
            })
            .collect()
    }

    /// Budgeted against costs plus projected expenses, per reported category.
    ///
    /// Budgets are summed raw regardless of their period.
    #[must_use]
    pub fn budget_vs_actual(totals: &CategoryTotals) -> Vec<BudgetVsActual> {
        totals
            .iter()
            .map(|(category, tally)| {
                let actual = tally.spending();
                let variance = actual.saturating_sub(tally.budgets);

                BudgetVsActual {
                    category,
                    budgeted: tally.budgets,
                    actual,
                    variance,
                    percentage: percentage_of(actual, tally.budgets),
                    status: BudgetStatus::from_variance(variance),
                }
            })
            .collect()
    }

    /// Up to [`TOP_CATEGORY_LIMIT`] categories by spending, highest first.
    ///
    /// Ties keep display order.
    #[must_use]
    pub fn top_categories(totals: &CategoryTotals) -> Vec<CategorySpending> {
        let mut ranked: Vec<CategorySpending> = totals
            .iter()
            .map(|(category, tally)| CategorySpending {
                category,
                total: tally.spending(),
                count: tally.cost_count + tally.active_expense_count,
            })
            .collect();

        ranked.sort_by(|a, b| b.total.cmp(&a.total));
        ranked.truncate(TOP_CATEGORY_LIMIT);
        ranked
    }
}
