//! Per-category running sums.

use rust_decimal::Decimal;

use crate::records::{Budget, Category, Cost, Expense, FinancialRecord};

/// Sums for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTally {
    /// Σ cost amounts.
    pub costs: Decimal,
    /// Σ monthly-equivalent amounts of active expenses.
    pub expenses: Decimal,
    /// Σ raw budget amounts.
    pub budgets: Decimal,
    /// Number of costs.
    pub cost_count: usize,
    /// Number of active expenses.
    pub active_expense_count: usize,
}

impl CategoryTally {
    /// Costs plus projected expenses.
    #[must_use]
    pub fn spending(&self) -> Decimal {
        self.costs.saturating_add(self.expenses)
    }
}

/// Tallies for every reported category, in [`Category::ALL`] order.
///
/// `Unlisted` records are skipped here; they only reach grand totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    tallies: [CategoryTally; Category::ALL.len()],
}

impl CategoryTotals {
    /// Builds tallies from already-filtered records.
    #[must_use]
    pub fn collect(costs: &[&Cost], expenses: &[&Expense], budgets: &[&Budget]) -> Self {
        let mut totals = Self::default();

        for cost in costs {
            if let Some(tally) = totals.slot(cost.category) {
                tally.costs = tally.costs.saturating_add(cost.amount());
                tally.cost_count += 1;
            }
        }

        for expense in expenses.iter().filter(|expense| expense.is_active) {
            if let Some(tally) = totals.slot(expense.category) {
                tally.expenses = tally.expenses.saturating_add(expense.monthly_amount());
                tally.active_expense_count += 1;
            }
        }

        for budget in budgets {
            if let Some(tally) = totals.slot(budget.category) {
                tally.budgets = tally.budgets.saturating_add(budget.amount());
            }
        }

        totals
    }

    /// Tally for a single category. `Unlisted` always reads as empty.
    #[must_use]
    pub fn get(&self, category: Category) -> CategoryTally {
        category
            .position()
            .map(|index| self.tallies[index])
            .unwrap_or_default()
    }

    /// Iterates categories with their tallies in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryTally)> {
        Category::ALL.into_iter().zip(self.tallies.iter())
    }

    /// Σ spending across the reported categories.
    #[must_use]
    pub fn spending_total(&self) -> Decimal {
        self.tallies
            .iter()
            .fold(Decimal::ZERO, |acc, tally| acc.saturating_add(tally.spending()))
    }

    fn slot(&mut self, category: Category) -> Option<&mut CategoryTally> {
        category.position().map(|index| &mut self.tallies[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use finboard_shared::types::Currency;
    use rust_decimal_macros::dec;

    use crate::records::{BudgetPeriod, Frequency};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_collect_counts_and_sums() {
        let costs = [
            Cost::new(dec!(10), Currency::Usd, Category::Food, day()),
            Cost::new("5.5", Currency::Usd, Category::Food, day()),
            Cost::new(dec!(99), Currency::Usd, Category::Unlisted, day()),
        ];
        let expenses = [
            Expense::new(dec!(100), Currency::Usd, Category::Food, Frequency::Weekly, day()),
            Expense::new(dec!(100), Currency::Usd, Category::Food, Frequency::Daily, day())
                .inactive(),
            Expense::new(dec!(50), Currency::Usd, Category::Food, Frequency::OneTime, day()),
        ];
        let budgets = [Budget::new(
            dec!(700),
            Currency::Usd,
            Category::Savings,
            BudgetPeriod::Yearly,
            day(),
        )];

        let totals = CategoryTotals::collect(
            &costs.iter().collect::<Vec<_>>(),
            &expenses.iter().collect::<Vec<_>>(),
            &budgets.iter().collect::<Vec<_>>(),
        );

        let food = totals.get(Category::Food);
        assert_eq!(food.costs, dec!(15.5));
        assert_eq!(food.expenses, dec!(433));
        assert_eq!(food.cost_count, 2);
        // One-time expenses are active records even though they add nothing.
        assert_eq!(food.active_expense_count, 2);
        assert_eq!(totals.get(Category::Savings).budgets, dec!(700));
        assert_eq!(totals.get(Category::Unlisted), CategoryTally::default());
        assert_eq!(totals.spending_total(), dec!(448.5));
        assert_eq!(totals.iter().count(), 10);
    }
}
