//! Tests for project analytics.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use finboard_shared::types::{Currency, ProjectId};

use super::service::ProjectAnalyticsService;
use super::types::FrequencyTotal;
use crate::records::{Budget, BudgetPeriod, Category, Cost, Expense, Frequency, Snapshot, Task};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn p1() -> ProjectId {
    ProjectId::from("p1")
}

fn cost(amount: Decimal, currency: Currency, category: Category, project: &str) -> Cost {
    Cost::new(amount, currency, category, day()).for_project(project)
}

fn expense(amount: Decimal, frequency: Frequency) -> Expense {
    Expense::new(amount, Currency::Usd, Category::Utilities, frequency, day()).for_project("p1")
}

fn budget(amount: Decimal, project: &str) -> Budget {
    Budget::new(amount, Currency::Usd, Category::Other, BudgetPeriod::Monthly, day())
        .for_project(project)
}

fn snapshot() -> Snapshot {
    Snapshot {
        costs: vec![
            cost(dec!(100), Currency::Usd, Category::Food, "p1"),
            cost(dec!(300), Currency::Usd, Category::Housing, "p1"),
            cost(dec!(50), Currency::Usd, Category::Food, "p1"),
            cost(dec!(50), Currency::Usd, Category::Unlisted, "p1"),
            cost(dec!(999), Currency::Usd, Category::Food, "p2"),
            cost(dec!(77), Currency::Eur, Category::Food, "p1"),
        ],
        expenses: vec![
            expense(dec!(100), Frequency::Weekly),
            expense(dec!(200), Frequency::Monthly),
            expense(dec!(1200), Frequency::Yearly),
            expense(dec!(80), Frequency::OneTime),
            expense(dec!(10), Frequency::Daily).inactive(),
        ],
        budgets: vec![budget(dec!(2000), "p1"), budget(dec!(500), "p1"), budget(dec!(9000), "p2")],
        tasks: vec![
            Task::new("400").for_project("p1"),
            Task::new(dec!(0)).for_project("p1"),
            Task::new("abc").for_project("p1"),
            Task::new(dec!(100)).for_project("p1"),
            Task::new(dec!(1000)).for_project("p2"),
            Task::new(dec!(1000)),
        ],
    }
}

#[test]
fn test_task_estimates() {
    let estimates = ProjectAnalyticsService::task_estimates(&snapshot().tasks, &p1());

    assert_eq!(estimates.task_count, 4);
    assert_eq!(estimates.estimated_task_count, 2);
    assert_eq!(estimates.total_estimated_cost, dec!(500));
    assert_eq!(estimates.average_estimated_cost, dec!(250));
}

#[test]
fn test_task_estimates_empty_project() {
    let estimates = ProjectAnalyticsService::task_estimates(&[], &p1());

    assert_eq!(estimates.task_count, 0);
    assert_eq!(estimates.average_estimated_cost, Decimal::ZERO);
}

#[test]
fn test_cost_breakdown_sorted_by_amount() {
    let shares = ProjectAnalyticsService::cost_breakdown(&snapshot().costs, &p1(), Currency::Usd);

    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].category, Category::Housing);
    assert_eq!(shares[0].amount, dec!(300));
    assert_eq!(shares[0].count, 1);
    assert_eq!(shares[0].percentage, dec!(60));
    assert_eq!(shares[1].category, Category::Food);
    assert_eq!(shares[1].amount, dec!(150));
    assert_eq!(shares[1].count, 2);
    assert_eq!(shares[1].percentage, dec!(30));
}

#[test]
fn test_cost_breakdown_ties_keep_display_order() {
    let costs = vec![
        cost(dec!(10), Currency::Usd, Category::Savings, "p1"),
        cost(dec!(10), Currency::Usd, Category::Transportation, "p1"),
    ];
    let shares = ProjectAnalyticsService::cost_breakdown(&costs, &p1(), Currency::Usd);

    assert_eq!(shares[0].category, Category::Transportation);
    assert_eq!(shares[1].category, Category::Savings);
    assert_eq!(shares[0].percentage, dec!(50));
}

#[test]
fn test_expense_analysis() {
    let analysis =
        ProjectAnalyticsService::expense_analysis(&snapshot().expenses, &p1(), Currency::Usd);

    assert_eq!(analysis.active_count, 4);
    assert_eq!(analysis.inactive_count, 1);
    assert_eq!(analysis.monthly_total, dec!(733));
    assert_eq!(analysis.yearly_projection, dec!(8796));
    assert_eq!(analysis.one_time_total, dec!(80));
    assert_eq!(
        analysis.by_frequency,
        vec![
            FrequencyTotal {
                frequency: Frequency::Weekly,
                count: 1,
                amount: dec!(100),
                monthly_equivalent: dec!(433),
            },
            FrequencyTotal {
                frequency: Frequency::Monthly,
                count: 1,
                amount: dec!(200),
                monthly_equivalent: dec!(200),
            },
            FrequencyTotal {
                frequency: Frequency::Yearly,
                count: 1,
                amount: dec!(1200),
                monthly_equivalent: dec!(100),
            },
            FrequencyTotal {
                frequency: Frequency::OneTime,
                count: 1,
                amount: dec!(80),
                monthly_equivalent: Decimal::ZERO,
            },
        ]
    );
}

#[test]
fn test_expense_analysis_other_currency_is_empty() {
    let analysis =
        ProjectAnalyticsService::expense_analysis(&snapshot().expenses, &p1(), Currency::Mad);

    assert_eq!(analysis.active_count, 0);
    assert_eq!(analysis.inactive_count, 0);
    assert_eq!(analysis.monthly_total, Decimal::ZERO);
    assert!(analysis.by_frequency.is_empty());
}

#[test]
fn test_financial_summary() {
    let summary = ProjectAnalyticsService::financial_summary(&snapshot(), &p1(), Currency::Usd);

    assert_eq!(summary.project_id, p1());
    assert_eq!(summary.currency, Currency::Usd);
    assert_eq!(summary.total_budget, dec!(2500));
    assert_eq!(summary.total_costs, dec!(500));
    assert_eq!(summary.monthly_expenses, dec!(733));
    assert_eq!(summary.total_spent, dec!(1233));
    assert_eq!(summary.remaining_budget, dec!(1267));
    assert_eq!(summary.budget_utilization, dec!(49.32));
    assert_eq!(summary.task_estimates.total_estimated_cost, dec!(500));
    assert_eq!(summary.estimated_completion, dec!(1733));
    assert_eq!(summary.variance, dec!(767));
    assert!(!summary.is_over_budget);
    assert_eq!(summary.cost_breakdown.len(), 2);
    assert_eq!(summary.expense_analysis.active_count, 4);
}

#[test]
fn test_financial_summary_over_budget() {
    let mut snapshot = snapshot();
    snapshot.budgets = vec![budget(dec!(1000), "p1")];
    let summary = ProjectAnalyticsService::financial_summary(&snapshot, &p1(), Currency::Usd);

    assert_eq!(summary.remaining_budget, dec!(-233));
    assert_eq!(summary.variance, dec!(-733));
    assert!(summary.is_over_budget);
}

#[test]
fn test_financial_summary_without_budget() {
    let summary = ProjectAnalyticsService::financial_summary(
        &Snapshot::default(),
        &ProjectId::from("empty"),
        Currency::Usd,
    );

    assert_eq!(summary.budget_utilization, Decimal::ZERO);
    assert_eq!(summary.variance, Decimal::ZERO);
    assert!(!summary.is_over_budget);
    assert!(summary.cost_breakdown.is_empty());
}

#[test]
fn test_summary_serializes_camel_case() {
    let summary = ProjectAnalyticsService::financial_summary(&snapshot(), &p1(), Currency::Usd);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["projectId"], "p1");
    assert_eq!(json["isOverBudget"], false);
    assert_eq!(json["expenseAnalysis"]["byFrequency"][3]["frequency"], "one-time");
    assert_eq!(json["taskEstimates"]["estimatedTaskCount"], 2);
}

proptest! {
    /// Cost shares never exceed the project total and stay sorted.
    #[test]
    fn test_cost_breakdown_invariants(
        entries in prop::collection::vec((0i64..1_000_000, 0usize..10), 0..30),
    ) {
        let costs: Vec<Cost> = entries
            .iter()
            .map(|(cents, index)| {
                cost(Decimal::new(*cents, 2), Currency::Usd, Category::ALL[*index], "p1")
            })
            .collect();
        let shares = ProjectAnalyticsService::cost_breakdown(&costs, &p1(), Currency::Usd);

        let counted: usize = shares.iter().map(|share| share.count).sum();
        prop_assert_eq!(counted, costs.len());
        for pair in shares.windows(2) {
            prop_assert!(pair[0].amount >= pair[1].amount);
        }
        for share in &shares {
            prop_assert!(share.percentage <= dec!(100));
        }
    }

    /// The yearly projection is always twelve months of the monthly total.
    #[test]
    fn test_yearly_projection(amounts in prop::collection::vec(0i64..1_000_000, 0..20)) {
        let expenses: Vec<Expense> = amounts
            .iter()
            .map(|cents| expense(Decimal::new(*cents, 2), Frequency::Monthly))
            .collect();
        let analysis = ProjectAnalyticsService::expense_analysis(&expenses, &p1(), Currency::Usd);

        prop_assert_eq!(analysis.yearly_projection, analysis.monthly_total * dec!(12));
        prop_assert_eq!(analysis.active_count, expenses.len());
    }
}
