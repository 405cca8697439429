//! Entity records supplied by the REST layer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finboard_shared::types::date::{flexible, flexible_option};
use finboard_shared::types::money::lenient;
use finboard_shared::types::{BudgetId, CostId, Currency, ExpenseId, ProjectId, RawAmount, TaskId};

use crate::normalization::{monthly_equivalent, window_contains};

/// Spending category.
///
/// The first ten variants are the fixed, ordered list every per-category
/// view reports on. Strings outside that list deserialize as `Unlisted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Category {
    /// Rent, mortgage, office space.
    Housing,
    /// Travel and vehicles.
    Transportation,
    /// Food and catering.
    Food,
    /// Power, water, internet.
    Utilities,
    /// Health and insurance.
    Healthcare,
    /// Entertainment.
    Entertainment,
    /// Shopping and equipment.
    Shopping,
    /// Training and education.
    Education,
    /// Savings and reserves.
    Savings,
    /// Anything else in the fixed list.
    Other,
    /// A category string outside the fixed list.
    Unlisted,
}

impl Category {
    /// The reported categories, in display order.
    pub const ALL: [Self; 10] = [
        Self::Housing,
        Self::Transportation,
        Self::Food,
        Self::Utilities,
        Self::Healthcare,
        Self::Entertainment,
        Self::Shopping,
        Self::Education,
        Self::Savings,
        Self::Other,
    ];

    /// Position in [`Category::ALL`], or `None` for `Unlisted`.
    #[must_use]
    pub const fn position(self) -> Option<usize> {
        match self {
            Self::Housing => Some(0),
            Self::Transportation => Some(1),
            Self::Food => Some(2),
            Self::Utilities => Some(3),
            Self::Healthcare => Some(4),
            Self::Entertainment => Some(5),
            Self::Shopping => Some(6),
            Self::Education => Some(7),
            Self::Savings => Some(8),
            Self::Other => Some(9),
            Self::Unlisted => None,
        }
    }

    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Transportation => "transportation",
            Self::Food => "food",
            Self::Utilities => "utilities",
            Self::Healthcare => "healthcare",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Education => "education",
            Self::Savings => "savings",
            Self::Other => "other",
            Self::Unlisted => "unlisted",
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .unwrap_or(Self::Unlisted)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a recurring expense is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Frequency {
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every month.
    Monthly,
    /// Every year.
    Yearly,
    /// Charged once.
    OneTime,
    /// Any other value; never contributes to projections.
    Unrecognized,
}

impl Frequency {
    /// All variants, in reporting order.
    pub const ALL: [Self; 6] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::OneTime,
        Self::Unrecognized,
    ];

    /// Wire name of the frequency.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::OneTime => "one-time",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl From<String> for Frequency {
    fn from(value: String) -> Self {
        match value.as_str() {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "yearly" => Self::Yearly,
            "one-time" | "one_time" => Self::OneTime,
            _ => Self::Unrecognized,
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Period a budget ceiling applies to. Informational only: budget amounts
/// are summed raw, never normalized by period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// Daily ceiling.
    Daily,
    /// Weekly ceiling.
    Weekly,
    /// Monthly ceiling.
    Monthly,
    /// Yearly ceiling.
    Yearly,
}

/// A one-time monetary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cost {
    /// Cost ID.
    #[serde(default)]
    pub id: Option<CostId>,
    /// Amount, possibly stringified.
    #[serde(default)]
    pub amount: RawAmount,
    /// Currency of the amount. `None` when unsupported; never matches a filter.
    #[serde(default, with = "lenient")]
    pub currency: Option<Currency>,
    /// Spending category.
    pub category: Category,
    /// Day the cost was incurred.
    #[serde(with = "flexible")]
    pub date: NaiveDate,
    /// Owning project.
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Cost {
    /// Creates a cost with no ID, project, or description.
    #[must_use]
    pub fn new(
        amount: impl Into<RawAmount>,
        currency: Currency,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            amount: amount.into(),
            currency: Some(currency),
            category,
            date,
            project_id: None,
            description: None,
        }
    }

    /// Assigns the cost to a project.
    #[must_use]
    pub fn for_project(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// A recurring monetary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Expense ID.
    #[serde(default)]
    pub id: Option<ExpenseId>,
    /// Amount per occurrence, possibly stringified.
    #[serde(default)]
    pub amount: RawAmount,
    /// Currency of the amount. `None` when unsupported; never matches a filter.
    #[serde(default, with = "lenient")]
    pub currency: Option<Currency>,
    /// Spending category.
    pub category: Category,
    /// Recurrence.
    pub frequency: Frequency,
    /// Only active expenses contribute to projections.
    #[serde(default)]
    pub is_active: bool,
    /// First day the expense applies.
    #[serde(with = "flexible")]
    pub start_date: NaiveDate,
    /// Last day the expense applies; open-ended when absent.
    #[serde(default, with = "flexible_option")]
    pub end_date: Option<NaiveDate>,
    /// Owning project.
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Expense {
    /// Creates an active, open-ended expense.
    #[must_use]
    pub fn new(
        amount: impl Into<RawAmount>,
        currency: Currency,
        category: Category,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            amount: amount.into(),
            currency: Some(currency),
            category,
            frequency,
            is_active: true,
            start_date,
            end_date: None,
            project_id: None,
            description: None,
        }
    }

    /// Assigns the expense to a project.
    #[must_use]
    pub fn for_project(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Sets the last day the expense applies.
    #[must_use]
    pub const fn ending(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Marks the expense inactive.
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Monthly-equivalent amount, or zero when inactive.
    #[must_use]
    pub fn monthly_amount(&self) -> Decimal {
        if self.is_active {
            monthly_equivalent(self.amount.value(), self.frequency)
        } else {
            Decimal::ZERO
        }
    }

    /// Whether the active window `[start_date, end_date ?? horizon]` contains `day`.
    #[must_use]
    pub fn runs_on(&self, day: NaiveDate, horizon: NaiveDate) -> bool {
        window_contains(self.start_date, self.end_date, day, horizon)
    }
}

/// An allocated spending ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Budget ID.
    #[serde(default)]
    pub id: Option<BudgetId>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Ceiling amount, possibly stringified.
    #[serde(default)]
    pub amount: RawAmount,
    /// Currency of the amount. `None` when unsupported; never matches a filter.
    #[serde(default, with = "lenient")]
    pub currency: Option<Currency>,
    /// Spending category.
    pub category: Category,
    /// Period the ceiling applies to.
    pub period: BudgetPeriod,
    /// First day the budget applies.
    #[serde(with = "flexible")]
    pub start_date: NaiveDate,
    /// Last day the budget applies; open-ended when absent.
    #[serde(default, with = "flexible_option")]
    pub end_date: Option<NaiveDate>,
    /// Owning project.
    #[serde(default)]
    pub project_id: Option<ProjectId>,
}

impl Budget {
    /// Creates an open-ended budget.
    #[must_use]
    pub fn new(
        amount: impl Into<RawAmount>,
        currency: Currency,
        category: Category,
        period: BudgetPeriod,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            name: None,
            amount: amount.into(),
            currency: Some(currency),
            category,
            period,
            start_date,
            end_date: None,
            project_id: None,
        }
    }

    /// Assigns the budget to a project.
    #[must_use]
    pub fn for_project(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Sets the last day the budget applies.
    #[must_use]
    pub const fn ending(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Whether the active window `[start_date, end_date ?? horizon]` contains `day`.
    #[must_use]
    pub fn runs_on(&self, day: NaiveDate, horizon: NaiveDate) -> bool {
        window_contains(self.start_date, self.end_date, day, horizon)
    }
}

/// A project task carrying a cost estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task ID.
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Owning project.
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// Task title.
    #[serde(default)]
    pub title: Option<String>,
    /// Estimated cost, possibly stringified.
    #[serde(default)]
    pub estimated_cost: RawAmount,
    /// Workflow status as reported by the backend.
    #[serde(default)]
    pub status: Option<String>,
}

impl Task {
    /// Creates a task with the given estimate and no project.
    #[must_use]
    pub fn new(estimated_cost: impl Into<RawAmount>) -> Self {
        Self {
            id: None,
            project_id: None,
            title: None,
            estimated_cost: estimated_cost.into(),
            status: None,
        }
    }

    /// Assigns the task to a project.
    #[must_use]
    pub fn for_project(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Whether the task belongs to `project_id`.
    #[must_use]
    pub fn belongs_to(&self, project_id: &ProjectId) -> bool {
        self.project_id.as_ref() == Some(project_id)
    }
}

/// A full data snapshot as fetched from the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// One-time costs.
    #[serde(default)]
    pub costs: Vec<Cost>,
    /// Recurring expenses.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Budgets.
    #[serde(default)]
    pub budgets: Vec<Budget>,
    /// Project tasks.
    #[serde(default)]
    pub tasks: Vec<Task>,
}
