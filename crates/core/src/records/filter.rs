//! Currency and project filtering shared by every view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finboard_shared::types::{Currency, ProjectId};

use super::types::{Budget, Category, Cost, Expense};

/// Common accessors of costs, expenses, and budgets.
pub trait FinancialRecord {
    /// Currency of the record, `None` when unsupported.
    fn currency(&self) -> Option<Currency>;
    /// Owning project, if any.
    fn project_id(&self) -> Option<&ProjectId>;
    /// Spending category.
    fn category(&self) -> Category;
    /// Coerced raw amount, before any frequency normalization.
    fn amount(&self) -> Decimal;
}

macro_rules! impl_financial_record {
    ($($record:ty),+) => {
        $(
            impl FinancialRecord for $record {
                fn currency(&self) -> Option<Currency> {
                    self.currency
                }

                fn project_id(&self) -> Option<&ProjectId> {
                    self.project_id.as_ref()
                }

                fn category(&self) -> Category {
                    self.category
                }

                fn amount(&self) -> Decimal {
                    self.amount.value()
                }
            }
        )+
    };
}

impl_financial_record!(Cost, Expense, Budget);

/// Restricts records to one currency and, optionally, one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Only records in this currency pass. No conversion is performed.
    pub currency: Currency,
    /// When set, only records assigned to this project pass.
    pub project_id: Option<ProjectId>,
}

impl RecordFilter {
    /// Creates a filter for a currency across all projects.
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self {
            currency,
            project_id: None,
        }
    }

    /// Narrows the filter to a single project.
    #[must_use]
    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Returns true if the record passes the filter.
    #[must_use]
    pub fn matches<R: FinancialRecord>(&self, record: &R) -> bool {
        record.currency() == Some(self.currency)
            && self
                .project_id
                .as_ref()
                .is_none_or(|project| record.project_id() == Some(project))
    }

    /// Returns the records that pass, in input order.
    #[must_use]
    pub fn apply<'a, R: FinancialRecord>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }
}
