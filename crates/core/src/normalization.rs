//! Monthly-equivalence and calendar rules shared by every view.
//!
//! The frequency factors are fixed approximations (a month is 30 days or
//! 4.33 weeks) and must stay that way: downstream consumers are built
//! against these exact numbers.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::records::Frequency;

/// Days counted per month for daily expenses.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Weeks counted per month for weekly expenses.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

/// Months per year for yearly expenses.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Converts a recurring amount to its monthly equivalent.
///
/// One-time and unrecognized frequencies contribute nothing.
#[must_use]
pub fn monthly_equivalent(amount: Decimal, frequency: Frequency) -> Decimal {
    match frequency {
        Frequency::Daily => amount.saturating_mul(DAYS_PER_MONTH),
        Frequency::Weekly => amount.saturating_mul(WEEKS_PER_MONTH),
        Frequency::Monthly => amount,
        Frequency::Yearly => amount / MONTHS_PER_YEAR,
        Frequency::OneTime | Frequency::Unrecognized => Decimal::ZERO,
    }
}

/// Sums amounts, saturating instead of panicking on overflow.
#[must_use]
pub fn sum_amounts<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `part / whole * 100` at full precision. Zero when `whole` is zero.
///
/// Rounding is left to whoever displays the value.
#[must_use]
pub fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }

    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// First day of the month containing `date`.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The month start `months` months before `date`'s month.
#[must_use]
pub fn months_back(date: NaiveDate, months: u32) -> NaiveDate {
    let start = month_start(date);
    start.checked_sub_months(Months::new(months)).unwrap_or(start)
}

/// Whether two dates fall in the same calendar month of the same year.
#[must_use]
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Stand-in end date for open-ended windows: Dec 31 of the year after `as_of`.
#[must_use]
pub fn far_future(as_of: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(as_of.year() + 1, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Whether `[start, end ?? horizon]` contains `day`. Both ends inclusive.
#[must_use]
pub fn window_contains(
    start: NaiveDate,
    end: Option<NaiveDate>,
    day: NaiveDate,
    horizon: NaiveDate,
) -> bool {
    start <= day && day <= end.unwrap_or(horizon)
}

/// Short chart label for a month, e.g. `"Mar 2024"`.
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
