//! Snapshot loading and report assembly.

use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info};

use finboard_core::analytics::{AnalyticsQuery, AnalyticsService, FinancialAnalytics};
use finboard_core::project::{ProjectAnalyticsService, ProjectFinancialSummary};
use finboard_core::records::Snapshot;
use finboard_shared::config::AnalyticsConfig;
use finboard_shared::{AppError, AppResult};

/// Path argument that reads the snapshot from standard input.
pub const STDIN_PATH: &str = "-";

/// Everything the report prints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Aggregate view over the configured currency and project.
    pub analytics: FinancialAnalytics,
    /// Project summary, when a project is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectFinancialSummary>,
}

/// Reads a snapshot from a file, or from stdin when `path` is `-`.
pub fn read_snapshot(path: &Path) -> AppResult<Snapshot> {
    if path.as_os_str() == STDIN_PATH {
        debug!("Reading snapshot from stdin");
        return parse_snapshot(std::io::stdin().lock());
    }

    debug!(path = %path.display(), "Reading snapshot");
    let file = std::fs::File::open(path)?;
    parse_snapshot(std::io::BufReader::new(file))
}

/// Parses a snapshot document. Missing collections default to empty.
pub fn parse_snapshot<R: Read>(reader: R) -> AppResult<Snapshot> {
    let snapshot: Snapshot = serde_json::from_reader(reader)?;

    info!(
        costs = snapshot.costs.len(),
        expenses = snapshot.expenses.len(),
        budgets = snapshot.budgets.len(),
        tasks = snapshot.tasks.len(),
        "Snapshot loaded"
    );

    Ok(snapshot)
}

/// Runs every configured view over the snapshot.
///
/// `today` anchors the trend when no `as_of` is configured.
#[must_use]
pub fn build(snapshot: &Snapshot, settings: &AnalyticsConfig, today: NaiveDate) -> Report {
    let mut query = AnalyticsQuery::new(settings.default_currency)
        .anchored_at(settings.as_of.unwrap_or(today));
    if let Some(project_id) = &settings.project_id {
        query = query.for_project(project_id.clone());
    }

    let analytics = AnalyticsService::calculate(
        &snapshot.costs,
        &snapshot.expenses,
        &snapshot.budgets,
        &query,
    );
    let project = settings.project_id.as_ref().map(|project_id| {
        ProjectAnalyticsService::financial_summary(snapshot, project_id, settings.default_currency)
    });

    Report { analytics, project }
}

/// Builds the report anchored at today (UTC) unless configured otherwise.
#[must_use]
pub fn build_now(snapshot: &Snapshot, settings: &AnalyticsConfig) -> Report {
    build(snapshot, settings, Utc::now().date_naive())
}

/// Serializes the report as JSON.
pub fn render(report: &Report, pretty: bool) -> AppResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    rendered.map_err(|e| AppError::Internal(format!("Failed to render report: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use finboard_shared::types::{Currency, ProjectId};
    use rust_decimal_macros::dec;

    const SNAPSHOT: &str = r#"{
        "costs": [
            {"amount": "250.00", "currency": "USD", "category": "food", "date": "2024-03-15", "projectId": "p1"},
            {"amount": 80, "currency": "USD", "category": "shopping", "date": "2024-03-02T10:00:00Z", "projectId": "p2"},
            {"amount": "abc", "currency": "EUR", "category": "food", "date": "2024-03-15"}
        ],
        "expenses": [
            {"amount": 60, "currency": "USD", "category": "food", "frequency": "weekly",
             "isActive": true, "startDate": "2024-01-01", "projectId": "p1"}
        ],
        "budgets": [
            {"amount": "1000", "currency": "USD", "category": "food", "period": "monthly",
             "startDate": "2024-01-01", "projectId": "p1"}
        ],
        "tasks": [
            {"projectId": "p1", "title": "Launch", "estimatedCost": "120.5"}
        ]
    }"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn settings(project: Option<&str>) -> AnalyticsConfig {
        AnalyticsConfig {
            default_currency: Currency::Usd,
            project_id: project.map(ProjectId::from),
            as_of: Some(date(2024, 3, 20)),
        }
    }

    #[test]
    fn test_parse_snapshot_defaults_missing_collections() {
        let snapshot = parse_snapshot(r#"{"costs": []}"#.as_bytes()).unwrap();
        assert!(snapshot.expenses.is_empty());
        assert!(snapshot.budgets.is_empty());
        assert!(snapshot.tasks.is_empty());
    }

    #[test]
    fn test_unknown_currency_record_is_skipped() {
        let input = r#"{"costs": [
            {"amount": 1, "currency": "JPY", "category": "food", "date": "2024-03-15"},
            {"amount": 4, "currency": "usd", "category": "food", "date": "2024-03-15"}
        ]}"#;
        let snapshot = parse_snapshot(input.as_bytes()).unwrap();
        let report = build(&snapshot, &settings(None), date(2030, 1, 1));

        assert_eq!(snapshot.costs.len(), 2);
        assert_eq!(report.analytics.total_costs, dec!(4));
    }

    #[test]
    fn test_parse_snapshot_rejects_malformed_json() {
        let err = parse_snapshot(r#"{"costs": ["#.as_bytes()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SNAPSHOT");
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_read_snapshot_missing_file() {
        let err = read_snapshot(Path::new("does/not/exist.json")).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_build_without_project() {
        let snapshot = parse_snapshot(SNAPSHOT.as_bytes()).unwrap();
        let report = build(&snapshot, &settings(None), date(2030, 1, 1));

        assert_eq!(report.analytics.total_costs, dec!(330));
        assert_eq!(report.analytics.total_expenses, dec!(259.80));
        assert_eq!(report.analytics.monthly_trend[5].month, "Mar 2024");
        assert!(report.project.is_none());
    }

    #[test]
    fn test_build_with_project() {
        let snapshot = parse_snapshot(SNAPSHOT.as_bytes()).unwrap();
        let report = build(&snapshot, &settings(Some("p1")), date(2030, 1, 1));

        assert_eq!(report.analytics.total_costs, dec!(250));
        let project = report.project.unwrap();
        assert_eq!(project.total_spent, dec!(509.80));
        assert_eq!(project.task_estimates.total_estimated_cost, dec!(120.5));
        assert_eq!(project.variance, dec!(369.70));
    }

    #[test]
    fn test_build_falls_back_to_today() {
        let mut settings = settings(None);
        settings.as_of = None;
        let report = build(&Snapshot::default(), &settings, date(2024, 7, 4));
        assert_eq!(report.analytics.monthly_trend[5].month, "Jul 2024");
    }

    #[test]
    fn test_render_omits_absent_project() {
        let report = build(&Snapshot::default(), &settings(None), date(2024, 3, 20));

        let compact = render(&report, false).unwrap();
        assert!(!compact.contains('\n'));
        assert!(!compact.contains("\"project\""));

        let pretty = render(&report, true).unwrap();
        assert!(pretty.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(value["analytics"]["currency"], "USD");
    }
}
