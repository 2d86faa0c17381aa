//! Dashboard display records.
//!
//! These are snapshots handed to the widgets; nothing here is persisted or
//! mutated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline metrics shown as KPI cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Works currently in execution.
    pub active_works: u32,
    /// Budgets waiting for review.
    pub budgets_in_review: u32,
    /// Deviation against the planned budget, in euros. Positive is favorable.
    pub financial_deviation: Decimal,
    /// Percentage of compliance checks passed.
    pub compliance_rate: u32,
    /// Tasks past their due date.
    pub overdue_tasks: u32,
}

/// Alert severity.
///
/// Values that arrive from JSON and are not recognized are kept as
/// `Unrecognized` and styled as `Info`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlertType {
    /// Needs immediate action.
    Critical,
    /// Needs attention soon.
    Warning,
    /// Informational.
    Info,
    /// Raw value not known to this build.
    Unrecognized(String),
}

impl AlertType {
    /// Wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for AlertType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "CRITICAL" => Self::Critical,
            "WARNING" => Self::Warning,
            "INFO" => Self::Info,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<AlertType> for String {
    fn from(value: AlertType) -> Self {
        match value {
            AlertType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// An alert raised by one of the suite's modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Alert ID.
    pub id: String,
    /// Severity.
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Human readable message.
    pub message: String,
    /// Pre-formatted timestamp, shown as is.
    pub timestamp: String,
    /// Module that raised the alert.
    pub module: String,
}

/// Lifecycle status of a project.
///
/// Unknown values from JSON are kept verbatim so the badge can show them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    /// Being planned.
    Planning,
    /// On site.
    Execution,
    /// Behind schedule.
    Delayed,
    /// Handed over.
    Completed,
    /// Raw value not known to this build.
    Unrecognized(String),
}

impl ProjectStatus {
    /// Wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Planning => "PLANNING",
            Self::Execution => "EXECUTION",
            Self::Delayed => "DELAYED",
            Self::Completed => "COMPLETED",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PLANNING" => Self::Planning,
            "EXECUTION" => Self::Execution,
            "DELAYED" => Self::Delayed,
            "COMPLETED" => Self::Completed,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        match value {
            ProjectStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Financial health of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinancialStatus {
    /// Within budget.
    OnTrack,
    /// Spending above budget.
    OverBudget,
}

/// One row of the projects table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project ID.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Client name.
    pub client: String,
    /// Site location.
    pub location: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Completion percentage. Not clamped.
    pub progress: i32,
    /// Next milestone, free text.
    pub next_milestone: String,
    /// Financial health.
    pub financial_status: FinancialStatus,
}
