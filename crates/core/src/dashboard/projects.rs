//! Projects table.

use serde::Serialize;

use super::types::{FinancialStatus, ProjectStatus, ProjectSummary};

/// Badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    /// Planning.
    Blue,
    /// In execution, on track.
    Green,
    /// Delayed, over budget.
    Red,
    /// Completed or unknown.
    Neutral,
}

/// Status pill shown in the status column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    /// Text.
    pub label: String,
    /// Color.
    pub tone: BadgeTone,
}

impl StatusBadge {
    /// Badge for a status. Unrecognized statuses show the raw value.
    #[must_use]
    pub fn for_status(status: &ProjectStatus) -> Self {
        let (label, tone) = match status {
            ProjectStatus::Planning => ("Planeamento", BadgeTone::Blue),
            ProjectStatus::Execution => ("Em Execução", BadgeTone::Green),
            ProjectStatus::Delayed => ("Atrasado", BadgeTone::Red),
            ProjectStatus::Completed => ("Concluído", BadgeTone::Neutral),
            ProjectStatus::Unrecognized(raw) => {
                return Self {
                    label: raw.clone(),
                    tone: BadgeTone::Neutral,
                };
            }
        };
        Self {
            label: label.to_string(),
            tone,
        }
    }
}

/// Fill color of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressVariant {
    /// Default accent color.
    Accent,
    /// Red, for delayed projects.
    Danger,
}

/// Progress bar. `percent` is used as the width as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressBar {
    /// Width in percent, not clamped.
    pub percent: i32,
    /// Fill color.
    pub variant: ProgressVariant,
    /// Width falls outside 0..=100 and overflows the track.
    pub out_of_range: bool,
}

impl ProgressBar {
    /// Bar for a project.
    #[must_use]
    pub fn for_project(project: &ProjectSummary) -> Self {
        Self {
            percent: project.progress,
            out_of_range: !(0..=100).contains(&project.progress),
            variant: if project.status == ProjectStatus::Delayed {
                ProgressVariant::Danger
            } else {
                ProgressVariant::Accent
            },
        }
    }
}

/// Budget indicator shown under the milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinancialIndicator {
    /// Text.
    pub label: &'static str,
    /// Color.
    pub tone: BadgeTone,
}

impl FinancialIndicator {
    /// Indicator for a financial status.
    #[must_use]
    pub const fn for_status(status: FinancialStatus) -> Self {
        match status {
            FinancialStatus::OnTrack => Self {
                label: "Dentro do orçamento",
                tone: BadgeTone::Green,
            },
            FinancialStatus::OverBudget => Self {
                label: "Acima do orçamento",
                tone: BadgeTone::Red,
            },
        }
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRow {
    /// The project as received.
    pub project: ProjectSummary,
    /// Status pill.
    pub badge: StatusBadge,
    /// Progress bar.
    pub progress: ProgressBar,
    /// Budget indicator.
    pub financial: FinancialIndicator,
}

impl ProjectRow {
    /// Resolves the presentation of one project.
    #[must_use]
    pub fn from_summary(project: &ProjectSummary) -> Self {
        Self {
            badge: StatusBadge::for_status(&project.status),
            progress: ProgressBar::for_project(project),
            financial: FinancialIndicator::for_status(project.financial_status),
            project: project.clone(),
        }
    }
}

/// The projects widget. Rows keep input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsTable {
    /// Rows.
    pub rows: Vec<ProjectRow>,
}

impl ProjectsTable {
    /// Builds the table.
    #[must_use]
    pub fn from_projects(projects: &[ProjectSummary]) -> Self {
        Self {
            rows: projects.iter().map(ProjectRow::from_summary).collect(),
        }
    }
}
