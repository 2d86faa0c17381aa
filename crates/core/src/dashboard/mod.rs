//! Dashboard widgets and the overview screen.
//!
//! This module turns display records into widget view models:
//! - KPI cards with their trend and palette policy
//! - The alerts list with per-severity styling
//! - The projects table with status badges and progress bars
//! - The overview screen that composes all of the above

pub mod alerts;
pub mod kpi;
pub mod overview;
pub mod projects;
pub mod types;

#[cfg(test)]
mod kpi_props;

pub use alerts::{AlertIcon, AlertItem, AlertStyle, AlertTone, AlertsPanel};
pub use kpi::{KpiCard, KpiIcon, Palette, Trend, kpi_cards};
pub use overview::{BillingSummary, DashboardOverview, QuickAction, QuickActionIcon};
pub use projects::{
    BadgeTone, FinancialIndicator, ProgressBar, ProgressVariant, ProjectRow, ProjectsTable,
    StatusBadge,
};
pub use types::*;
