//! Alerts list.

use serde::Serialize;

use super::types::{Alert, AlertType};

/// Icon drawn next to an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertIcon {
    /// Octagon with exclamation mark.
    Critical,
    /// Triangle with exclamation mark.
    Warning,
    /// Circled "i".
    Info,
}

/// Background and icon color of an alert row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertTone {
    /// Critical.
    Red,
    /// Warning.
    Amber,
    /// Informational.
    Blue,
}

/// Visual treatment of one alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertStyle {
    /// Icon.
    pub icon: AlertIcon,
    /// Color.
    pub tone: AlertTone,
}

impl AlertStyle {
    /// Style for a severity. Unrecognized severities look like `Info`.
    #[must_use]
    pub fn for_type(alert_type: &AlertType) -> Self {
        match alert_type {
            AlertType::Critical => Self {
                icon: AlertIcon::Critical,
                tone: AlertTone::Red,
            },
            AlertType::Warning => Self {
                icon: AlertIcon::Warning,
                tone: AlertTone::Amber,
            },
            AlertType::Info | AlertType::Unrecognized(_) => Self {
                icon: AlertIcon::Info,
                tone: AlertTone::Blue,
            },
        }
    }
}

/// An alert together with its style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertItem {
    /// The alert as received.
    #[serde(flatten)]
    pub alert: Alert,
    /// Resolved style.
    pub style: AlertStyle,
}

/// The alerts widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AlertsPanel {
    /// Nothing to report; rendered as "Tudo em dia!".
    AllClear,
    /// Alerts in the order they were given.
    Items {
        /// Number of critical alerts, shown as a header badge.
        critical_count: usize,
        /// Styled alerts, input order preserved.
        items: Vec<AlertItem>,
    },
}

impl AlertsPanel {
    /// Builds the panel. Order is never changed.
    #[must_use]
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        if alerts.is_empty() {
            return Self::AllClear;
        }

        let items: Vec<AlertItem> = alerts
            .iter()
            .map(|alert| AlertItem {
                style: AlertStyle::for_type(&alert.alert_type),
                alert: alert.clone(),
            })
            .collect();
        let critical_count = alerts
            .iter()
            .filter(|a| a.alert_type == AlertType::Critical)
            .count();

        Self::Items {
            critical_count,
            items,
        }
    }

    /// Number of rendered list items.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::AllClear => 0,
            Self::Items { items, .. } => items.len(),
        }
    }

    /// True for the "all clear" state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::AllClear)
    }
}
