//! The overview screen.
//!
//! Mock data is defined here and nowhere else. It stands in for the data
//! layer that would feed these widgets in the full suite.

use canteiro_shared::types::Money;
use rust_decimal::Decimal;
use serde::Serialize;

use super::alerts::AlertsPanel;
use super::kpi::{KpiCard, kpi_cards};
use super::projects::ProjectsTable;
use super::types::{
    Alert, AlertType, DashboardMetrics, FinancialStatus, ProjectStatus, ProjectSummary,
};
use crate::navigation::View;

/// Icon of a quick action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickActionIcon {
    /// Calculator.
    Calculator,
    /// Clipboard.
    Clipboard,
    /// Warning sign.
    Warning,
    /// Receipt.
    Receipt,
}

/// A shortcut into another module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    /// Button text.
    pub label: &'static str,
    /// Button icon.
    pub icon: QuickActionIcon,
    /// Screen opened on click.
    pub target: View,
}

/// The quick actions panel, fixed.
pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Novo Orçamento",
        icon: QuickActionIcon::Calculator,
        target: View::Budgeting,
    },
    QuickAction {
        label: "Novo RDO",
        icon: QuickActionIcon::Clipboard,
        target: View::SiteManagement,
    },
    QuickAction {
        label: "Registar Ocorrência",
        icon: QuickActionIcon::Warning,
        target: View::Compliance,
    },
    QuickAction {
        label: "Nova Fatura",
        icon: QuickActionIcon::Receipt,
        target: View::Invoicing,
    },
];

/// Billing tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BillingSummary {
    /// Invoiced this month.
    pub invoiced: Money,
    /// Still to be received.
    pub pending: Money,
    /// Invoices still open.
    pub pending_invoices: u32,
    /// Screen opened by the tile link.
    pub target: View,
}

/// Everything the overview screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    /// Five KPI cards.
    pub kpis: [KpiCard; 5],
    /// Alerts widget.
    pub alerts: AlertsPanel,
    /// Projects widget.
    pub projects: ProjectsTable,
    /// Quick actions.
    pub quick_actions: [QuickAction; 4],
    /// Billing tile.
    pub billing: BillingSummary,
}

impl DashboardOverview {
    /// Composes the widgets from the given records.
    #[must_use]
    pub fn compose(
        metrics: &DashboardMetrics,
        alerts: &[Alert],
        projects: &[ProjectSummary],
        billing: BillingSummary,
    ) -> Self {
        Self {
            kpis: kpi_cards(metrics),
            alerts: AlertsPanel::from_alerts(alerts),
            projects: ProjectsTable::from_projects(projects),
            quick_actions: QUICK_ACTIONS,
            billing,
        }
    }

    /// The overview with the built-in mock data.
    #[must_use]
    pub fn mock() -> Self {
        Self::compose(
            &mock_metrics(),
            &mock_alerts(),
            &mock_projects(),
            mock_billing(),
        )
    }
}

/// Mock KPI snapshot.
#[must_use]
pub fn mock_metrics() -> DashboardMetrics {
    DashboardMetrics {
        active_works: 12,
        budgets_in_review: 5,
        financial_deviation: Decimal::new(-1_245_000, 2),
        compliance_rate: 94,
        overdue_tasks: 3,
    }
}

fn alert(id: &str, alert_type: AlertType, message: &str, timestamp: &str, module: &str) -> Alert {
    Alert {
        id: id.to_string(),
        alert_type,
        message: message.to_string(),
        timestamp: timestamp.to_string(),
        module: module.to_string(),
    }
}

/// Mock alerts, in display order.
#[must_use]
pub fn mock_alerts() -> Vec<Alert> {
    vec![
        alert(
            "1",
            AlertType::Critical,
            "Seguro de responsabilidade civil da obra Edifício Aurora expira em 3 dias",
            "Há 10 min",
            "Conformidade",
        ),
        alert(
            "2",
            AlertType::Warning,
            "Orçamento da Moradia T3 Braga ultrapassou 85% do previsto",
            "Há 1 hora",
            "Financeiro",
        ),
        alert(
            "3",
            AlertType::Warning,
            "RDO de ontem por submeter na obra Armazém Logístico Maia",
            "Há 3 horas",
            "Gestão de Obra",
        ),
        alert(
            "4",
            AlertType::Info,
            "Nova versão da tabela de preços de materiais disponível",
            "Ontem",
            "Preços",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    name: &str,
    client: &str,
    location: &str,
    status: ProjectStatus,
    progress: i32,
    next_milestone: &str,
    financial_status: FinancialStatus,
) -> ProjectSummary {
    ProjectSummary {
        id: id.to_string(),
        name: name.to_string(),
        client: client.to_string(),
        location: location.to_string(),
        status,
        progress,
        next_milestone: next_milestone.to_string(),
        financial_status,
    }
}

/// Mock projects, in display order.
#[must_use]
pub fn mock_projects() -> Vec<ProjectSummary> {
    vec![
        project(
            "OB-2024-001",
            "Edifício Aurora",
            "Imobiliária Norte, S.A.",
            "Porto",
            ProjectStatus::Execution,
            65,
            "Cobertura - 15 Nov",
            FinancialStatus::OnTrack,
        ),
        project(
            "OB-2024-002",
            "Moradia T3 Braga",
            "Família Costa",
            "Braga",
            ProjectStatus::Delayed,
            42,
            "Instalações elétricas - 02 Nov",
            FinancialStatus::OverBudget,
        ),
        project(
            "OB-2024-003",
            "Armazém Logístico Maia",
            "LogiNorte, Lda.",
            "Maia",
            ProjectStatus::Planning,
            10,
            "Licenciamento - 30 Nov",
            FinancialStatus::OnTrack,
        ),
        project(
            "OB-2023-014",
            "Reabilitação Ribeira",
            "Câmara Municipal do Porto",
            "Porto",
            ProjectStatus::Completed,
            100,
            "Receção definitiva",
            FinancialStatus::OnTrack,
        ),
    ]
}

/// Mock billing tile.
#[must_use]
pub fn mock_billing() -> BillingSummary {
    BillingSummary {
        invoiced: Money::eur(Decimal::new(18_450_000, 2)),
        pending: Money::eur(Decimal::new(4_230_050, 2)),
        pending_invoices: 7,
        target: View::Invoicing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::kpi::Palette;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mock_overview_is_stable() {
        assert_eq!(DashboardOverview::mock(), DashboardOverview::mock());
    }

    #[test]
    fn test_mock_overview_contents() {
        let overview = DashboardOverview::mock();
        assert_eq!(overview.kpis[2].value, "-12.450,00 €");
        assert_eq!(overview.kpis[2].palette, Palette::Red);
        assert_eq!(overview.alerts.len(), 4);
        assert_eq!(overview.projects.rows.len(), 4);
        assert_eq!(overview.billing.target, View::Invoicing);
        assert_eq!(overview.billing.invoiced.amount, dec!(184500));
    }

    #[test]
    fn test_quick_actions_target_workspace_views() {
        let rdo = QUICK_ACTIONS
            .iter()
            .find(|a| a.label == "Novo RDO")
            .map(|a| a.target);
        assert_eq!(rdo, Some(View::SiteManagement));
    }

    #[test]
    fn test_compose_with_no_alerts() {
        let overview =
            DashboardOverview::compose(&mock_metrics(), &[], &mock_projects(), mock_billing());
        assert!(overview.alerts.is_empty());
    }
}
