//! Workspace views.

use serde::{Deserialize, Serialize};

use super::error::NavigationError;

/// Identifier of a workspace screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    /// Overview.
    Dashboard,
    /// Budgets.
    Budgeting,
    /// Site management and daily reports.
    SiteManagement,
    /// Schedule.
    Schedule,
    /// Tasks.
    Tasks,
    /// Team.
    Team,
    /// Compliance.
    Compliance,
    /// Approvals.
    Approvals,
    /// Financials.
    Financial,
    /// Reports.
    Reports,
    /// Plans and drawings.
    Plans,
    /// Price database.
    Prices,
    /// Article catalog.
    Articles,
    /// Company settings.
    CompanySettings,
    /// Support.
    Support,
    /// Invoicing.
    Invoicing,
}

impl View {
    /// Every view, in sidebar order.
    pub const ALL: [Self; 16] = [
        Self::Dashboard,
        Self::Budgeting,
        Self::SiteManagement,
        Self::Schedule,
        Self::Tasks,
        Self::Team,
        Self::Compliance,
        Self::Approvals,
        Self::Financial,
        Self::Reports,
        Self::Plans,
        Self::Prices,
        Self::Articles,
        Self::CompanySettings,
        Self::Support,
        Self::Invoicing,
    ];

    /// Label shown in the sidebar and page header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Painel Geral",
            Self::Budgeting => "Orçamentação",
            Self::SiteManagement => "Gestão de Obra",
            Self::Schedule => "Cronograma",
            Self::Tasks => "Tarefas",
            Self::Team => "Equipa",
            Self::Compliance => "Conformidade",
            Self::Approvals => "Aprovações",
            Self::Financial => "Financeiro",
            Self::Reports => "Relatórios",
            Self::Plans => "Planos",
            Self::Prices => "Preços",
            Self::Articles => "Artigos",
            Self::CompanySettings => "Gestão da Empresa",
            Self::Support => "Suporte",
            Self::Invoicing => "Faturação",
        }
    }

    /// URL-friendly name, used in form tokens and API paths.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Budgeting => "budgeting",
            Self::SiteManagement => "site-management",
            Self::Schedule => "schedule",
            Self::Tasks => "tasks",
            Self::Team => "team",
            Self::Compliance => "compliance",
            Self::Approvals => "approvals",
            Self::Financial => "financial",
            Self::Reports => "reports",
            Self::Plans => "plans",
            Self::Prices => "prices",
            Self::Articles => "articles",
            Self::CompanySettings => "company-settings",
            Self::Support => "support",
            Self::Invoicing => "invoicing",
        }
    }

    /// Wire name (`SITE_MANAGEMENT`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "DASHBOARD",
            Self::Budgeting => "BUDGETING",
            Self::SiteManagement => "SITE_MANAGEMENT",
            Self::Schedule => "SCHEDULE",
            Self::Tasks => "TASKS",
            Self::Team => "TEAM",
            Self::Compliance => "COMPLIANCE",
            Self::Approvals => "APPROVALS",
            Self::Financial => "FINANCIAL",
            Self::Reports => "REPORTS",
            Self::Plans => "PLANS",
            Self::Prices => "PRICES",
            Self::Articles => "ARTICLES",
            Self::CompanySettings => "COMPANY_SETTINGS",
            Self::Support => "SUPPORT",
            Self::Invoicing => "INVOICING",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for View {
    type Err = NavigationError;

    /// Accepts the wire name or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s || v.slug() == s)
            .ok_or_else(|| NavigationError::UnknownView(s.to_string()))
    }
}

/// A view name from an untyped source, which may not be known to this build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRef {
    /// A known view.
    Known(View),
    /// Anything else, kept verbatim.
    Unknown(String),
}

impl ViewRef {
    /// Parses without failing.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse()
            .map_or_else(|_| Self::Unknown(raw.to_string()), Self::Known)
    }

    /// Label for headers and placeholders. Unknown values show themselves.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Known(view) => view.label(),
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<View> for ViewRef {
    fn from(view: View) -> Self {
        Self::Known(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_views_are_distinct() {
        let slugs: HashSet<_> = View::ALL.iter().map(|v| v.slug()).collect();
        let names: HashSet<_> = View::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(slugs.len(), View::ALL.len());
        assert_eq!(names.len(), View::ALL.len());
    }

    #[test]
    fn test_wire_name_matches_serde() {
        for view in View::ALL {
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.as_str()));
        }
    }

    #[test]
    fn test_from_str_accepts_slug_and_wire_name() {
        assert_eq!("SITE_MANAGEMENT".parse::<View>().unwrap(), View::SiteManagement);
        assert_eq!("site-management".parse::<View>().unwrap(), View::SiteManagement);
        assert!(matches!(
            "warehouse".parse::<View>(),
            Err(NavigationError::UnknownView(raw)) if raw == "warehouse"
        ));
    }

    #[test]
    fn test_view_ref_keeps_unknown_value() {
        assert_eq!(ViewRef::parse("invoicing"), ViewRef::Known(View::Invoicing));
        let unknown = ViewRef::parse("WAREHOUSE");
        assert_eq!(unknown, ViewRef::Unknown("WAREHOUSE".into()));
        assert_eq!(unknown.label(), "WAREHOUSE");
    }
}
