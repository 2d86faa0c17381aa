//! Dashboard widgets.

use askama::Template;
use canteiro_core::dashboard::{
    AlertIcon, AlertTone, AlertsPanel, BadgeTone, DashboardOverview, KpiCard, KpiIcon, Palette,
    ProgressVariant, ProjectsTable, QuickActionIcon, Trend,
};
use canteiro_core::navigation::ShellAction;
use canteiro_shared::AppResult;

use super::{RenderContext, render};

const fn palette_class(palette: Palette) -> &'static str {
    match palette {
        Palette::Neutral => "bg-slate-100 text-slate-600",
        Palette::Blue => "bg-blue-50 text-blue-600",
        Palette::Green => "bg-green-50 text-green-600",
        Palette::Red => "bg-red-50 text-red-600",
        Palette::Emerald => "bg-emerald-50 text-emerald-600",
        Palette::Yellow => "bg-yellow-50 text-yellow-600",
    }
}

const fn palette_name(palette: Palette) -> &'static str {
    match palette {
        Palette::Neutral => "neutral",
        Palette::Blue => "blue",
        Palette::Green => "green",
        Palette::Red => "red",
        Palette::Emerald => "emerald",
        Palette::Yellow => "yellow",
    }
}

const fn kpi_glyph(icon: KpiIcon) -> &'static str {
    match icon {
        KpiIcon::HardHat => "👷",
        KpiIcon::FileText => "📄",
        KpiIcon::Wallet => "💶",
        KpiIcon::ShieldCheck => "🛡",
        KpiIcon::Clock => "⏰",
    }
}

const fn alert_glyph(icon: AlertIcon) -> &'static str {
    match icon {
        AlertIcon::Critical => "⛔",
        AlertIcon::Warning => "⚠",
        AlertIcon::Info => "ℹ",
    }
}

const fn alert_tone_class(tone: AlertTone) -> &'static str {
    match tone {
        AlertTone::Red => "bg-red-50 border-red-100 text-red-700",
        AlertTone::Amber => "bg-amber-50 border-amber-100 text-amber-700",
        AlertTone::Blue => "bg-blue-50 border-blue-100 text-blue-700",
    }
}

const fn badge_class(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Blue => "bg-blue-100 text-blue-700",
        BadgeTone::Green => "bg-green-100 text-green-700",
        BadgeTone::Red => "bg-red-100 text-red-700",
        BadgeTone::Neutral => "bg-slate-100 text-slate-700",
    }
}

const fn quick_action_glyph(icon: QuickActionIcon) -> &'static str {
    match icon {
        QuickActionIcon::Calculator => "🧮",
        QuickActionIcon::Clipboard => "📋",
        QuickActionIcon::Warning => "⚠",
        QuickActionIcon::Receipt => "🧾",
    }
}

struct KpiView<'a> {
    title: &'a str,
    value: &'a str,
    subtext: &'a str,
    palette: &'static str,
    palette_class: &'static str,
    glyph: &'static str,
    /// `up`, `down`, or empty for no arrow.
    trend: &'static str,
    trend_class: &'static str,
    arrow: &'static str,
}

impl<'a> From<&'a KpiCard> for KpiView<'a> {
    fn from(card: &'a KpiCard) -> Self {
        let (trend, trend_class, arrow) = match card.trend {
            Some(Trend::Up) => ("up", "text-green-600", "↑"),
            Some(Trend::Down) => ("down", "text-red-600", "↓"),
            None => ("", "", ""),
        };
        Self {
            title: card.title,
            value: &card.value,
            subtext: card.subtext,
            palette: palette_name(card.palette),
            palette_class: palette_class(card.palette),
            glyph: kpi_glyph(card.icon),
            trend,
            trend_class,
            arrow,
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard/kpis.html")]
struct Kpis<'a> {
    cards: Vec<KpiView<'a>>,
}

struct AlertView<'a> {
    id: &'a str,
    kind: &'a str,
    tone_class: &'static str,
    glyph: &'static str,
    message: &'a str,
    module: &'a str,
    timestamp: &'a str,
}

#[derive(Template)]
#[template(path = "dashboard/alerts.html")]
struct Alerts<'a> {
    all_clear: bool,
    critical_count: usize,
    items: Vec<AlertView<'a>>,
}

struct ProjectView<'a> {
    id: &'a str,
    name: &'a str,
    client: &'a str,
    location: &'a str,
    badge: &'a str,
    badge_class: &'static str,
    variant: &'static str,
    variant_class: &'static str,
    percent: i32,
    out_of_range: bool,
    milestone: &'a str,
    financial: &'static str,
    financial_class: &'static str,
}

#[derive(Template)]
#[template(path = "dashboard/projects.html")]
struct Projects<'a> {
    rows: Vec<ProjectView<'a>>,
}

#[derive(Template)]
#[template(path = "dashboard/overview.html")]
struct Overview {
    kpis: String,
    projects: String,
    alerts: String,
    actions: Vec<String>,
    invoiced: String,
    pending: String,
    pending_invoices: u32,
    billing_link: String,
}

/// Full overview screen.
pub(super) fn overview(ctx: &RenderContext<'_>, overview: &DashboardOverview) -> AppResult<String> {
    let actions = overview
        .quick_actions
        .iter()
        .map(|action| {
            ctx.icon_button(
                ShellAction::Navigate(action.target),
                "flex flex-col items-center gap-2 rounded-xl border border-slate-200 p-4 text-sm font-medium hover:border-orange-300 hover:bg-orange-50",
                quick_action_glyph(action.icon),
                "text-2xl",
                action.label,
            )
        })
        .collect::<AppResult<Vec<_>>>()?;

    let billing = &overview.billing;
    render(&Overview {
        kpis: kpis(&overview.kpis)?,
        projects: projects(&overview.projects)?,
        alerts: alerts(&overview.alerts)?,
        actions,
        invoiced: billing.invoiced.to_string(),
        pending: billing.pending.to_string(),
        pending_invoices: billing.pending_invoices,
        billing_link: ctx.action_button(
            ShellAction::Navigate(billing.target),
            "rounded-lg bg-white/10 px-3 py-1.5 text-sm hover:bg-white/20",
            "Ver faturação",
        )?,
    })
}

fn kpis(cards: &[KpiCard]) -> AppResult<String> {
    render(&Kpis {
        cards: cards.iter().map(KpiView::from).collect(),
    })
}

fn alerts(panel: &AlertsPanel) -> AppResult<String> {
    let (critical_count, items) = match panel {
        AlertsPanel::AllClear => (0, Vec::new()),
        AlertsPanel::Items {
            critical_count,
            items,
        } => (
            *critical_count,
            items
                .iter()
                .map(|item| AlertView {
                    id: &item.alert.id,
                    kind: item.alert.alert_type.as_str(),
                    tone_class: alert_tone_class(item.style.tone),
                    glyph: alert_glyph(item.style.icon),
                    message: &item.alert.message,
                    module: &item.alert.module,
                    timestamp: &item.alert.timestamp,
                })
                .collect(),
        ),
    };
    render(&Alerts {
        all_clear: panel.is_empty(),
        critical_count,
        items,
    })
}

fn projects(table: &ProjectsTable) -> AppResult<String> {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let (variant, variant_class) = match row.progress.variant {
                ProgressVariant::Accent => ("accent", "bg-orange-500"),
                ProgressVariant::Danger => ("danger", "bg-red-500"),
            };
            ProjectView {
                id: &row.project.id,
                name: &row.project.name,
                client: &row.project.client,
                location: &row.project.location,
                badge: &row.badge.label,
                badge_class: badge_class(row.badge.tone),
                variant,
                variant_class,
                percent: row.progress.percent,
                out_of_range: row.progress.out_of_range,
                milestone: &row.project.next_milestone,
                financial: row.financial.label,
                financial_class: match row.financial.tone {
                    BadgeTone::Red => "text-red-600",
                    _ => "text-green-600",
                },
            }
        })
        .collect();
    render(&Projects { rows })
}
