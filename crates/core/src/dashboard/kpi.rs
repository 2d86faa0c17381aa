//! KPI cards.
//!
//! The thresholds below are presentation policy. They only decide colors and
//! trend arrows and must stay a deterministic function of the metrics.

use canteiro_shared::types::Money;
use rust_decimal::Decimal;
use serde::Serialize;

use super::types::DashboardMetrics;

/// Compliance rates strictly above this are shown in emerald.
pub const COMPLIANCE_TARGET: u32 = 90;

/// Direction of the trend arrow on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
}

/// Color family of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    /// Gray.
    Neutral,
    /// Brand accent.
    Blue,
    /// Favorable money figures.
    Green,
    /// Needs attention.
    Red,
    /// Healthy compliance.
    Emerald,
    /// Compliance below target.
    Yellow,
}

/// Icon shown in the card corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiIcon {
    /// Active works.
    HardHat,
    /// Budgets in review.
    FileText,
    /// Financial deviation.
    Wallet,
    /// Compliance.
    ShieldCheck,
    /// Overdue tasks.
    Clock,
}

/// A single KPI tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    /// Card title.
    pub title: &'static str,
    /// Main figure, already formatted.
    pub value: String,
    /// Small line under the figure.
    pub subtext: &'static str,
    /// Corner icon.
    pub icon: KpiIcon,
    /// Trend arrow, if the card has one.
    pub trend: Option<Trend>,
    /// Color family.
    pub palette: Palette,
}

/// Lays out the five dashboard cards, always in the same order.
#[must_use]
pub fn kpi_cards(metrics: &DashboardMetrics) -> [KpiCard; 5] {
    [
        KpiCard {
            title: "Obras Ativas",
            value: metrics.active_works.to_string(),
            subtext: "Em execução",
            icon: KpiIcon::HardHat,
            trend: None,
            palette: Palette::Blue,
        },
        KpiCard {
            title: "Orçamentos em Análise",
            value: metrics.budgets_in_review.to_string(),
            subtext: "Aguardam aprovação",
            icon: KpiIcon::FileText,
            trend: None,
            palette: Palette::Neutral,
        },
        deviation_card(metrics.financial_deviation),
        compliance_card(metrics.compliance_rate),
        overdue_card(metrics.overdue_tasks),
    ]
}

/// Trend and palette follow the sign of the amount as displayed, in cents.
fn deviation_card(deviation: Decimal) -> KpiCard {
    let shown = Money::eur(deviation).to_cents();
    let favorable = !shown.is_negative();
    KpiCard {
        title: "Desvio Financeiro",
        value: shown.to_signed_string(),
        subtext: "Face ao orçamento previsto",
        icon: KpiIcon::Wallet,
        trend: Some(if favorable { Trend::Up } else { Trend::Down }),
        palette: if favorable { Palette::Green } else { Palette::Red },
    }
}

fn compliance_card(rate: u32) -> KpiCard {
    KpiCard {
        title: "Taxa de Conformidade",
        value: format!("{rate}%"),
        subtext: "Meta acima de 90%",
        icon: KpiIcon::ShieldCheck,
        trend: None,
        palette: if rate > COMPLIANCE_TARGET {
            Palette::Emerald
        } else {
            Palette::Yellow
        },
    }
}

fn overdue_card(overdue: u32) -> KpiCard {
    KpiCard {
        title: "Tarefas em Atraso",
        value: overdue.to_string(),
        subtext: if overdue > 0 {
            "Requer atenção"
        } else {
            "Sem atrasos"
        },
        icon: KpiIcon::Clock,
        trend: None,
        palette: if overdue > 0 {
            Palette::Red
        } else {
            Palette::Neutral
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn metrics() -> DashboardMetrics {
        DashboardMetrics {
            active_works: 12,
            budgets_in_review: 4,
            financial_deviation: dec!(12500),
            compliance_rate: 94,
            overdue_tasks: 3,
        }
    }

    #[test]
    fn test_cards_order_and_values() {
        let cards = kpi_cards(&metrics());
        let titles: Vec<_> = cards.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            [
                "Obras Ativas",
                "Orçamentos em Análise",
                "Desvio Financeiro",
                "Taxa de Conformidade",
                "Tarefas em Atraso"
            ]
        );
        assert_eq!(cards[0].value, "12");
        assert_eq!(cards[1].value, "4");
        assert_eq!(cards[2].value, "+12.500,00 €");
        assert_eq!(cards[3].value, "94%");
        assert_eq!(cards[4].value, "3");
    }

    #[test]
    fn test_zero_deviation_counts_as_up() {
        let card = deviation_card(Decimal::ZERO);
        assert_eq!(card.trend, Some(Trend::Up));
        assert_eq!(card.palette, Palette::Green);
    }

    #[test]
    fn test_sub_cent_deviation_follows_displayed_sign() {
        let card = deviation_card(dec!(-0.004));
        assert_eq!(card.value, "+0,00 €");
        assert_eq!(card.trend, Some(Trend::Up));
        assert_eq!(card.palette, Palette::Green);

        let card = deviation_card(dec!(-0.006));
        assert_eq!(card.value, "-0,01 €");
        assert_eq!(card.trend, Some(Trend::Down));
        assert_eq!(card.palette, Palette::Red);
    }

    #[test]
    fn test_compliance_boundary() {
        assert_eq!(compliance_card(90).palette, Palette::Yellow);
        assert_eq!(compliance_card(91).palette, Palette::Emerald);
    }

    #[test]
    fn test_no_overdue_tasks_is_neutral() {
        let card = overdue_card(0);
        assert_eq!(card.palette, Palette::Neutral);
        assert_eq!(card.subtext, "Sem atrasos");
    }

    #[test]
    fn test_cards_are_deterministic() {
        assert_eq!(kpi_cards(&metrics()), kpi_cards(&metrics()));
    }
}
