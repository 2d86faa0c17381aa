//! Property-based tests for the KPI card policy.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::kpi::{Palette, Trend, kpi_cards};
use super::types::DashboardMetrics;

/// Strategy for deviations, positive and negative, down to sub-cent scales.
fn arb_deviation() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        (-10_000i64..10_000i64, 3u32..=6).prop_map(|(units, scale)| Decimal::new(units, scale)),
    ]
}

fn arb_metrics() -> impl Strategy<Value = DashboardMetrics> {
    (0u32..500, 0u32..500, arb_deviation(), 0u32..=100, 0u32..200).prop_map(
        |(active_works, budgets_in_review, financial_deviation, compliance_rate, overdue_tasks)| {
            DashboardMetrics {
                active_works,
                budgets_in_review,
                financial_deviation,
                compliance_rate,
                overdue_tasks,
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A deviation that displays as non-negative is an up trend in green,
    /// one that displays as negative is down in red.
    #[test]
    fn prop_deviation_trend_and_palette(metrics in arb_metrics()) {
        let card = &kpi_cards(&metrics)[2];
        if metrics.financial_deviation.round_dp(2) >= Decimal::ZERO {
            prop_assert_eq!(card.trend, Some(Trend::Up));
            prop_assert_eq!(card.palette, Palette::Green);
            prop_assert!(card.value.starts_with('+'));
        } else {
            prop_assert_eq!(card.trend, Some(Trend::Down));
            prop_assert_eq!(card.palette, Palette::Red);
            prop_assert!(card.value.starts_with('-'));
        }
        prop_assert_eq!(card.value.starts_with('+'), card.trend == Some(Trend::Up));
    }

    /// Compliance above 90 is emerald, anything else is yellow.
    #[test]
    fn prop_compliance_palette(metrics in arb_metrics()) {
        let card = &kpi_cards(&metrics)[3];
        let expected = if metrics.compliance_rate > 90 { Palette::Emerald } else { Palette::Yellow };
        prop_assert_eq!(card.palette, expected);
    }

    /// Any overdue task turns the card red.
    #[test]
    fn prop_overdue_palette(metrics in arb_metrics()) {
        let card = &kpi_cards(&metrics)[4];
        let expected = if metrics.overdue_tasks > 0 { Palette::Red } else { Palette::Neutral };
        prop_assert_eq!(card.palette, expected);
    }

    /// Rendering twice from the same snapshot gives the same cards.
    #[test]
    fn prop_cards_deterministic(metrics in arb_metrics()) {
        prop_assert_eq!(kpi_cards(&metrics), kpi_cards(&metrics.clone()));
    }
}
