use crate::error::{AnalysisError, Result};
use crate::schema::PeriodRecord;
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Percentage growth between two adjacent periods for the headline measures.
/// `None` marks growth from a zero base, which has no defined percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRates {
    pub revenue: Option<f64>,
    pub total_assets: Option<f64>,
    pub total_equity: Option<f64>,
    pub total_liabilities: Option<f64>,
}

/// Compound annual growth rates across the whole period span, as fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CagrSummary {
    pub revenue: Option<f64>,
    pub total_assets: Option<f64>,
    pub total_equity: Option<f64>,
    pub total_liabilities: Option<f64>,
}

/// Multi-period comparison output: one growth entry per adjacent pair, keyed
/// `"{previousLabel}-{currentLabel}"`, plus the span-wide CAGR bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub period_count: usize,
    pub growth: BTreeMap<String, GrowthRates>,
    pub cagr: CagrSummary,
}

fn growth_pct(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        None
    } else {
        Some((current - previous) / previous * 100.0)
    }
}

// Undefined for a non-positive endpoint; a negative ratio has no real root.
fn cagr(first: f64, last: f64, spans: usize) -> Option<f64> {
    if first <= 0.0 || last <= 0.0 || spans == 0 {
        None
    } else {
        Some((last / first).powf(1.0 / spans as f64) - 1.0)
    }
}

/// Compare two or more chronologically ordered periods.
///
/// The caller owns the ordering; this function only checks that enough
/// periods were supplied.
pub fn compute_trends(periods: &[PeriodRecord]) -> Result<TrendResult> {
    if periods.len() < 2 {
        return Err(AnalysisError::InsufficientPeriods(periods.len()));
    }

    let mut growth = BTreeMap::new();
    for pair in periods.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        let key = format!("{}-{}", previous.period_label, current.period_label);
        growth.insert(
            key,
            GrowthRates {
                revenue: growth_pct(previous.data.revenue, current.data.revenue),
                total_assets: growth_pct(previous.data.total_assets, current.data.total_assets),
                total_equity: growth_pct(previous.data.total_equity, current.data.total_equity),
                total_liabilities: growth_pct(
                    previous.data.total_liabilities,
                    current.data.total_liabilities,
                ),
            },
        );
    }

    let first = &periods[0].data;
    let last = &periods[periods.len() - 1].data;
    let spans = periods.len() - 1;

    debug!(
        "trend comparison over {} periods ({} adjacent pairs)",
        periods.len(),
        spans
    );

    Ok(TrendResult {
        period_count: periods.len(),
        growth,
        cagr: CagrSummary {
            revenue: cagr(first.revenue, last.revenue, spans),
            total_assets: cagr(first.total_assets, last.total_assets, spans),
            total_equity: cagr(first.total_equity, last.total_equity, spans),
            total_liabilities: cagr(first.total_liabilities, last.total_liabilities, spans),
        },
    })
}
