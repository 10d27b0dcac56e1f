use crate::metrics::MetricsSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{}", label)
    }
}

/// Cutoffs for the three scored dimensions.
///
/// `default()` is the canonical table. `strict()` doubles the solvency
/// cutoffs and exists for callers that only report risk and want the more
/// conservative debt-to-equity reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskThresholds {
    /// Current ratio below this is high liquidity risk.
    pub liquidity_high: f64,
    /// Current ratio below this (but not high) is medium liquidity risk.
    pub liquidity_medium: f64,
    /// Debt-to-equity above this is medium solvency risk.
    pub solvency_medium: f64,
    /// Debt-to-equity above this is high solvency risk.
    pub solvency_high: f64,
    /// Debt-to-assets above this is medium operational risk.
    pub operational_medium: f64,
    /// Debt-to-assets above this is high operational risk.
    pub operational_high: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            liquidity_high: 1.0,
            liquidity_medium: 1.5,
            solvency_medium: 0.5,
            solvency_high: 1.0,
            operational_medium: 0.4,
            operational_high: 0.6,
        }
    }
}

impl RiskThresholds {
    pub fn strict() -> Self {
        Self {
            solvency_medium: 1.0,
            solvency_high: 2.0,
            ..Self::default()
        }
    }
}

/// Discrete risk reading per dimension plus the aggregated overall rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub liquidity_risk: RiskLevel,
    pub solvency_risk: RiskLevel,
    pub operational_risk: RiskLevel,
    pub overall_risk: RiskLevel,
}

/// Map a metrics bundle onto the threshold table.
///
/// Overall rating: High when at least two dimensions read High, otherwise
/// Medium when at least two read Medium, otherwise Low.
pub fn classify_risk(metrics: &MetricsSet, thresholds: &RiskThresholds) -> RiskProfile {
    let liquidity_risk = if metrics.current_ratio < thresholds.liquidity_high {
        RiskLevel::High
    } else if metrics.current_ratio < thresholds.liquidity_medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let solvency_risk = if metrics.debt_to_equity > thresholds.solvency_high {
        RiskLevel::High
    } else if metrics.debt_to_equity > thresholds.solvency_medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let operational_risk = if metrics.debt_to_assets > thresholds.operational_high {
        RiskLevel::High
    } else if metrics.debt_to_assets > thresholds.operational_medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let dimensions = [liquidity_risk, solvency_risk, operational_risk];
    let highs = dimensions.iter().filter(|d| **d == RiskLevel::High).count();
    let mediums = dimensions
        .iter()
        .filter(|d| **d == RiskLevel::Medium)
        .count();

    let overall_risk = if highs >= 2 {
        RiskLevel::High
    } else if mediums >= 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    RiskProfile {
        liquidity_risk,
        solvency_risk,
        operational_risk,
        overall_risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(current_ratio: f64, debt_to_equity: f64, debt_to_assets: f64) -> MetricsSet {
        MetricsSet {
            current_ratio,
            debt_to_equity,
            debt_to_assets,
            quick_ratio: 0.0,
            cash_ratio: 0.0,
            equity_ratio: 0.0,
            asset_turnover: 0.0,
            inventory_turnover: 0.0,
            receivables_turnover: 0.0,
            fixed_asset_turnover: 0.0,
            return_on_assets: 0.0,
            return_on_equity: 0.0,
            gross_margin: 0.0,
            net_margin: 0.0,
            working_capital: 0.0,
            working_capital_ratio: 0.0,
            days_sales_outstanding: 0.0,
            days_inventory_outstanding: 0.0,
            days_payables_outstanding: 0.0,
            cash_conversion_cycle: 0.0,
        }
    }

    #[test]
    fn test_stressed_company_is_high_across_the_board() {
        let profile = classify_risk(&metrics(0.8, 1.5, 0.7), &RiskThresholds::default());
        assert_eq!(profile.liquidity_risk, RiskLevel::High);
        assert_eq!(profile.solvency_risk, RiskLevel::High);
        assert_eq!(profile.operational_risk, RiskLevel::High);
        assert_eq!(profile.overall_risk, RiskLevel::High);
    }

    #[test]
    fn test_healthy_company_is_low() {
        let profile = classify_risk(&metrics(2.5, 0.3, 0.25), &RiskThresholds::default());
        assert_eq!(profile.liquidity_risk, RiskLevel::Low);
        assert_eq!(profile.solvency_risk, RiskLevel::Low);
        assert_eq!(profile.operational_risk, RiskLevel::Low);
        assert_eq!(profile.overall_risk, RiskLevel::Low);
    }

    #[test]
    fn test_medium_band_boundaries() {
        let profile = classify_risk(&metrics(1.2, 0.8, 0.5), &RiskThresholds::default());
        assert_eq!(profile.liquidity_risk, RiskLevel::Medium);
        assert_eq!(profile.solvency_risk, RiskLevel::Medium);
        assert_eq!(profile.operational_risk, RiskLevel::Medium);
        assert_eq!(profile.overall_risk, RiskLevel::Medium);
    }

    #[test]
    fn test_single_high_dimension_does_not_dominate() {
        // One High, one Medium, one Low: neither aggregation rule fires.
        let profile = classify_risk(&metrics(0.8, 0.8, 0.2), &RiskThresholds::default());
        assert_eq!(profile.liquidity_risk, RiskLevel::High);
        assert_eq!(profile.solvency_risk, RiskLevel::Medium);
        assert_eq!(profile.operational_risk, RiskLevel::Low);
        assert_eq!(profile.overall_risk, RiskLevel::Low);
    }

    #[test]
    fn test_boundary_values_are_not_flagged() {
        // Exactly at a cutoff stays on the safer side.
        let profile = classify_risk(&metrics(1.5, 0.5, 0.4), &RiskThresholds::default());
        assert_eq!(profile.liquidity_risk, RiskLevel::Low);
        assert_eq!(profile.solvency_risk, RiskLevel::Low);
        assert_eq!(profile.operational_risk, RiskLevel::Low);
    }

    #[test]
    fn test_strict_thresholds_relax_solvency() {
        let m = metrics(2.0, 1.5, 0.2);
        let default = classify_risk(&m, &RiskThresholds::default());
        let strict = classify_risk(&m, &RiskThresholds::strict());
        assert_eq!(default.solvency_risk, RiskLevel::High);
        assert_eq!(strict.solvency_risk, RiskLevel::Medium);
    }
}
