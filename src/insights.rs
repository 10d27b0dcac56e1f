use crate::metrics::MetricsSet;
use crate::risk::{RiskLevel, RiskProfile};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Working-capital and cash-cycle figures broken out for report consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedMetrics {
    pub working_capital: f64,
    pub working_capital_ratio: f64,
    pub days_sales_outstanding: f64,
    pub days_inventory_outstanding: f64,
    pub days_payables_outstanding: f64,
    pub cash_conversion_cycle: f64,
}

impl AdvancedMetrics {
    pub fn from_metrics(metrics: &MetricsSet) -> Self {
        Self {
            working_capital: metrics.working_capital,
            working_capital_ratio: metrics.working_capital_ratio,
            days_sales_outstanding: metrics.days_sales_outstanding,
            days_inventory_outstanding: metrics.days_inventory_outstanding,
            days_payables_outstanding: metrics.days_payables_outstanding,
            cash_conversion_cycle: metrics.cash_conversion_cycle,
        }
    }
}

/// Fixed reference ranges the narrative compares against. These are generic
/// cross-industry figures, not per-sector data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndustryBenchmark {
    pub current_ratio_low: f64,
    pub current_ratio_high: f64,
    pub debt_to_equity_ceiling: f64,
    pub net_margin_median: f64,
    pub commentary: String,
}

impl Default for IndustryBenchmark {
    fn default() -> Self {
        Self {
            current_ratio_low: 1.5,
            current_ratio_high: 3.0,
            debt_to_equity_ceiling: 2.0,
            net_margin_median: 0.10,
            commentary: "Reference ranges reflect broad manufacturing and services norms; \
                         capital-intensive sectors routinely run higher leverage."
                .to_string(),
        }
    }
}

/// The analysis contract every document ends up with, whether the narrative
/// came from the external model or from the deterministic fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    pub analysis: String,
    pub key_insights: Vec<String>,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub advanced_metrics: AdvancedMetrics,
    pub industry_benchmark: IndustryBenchmark,
}

fn describe_liquidity(current_ratio: f64) -> &'static str {
    if current_ratio >= 2.0 {
        "comfortable short-term coverage"
    } else if current_ratio >= 1.5 {
        "adequate short-term coverage"
    } else if current_ratio >= 1.0 {
        "thin short-term coverage"
    } else {
        "current liabilities exceeding current assets"
    }
}

fn describe_leverage(debt_to_equity: f64) -> &'static str {
    if debt_to_equity > 2.0 {
        "heavily leveraged"
    } else if debt_to_equity > 1.0 {
        "leveraged beyond its equity base"
    } else if debt_to_equity > 0.5 {
        "moderately leveraged"
    } else {
        "conservatively financed"
    }
}

/// Build the substitute report from already-computed figures.
///
/// Infallible and fully deterministic: the same metrics and risk profile
/// always produce an identical report.
pub fn fallback_report(metrics: &MetricsSet, risk: &RiskProfile) -> InsightReport {
    let analysis = format!(
        "The company reports a current ratio of {:.2}, indicating {}. \
         Total liabilities stand at {:.2}x equity, so the balance sheet is {}. \
         Net margin for the period is {:.1}% on an asset turnover of {:.2}. \
         Working capital is {:.0} and the cash conversion cycle runs {:.0} days. \
         Overall financial risk is assessed as {}.",
        metrics.current_ratio,
        describe_liquidity(metrics.current_ratio),
        metrics.debt_to_equity,
        describe_leverage(metrics.debt_to_equity),
        metrics.net_margin * 100.0,
        metrics.asset_turnover,
        metrics.working_capital,
        metrics.cash_conversion_cycle,
        risk.overall_risk,
    );

    let key_insights = vec![
        format!(
            "Liquidity: current ratio {:.2}, quick ratio {:.2}, cash ratio {:.2}.",
            metrics.current_ratio, metrics.quick_ratio, metrics.cash_ratio
        ),
        format!(
            "Solvency: debt-to-equity {:.2}, debt funds {:.0}% of assets.",
            metrics.debt_to_equity,
            metrics.debt_to_assets * 100.0
        ),
        format!(
            "Profitability: gross margin {:.1}%, net margin {:.1}%, return on equity {:.1}%.",
            metrics.gross_margin * 100.0,
            metrics.net_margin * 100.0,
            metrics.return_on_equity * 100.0
        ),
        format!(
            "Efficiency: receivables collected in {:.0} days, inventory held {:.0} days.",
            metrics.days_sales_outstanding, metrics.days_inventory_outstanding
        ),
    ];

    let mut risk_factors = Vec::new();
    if risk.liquidity_risk != RiskLevel::Low {
        risk_factors.push(format!(
            "{} liquidity risk: current ratio of {:.2} leaves limited room for \
             short-term obligations.",
            capitalize(risk.liquidity_risk), metrics.current_ratio
        ));
    }
    if risk.solvency_risk != RiskLevel::Low {
        risk_factors.push(format!(
            "{} solvency risk: debt-to-equity of {:.2} concentrates financing in debt.",
            capitalize(risk.solvency_risk),
            metrics.debt_to_equity
        ));
    }
    if risk.operational_risk != RiskLevel::Low {
        risk_factors.push(format!(
            "{} operational risk: {:.0}% of assets are debt-funded.",
            capitalize(risk.operational_risk),
            metrics.debt_to_assets * 100.0
        ));
    }
    if risk_factors.is_empty() {
        risk_factors.push(
            "No significant risk factors identified from the reported figures.".to_string(),
        );
    }

    let mut recommendations = Vec::new();
    if metrics.current_ratio < 1.5 {
        recommendations.push(format!(
            "Strengthen liquidity: a current ratio of {:.2} sits below the commonly \
             targeted 1.5.",
            metrics.current_ratio
        ));
    }
    if metrics.working_capital < 0.0 {
        recommendations.push(format!(
            "Address negative working capital of {:.0} before it constrains operations.",
            metrics.working_capital
        ));
    }
    if metrics.debt_to_equity > 1.0 {
        recommendations.push(format!(
            "Reduce leverage: debt-to-equity of {:.2} exceeds the equity base.",
            metrics.debt_to_equity
        ));
    }
    if metrics.net_margin < 0.05 {
        recommendations.push(format!(
            "Improve margins: net margin of {:.1}% is thin relative to the {:.0}% \
             cross-industry median.",
            metrics.net_margin * 100.0,
            IndustryBenchmark::default().net_margin_median * 100.0
        ));
    }
    if metrics.cash_conversion_cycle > 90.0 {
        recommendations.push(format!(
            "Shorten the cash conversion cycle: {:.0} days of cash is tied up per \
             operating cycle.",
            metrics.cash_conversion_cycle
        ));
    }
    if recommendations.is_empty() {
        recommendations
            .push("Maintain the current financial position; no corrective action is indicated."
                .to_string());
    }

    InsightReport {
        analysis,
        key_insights,
        risk_factors,
        recommendations,
        advanced_metrics: AdvancedMetrics::from_metrics(metrics),
        industry_benchmark: IndustryBenchmark::default(),
    }
}

fn capitalize(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Low",
        RiskLevel::Medium => "Medium",
        RiskLevel::High => "High",
    }
}
