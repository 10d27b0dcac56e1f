use crate::schema::StructuredFinancialData;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const DAYS_PER_YEAR: f64 = 365.0;

/// The full ratio bundle derived from one period's structured figures.
///
/// Pure function output: recomputed on demand, never mutated, and
/// bit-identical across calls on the same input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSet {
    // Liquidity
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub cash_ratio: f64,
    // Solvency
    pub debt_to_equity: f64,
    pub debt_to_assets: f64,
    pub equity_ratio: f64,
    // Efficiency
    pub asset_turnover: f64,
    pub inventory_turnover: f64,
    pub receivables_turnover: f64,
    pub fixed_asset_turnover: f64,
    // Profitability
    pub return_on_assets: f64,
    pub return_on_equity: f64,
    pub gross_margin: f64,
    pub net_margin: f64,
    // Working capital
    pub working_capital: f64,
    pub working_capital_ratio: f64,
    // Cash cycle, in days
    pub days_sales_outstanding: f64,
    pub days_inventory_outstanding: f64,
    pub days_payables_outstanding: f64,
    pub cash_conversion_cycle: f64,
}

// Zero denominators are substituted with 1 instead of erroring. This silently
// yields a ratio equal to the bare numerator, which downstream consumers and
// stored records rely on, so the substitution must not change.
fn guard(denominator: f64) -> f64 {
    if denominator == 0.0 {
        1.0
    } else {
        denominator
    }
}

/// Compute every ratio in one pass. Pure and infallible; output never
/// contains `NaN` or infinities for finite input.
pub fn compute_metrics(data: &StructuredFinancialData) -> MetricsSet {
    let working_capital = data.current_assets - data.current_liabilities;

    let days_sales_outstanding = data.receivables / guard(data.revenue) * DAYS_PER_YEAR;
    let days_inventory_outstanding =
        data.inventory / guard(data.cost_of_goods_sold) * DAYS_PER_YEAR;
    let days_payables_outstanding =
        data.trade_payables / guard(data.cost_of_goods_sold) * DAYS_PER_YEAR;

    MetricsSet {
        current_ratio: data.current_assets / guard(data.current_liabilities),
        quick_ratio: (data.current_assets - data.inventory) / guard(data.current_liabilities),
        cash_ratio: data.cash_and_equivalents / guard(data.current_liabilities),

        debt_to_equity: data.total_liabilities / guard(data.total_equity),
        debt_to_assets: data.total_liabilities / guard(data.total_assets),
        equity_ratio: data.total_equity / guard(data.total_assets),

        asset_turnover: data.revenue / guard(data.total_assets),
        inventory_turnover: data.cost_of_goods_sold / guard(data.inventory),
        receivables_turnover: data.revenue / guard(data.receivables),
        fixed_asset_turnover: data.revenue / guard(data.property_plant_equipment),

        return_on_assets: data.net_profit / guard(data.total_assets),
        return_on_equity: data.net_profit / guard(data.total_equity),
        gross_margin: data.gross_profit / guard(data.revenue),
        net_margin: data.net_profit / guard(data.revenue),

        working_capital,
        working_capital_ratio: working_capital / guard(data.total_assets),

        days_sales_outstanding,
        days_inventory_outstanding,
        days_payables_outstanding,
        cash_conversion_cycle: days_sales_outstanding + days_inventory_outstanding
            - days_payables_outstanding,
    }
}

/// Recompute the derived fields persisted on the record itself.
///
/// Called whenever the underlying figures change, before the record is stored.
/// Idempotent: applying it twice to unchanged input writes identical values.
pub fn apply_derived_fields(data: &mut StructuredFinancialData) {
    data.working_capital = data.current_assets - data.current_liabilities;
    data.debt_to_equity_ratio = data.total_liabilities / guard(data.total_equity);
    data.current_ratio = data.current_assets / guard(data.current_liabilities);
    data.quick_ratio = (data.current_assets - data.inventory) / guard(data.current_liabilities);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> StructuredFinancialData {
        StructuredFinancialData {
            total_assets: 2000.0,
            current_assets: 800.0,
            cash_and_equivalents: 200.0,
            receivables: 300.0,
            inventory: 250.0,
            property_plant_equipment: 1000.0,
            total_liabilities: 1200.0,
            current_liabilities: 400.0,
            trade_payables: 150.0,
            total_equity: 800.0,
            revenue: 3650.0,
            cost_of_goods_sold: 2500.0,
            gross_profit: 1150.0,
            net_profit: 365.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_ratio_formulas() {
        let metrics = compute_metrics(&sample_record());

        assert_eq!(metrics.current_ratio, 2.0);
        assert_eq!(metrics.quick_ratio, 1.375);
        assert_eq!(metrics.cash_ratio, 0.5);
        assert_eq!(metrics.debt_to_equity, 1.5);
        assert_eq!(metrics.debt_to_assets, 0.6);
        assert_eq!(metrics.equity_ratio, 0.4);
        assert_eq!(metrics.asset_turnover, 1.825);
        assert_eq!(metrics.inventory_turnover, 10.0);
        assert_eq!(metrics.return_on_assets, 0.1825);
        assert_eq!(metrics.net_margin, 0.1);
        assert_eq!(metrics.working_capital, 400.0);
        assert_eq!(metrics.working_capital_ratio, 0.2);
    }

    #[test]
    fn test_day_count_metrics() {
        let metrics = compute_metrics(&sample_record());

        assert!((metrics.days_sales_outstanding - 30.0).abs() < 1e-9);
        assert!((metrics.days_inventory_outstanding - 36.5).abs() < 1e-9);
        assert!((metrics.days_payables_outstanding - 21.9).abs() < 1e-9);
        assert!((metrics.cash_conversion_cycle - 44.6).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent_computation() {
        let data = sample_record();
        assert_eq!(compute_metrics(&data), compute_metrics(&data));
    }

    #[test]
    fn test_zero_denominators_guard_to_one() {
        let metrics = compute_metrics(&StructuredFinancialData {
            current_assets: 500.0,
            receivables: 120.0,
            cost_of_goods_sold: 90.0,
            net_profit: 75.0,
            ..Default::default()
        });

        // Denominator fields are all 0, so every ratio equals its numerator.
        assert_eq!(metrics.current_ratio, 500.0);
        assert_eq!(metrics.inventory_turnover, 90.0);
        assert_eq!(metrics.return_on_equity, 75.0);
        assert_eq!(metrics.days_sales_outstanding, 120.0 * 365.0);
        assert!(metrics.cash_conversion_cycle.is_finite());
    }

    #[test]
    fn test_no_nan_or_infinity_on_all_zero_input() {
        let metrics = compute_metrics(&StructuredFinancialData::default());
        let json = serde_json::to_value(&metrics).unwrap();
        for (key, value) in json.as_object().unwrap() {
            let number = value.as_f64().unwrap();
            assert!(number.is_finite(), "{} is not finite", key);
        }
    }

    #[test]
    fn test_negative_working_capital_allowed() {
        let metrics = compute_metrics(&StructuredFinancialData {
            current_assets: 300.0,
            current_liabilities: 500.0,
            ..Default::default()
        });
        assert_eq!(metrics.working_capital, -200.0);
    }

    #[test]
    fn test_apply_derived_fields_idempotent() {
        let mut data = sample_record();
        apply_derived_fields(&mut data);
        let first = data.clone();
        apply_derived_fields(&mut data);
        assert_eq!(data, first);

        assert_eq!(data.working_capital, 400.0);
        assert_eq!(data.debt_to_equity_ratio, 1.5);
        assert_eq!(data.current_ratio, 2.0);
        assert_eq!(data.quick_ratio, 1.375);
    }
}
