use crate::schema::{FinancialField, StructuredFinancialData};
use log::debug;
use serde::{Deserialize, Serialize};

/// Relative imbalance of the accounting equation tolerated before a warning is
/// raised. Extraction rounding and partially-reported statements make an exact
/// check useless in practice.
pub const BALANCE_TOLERANCE: f64 = 0.05;

/// Fraction of canonical fields below which coverage is considered too sparse
/// to be a real statement.
const SPARSE_COVERAGE: f64 = 0.25;

/// Outcome of the consistency checks over one extracted record.
///
/// Warnings are advisory; the pipeline continues past them. `is_valid == false`
/// is the sole condition that blocks the AI-analysis call downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Check one extracted record for internal consistency. Never fails.
pub fn validate(data: &StructuredFinancialData) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let assets = data.total_assets;
    let liabilities = data.total_liabilities;
    let equity = data.total_equity;

    if assets == 0.0 && liabilities == 0.0 && equity == 0.0 {
        errors.push("no critical financial data found".to_string());
    } else {
        let imbalance = (liabilities + equity - assets).abs();
        if imbalance > BALANCE_TOLERANCE * assets.abs() {
            warnings.push(format!(
                "accounting equation imbalance: liabilities {:.2} + equity {:.2} differs from assets {:.2} by {:.2}",
                liabilities, equity, assets, imbalance
            ));
        }
    }

    for field in FinancialField::ALL {
        let value = data.get(field);
        if value < 0.0 {
            warnings.push(format!("negative value for {}: {:.2}", field.key(), value));
        }
    }

    let reported = data.reported_field_count();
    let coverage = reported as f64 / FinancialField::ALL.len() as f64;
    if reported > 0 && coverage < SPARSE_COVERAGE {
        warnings.push(format!(
            "only {} of {} fields were reported; extraction coverage is sparse",
            reported,
            FinancialField::ALL.len()
        ));
    }

    let is_valid = errors.is_empty();
    debug!(
        "validation: valid={} errors={} warnings={}",
        is_valid,
        errors.len(),
        warnings.len()
    );

    ValidationResult {
        is_valid,
        errors,
        warnings,
    }
}
