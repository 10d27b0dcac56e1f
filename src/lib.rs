//! # Balance Sheet Analyzer
//!
//! A library for turning raw balance-sheet text (as extracted from PDFs) into
//! structured financial data, standard accounting ratios, multi-period trends
//! and threshold-based risk ratings.
//!
//! ## Core Concepts
//!
//! - **Normalization**: raw extracted text is cleaned and scanned for a
//!   reporting-year token before anything else looks at it
//! - **Extraction**: ~20 canonical line items are pulled out by labeled
//!   pattern rules; absent fields default to zero
//! - **Validation**: the accounting equation and value sanity are checked,
//!   producing warnings rather than hard failures
//! - **Metrics**: liquidity, solvency, efficiency, profitability, working
//!   capital and cash-cycle figures, all guarded against division by zero
//! - **Analysis**: an injected insight provider (e.g. Gemini, behind the
//!   `gemini` feature) writes the narrative; a deterministic fallback report
//!   is substituted whenever the provider is missing or fails
//!
//! ## Example
//!
//! ```rust
//! use balance_sheet_analyzer::analyze_statement_text;
//!
//! let text = "Balance Sheet FY 2023\n\
//!             Total Assets: ₹2,000,000\n\
//!             Current Assets: ₹800,000\n\
//!             Current Liabilities: ₹400,000\n\
//!             Total Liabilities: ₹1,200,000\n\
//!             Total Equity: ₹800,000\n\
//!             Revenue from Operations: ₹3,650,000\n\
//!             Net Profit: ₹365,000";
//!
//! let outcome = analyze_statement_text(text, "FY2023").unwrap();
//! assert_eq!(outcome.data.total_assets, 2_000_000.0);
//! assert_eq!(outcome.metrics.current_ratio, 2.0);
//! ```

pub mod error;
pub mod extractor;
pub mod insights;
pub mod metrics;
pub mod normalizer;
pub mod pipeline;
pub mod risk;
pub mod schema;
pub mod trends;
pub mod validator;

#[cfg(feature = "gemini")]
pub mod llm;

pub use error::{AnalysisError, Result};
pub use extractor::{extract_fields, extract_fields_with_policy, MatchPolicy};
pub use insights::{fallback_report, AdvancedMetrics, IndustryBenchmark, InsightReport};
pub use metrics::{apply_derived_fields, compute_metrics, MetricsSet};
pub use normalizer::{normalize, NormalizedText};
pub use pipeline::{
    analyze_statement_text, AnalysisSource, DocumentAnalysis, DocumentPipeline, InsightProvider,
};
pub use risk::{classify_risk, RiskLevel, RiskProfile, RiskThresholds};
pub use schema::{FieldGroup, FinancialField, PeriodRecord, StructuredFinancialData};
pub use trends::{compute_trends, CagrSummary, GrowthRates, TrendResult};
pub use validator::{validate, ValidationResult, BALANCE_TOLERANCE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_risk_rating_end_to_end() {
        let text = "Statement of Financial Position, FY 2024\n\
                    Total Assets $1,000,000\n\
                    Current Assets $240,000\n\
                    Current Liabilities $300,000\n\
                    Total Liabilities $700,000\n\
                    Total Equity $300,000\n\
                    Revenue $1,500,000\n\
                    Net Profit $30,000";

        let outcome = analyze_statement_text(text, "FY2024").unwrap();

        assert_eq!(outcome.financial_year.as_deref(), Some("2024"));
        assert!(outcome.validation.is_valid);
        assert_eq!(outcome.risk.liquidity_risk, RiskLevel::High);
        assert_eq!(outcome.risk.solvency_risk, RiskLevel::High);
        assert_eq!(outcome.risk.operational_risk, RiskLevel::High);
        assert_eq!(outcome.risk.overall_risk, RiskLevel::High);
        assert_eq!(outcome.analysis_source, AnalysisSource::Fallback);
    }
}
