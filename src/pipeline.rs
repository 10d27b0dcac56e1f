use crate::error::{AnalysisError, Result};
use crate::extractor::{extract_fields_with_policy, MatchPolicy};
use crate::insights::{fallback_report, InsightReport};
use crate::metrics::{apply_derived_fields, compute_metrics, MetricsSet};
use crate::normalizer::normalize;
use crate::risk::{classify_risk, RiskProfile, RiskThresholds};
use crate::schema::StructuredFinancialData;
use crate::validator::{validate, ValidationResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// The external narrative collaborator, injected so the pipeline can run and
/// be tested without network access. Implementations should fail fast; any
/// error is absorbed by the pipeline, never propagated.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn generate_analysis(
        &self,
        data: &StructuredFinancialData,
        metrics: &MetricsSet,
        previous_period: Option<&StructuredFinancialData>,
    ) -> Result<InsightReport>;
}

/// Where the report attached to a document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AnalysisSource {
    Model,
    Fallback,
}

/// The complete outcome of analyzing one document. Persistence is the
/// caller's idempotent upsert; re-running the pipeline fully replaces a prior
/// outcome, there is no partial merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub period_label: String,
    pub financial_year: Option<String>,
    pub data: StructuredFinancialData,
    pub validation: ValidationResult,
    pub metrics: MetricsSet,
    pub risk: RiskProfile,
    pub report: InsightReport,
    pub analysis_source: AnalysisSource,
    pub analyzed_at: DateTime<Utc>,
}

/// Runs raw statement text through normalization, extraction, validation,
/// metrics, risk classification and analysis.
pub struct DocumentPipeline {
    provider: Option<Box<dyn InsightProvider>>,
    thresholds: RiskThresholds,
    match_policy: MatchPolicy,
}

impl Default for DocumentPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentPipeline {
    pub fn new() -> Self {
        Self {
            provider: None,
            thresholds: RiskThresholds::default(),
            match_policy: MatchPolicy::default(),
        }
    }

    pub fn with_provider(mut self, provider: impl InsightProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    pub fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Run the full pipeline, consulting the configured provider for the
    /// narrative when the extracted data validated.
    pub async fn analyze(
        &self,
        raw_text: &str,
        period_label: impl Into<String>,
    ) -> Result<DocumentAnalysis> {
        self.analyze_with_previous(raw_text, period_label, None).await
    }

    /// Like [`analyze`](Self::analyze), with a prior period handed to the
    /// provider for comparative narrative.
    pub async fn analyze_with_previous(
        &self,
        raw_text: &str,
        period_label: impl Into<String>,
        previous_period: Option<&StructuredFinancialData>,
    ) -> Result<DocumentAnalysis> {
        let mut outcome = self.analyze_offline(raw_text, period_label)?;

        // The all-zeros validation failure is the one condition that blocks
        // the model call; the deterministic report stays attached instead.
        if !outcome.validation.is_valid {
            info!(
                "skipping insight provider for '{}': validation failed",
                outcome.period_label
            );
            return Ok(outcome);
        }

        if let Some(provider) = &self.provider {
            match provider
                .generate_analysis(&outcome.data, &outcome.metrics, previous_period)
                .await
            {
                Ok(report) => {
                    outcome.report = report;
                    outcome.analysis_source = AnalysisSource::Model;
                }
                Err(e) => {
                    warn!(
                        "insight provider failed for '{}', using fallback report: {}",
                        outcome.period_label, e
                    );
                }
            }
        }

        Ok(outcome)
    }

    /// The synchronous part of the pipeline: everything except the provider
    /// call, with the fallback report attached. Useful on its own when no
    /// provider is configured or reachable.
    pub fn analyze_offline(
        &self,
        raw_text: &str,
        period_label: impl Into<String>,
    ) -> Result<DocumentAnalysis> {
        let period_label = period_label.into();

        let normalized = normalize(raw_text);
        if normalized.text.is_empty() {
            return Err(AnalysisError::EmptyDocument(format!(
                "document for period '{}' contained no readable text",
                period_label
            )));
        }

        let mut data = extract_fields_with_policy(&normalized.text, self.match_policy);
        let validation = validate(&data);
        apply_derived_fields(&mut data);

        let metrics = compute_metrics(&data);
        let risk = classify_risk(&metrics, &self.thresholds);
        let report = fallback_report(&metrics, &risk);

        debug!(
            "pipeline for '{}': {} fields, valid={}, overall risk {}",
            period_label,
            data.reported_field_count(),
            validation.is_valid,
            risk.overall_risk
        );

        Ok(DocumentAnalysis {
            period_label,
            financial_year: normalized.financial_year,
            data,
            validation,
            metrics,
            risk,
            report,
            analysis_source: AnalysisSource::Fallback,
            analyzed_at: Utc::now(),
        })
    }
}

/// One-shot analysis of statement text with default settings and no external
/// provider.
pub fn analyze_statement_text(
    raw_text: &str,
    period_label: impl Into<String>,
) -> Result<DocumentAnalysis> {
    DocumentPipeline::new().analyze_offline(raw_text, period_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const SAMPLE_STATEMENT: &str = "\
        Balance Sheet FY 2023\n\
        Total Assets: ₹2,000,000\n\
        Current Assets: ₹800,000\n\
        Cash and Cash Equivalents: ₹200,000\n\
        Inventories: ₹250,000\n\
        Total Liabilities: ₹1,200,000\n\
        Current Liabilities: ₹400,000\n\
        Total Equity: ₹800,000\n\
        Revenue from Operations: ₹3,650,000\n\
        Net Profit: ₹365,000\n";

    struct FailingProvider;

    #[async_trait]
    impl InsightProvider for FailingProvider {
        async fn generate_analysis(
            &self,
            _data: &StructuredFinancialData,
            _metrics: &MetricsSet,
            _previous_period: Option<&StructuredFinancialData>,
        ) -> Result<InsightReport> {
            Err(AnalysisError::ProviderFailed("quota exceeded".to_string()))
        }
    }

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl InsightProvider for CountingProvider {
        async fn generate_analysis(
            &self,
            _data: &StructuredFinancialData,
            metrics: &MetricsSet,
            _previous_period: Option<&StructuredFinancialData>,
        ) -> Result<InsightReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let risk = classify_risk(metrics, &RiskThresholds::default());
            let mut report = fallback_report(metrics, &risk);
            report.analysis = "model narrative".to_string();
            Ok(report)
        }
    }

    #[test]
    fn test_offline_pipeline_end_to_end() {
        let outcome = analyze_statement_text(SAMPLE_STATEMENT, "FY2023").unwrap();

        assert_eq!(outcome.financial_year.as_deref(), Some("2023"));
        assert_eq!(outcome.data.total_assets, 2_000_000.0);
        assert_eq!(outcome.data.current_ratio, 2.0);
        assert!(outcome.validation.is_valid);
        assert_eq!(outcome.metrics.debt_to_equity, 1.5);
        assert_eq!(outcome.analysis_source, AnalysisSource::Fallback);
        assert!(!outcome.report.analysis.is_empty());
    }

    #[test]
    fn test_empty_document_is_fatal() {
        let err = analyze_statement_text("   \n\n  ", "FY2023").unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyDocument(_)));
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back() {
        let pipeline = DocumentPipeline::new().with_provider(FailingProvider);
        let outcome = pipeline.analyze(SAMPLE_STATEMENT, "FY2023").await.unwrap();

        assert_eq!(outcome.analysis_source, AnalysisSource::Fallback);
        assert!(!outcome.report.analysis.is_empty());
        assert!(!outcome.report.key_insights.is_empty());
        assert!(!outcome.report.risk_factors.is_empty());
        assert!(!outcome.report.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_provider_success_is_recorded() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = DocumentPipeline::new().with_provider(CountingProvider {
            calls: calls.clone(),
        });
        let outcome = pipeline.analyze(SAMPLE_STATEMENT, "FY2023").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.analysis_source, AnalysisSource::Model);
        assert_eq!(outcome.report.analysis, "model narrative");
    }

    #[tokio::test]
    async fn test_invalid_document_skips_provider() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = DocumentPipeline::new().with_provider(CountingProvider {
            calls: calls.clone(),
        });

        // Text with no recognizable line items extracts to all zeros.
        let outcome = pipeline
            .analyze("annual report narrative with no figures", "FY2023")
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!outcome.validation.is_valid);
        assert_eq!(outcome.analysis_source, AnalysisSource::Fallback);
        assert!(!outcome.report.analysis.is_empty());
    }

    #[tokio::test]
    async fn test_reanalysis_overwrites_cleanly() {
        let pipeline = DocumentPipeline::new().with_provider(FailingProvider);
        let first = pipeline.analyze(SAMPLE_STATEMENT, "FY2023").await.unwrap();
        let second = pipeline.analyze(SAMPLE_STATEMENT, "FY2023").await.unwrap();

        assert_eq!(first.data, second.data);
        assert_eq!(first.metrics, second.metrics);
        assert_eq!(first.report, second.report);
    }
}
