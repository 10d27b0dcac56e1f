use crate::error::{AnalysisError, Result};
use crate::insights::{AdvancedMetrics, IndustryBenchmark, InsightReport};
use crate::llm::client::GeminiClient;
use crate::llm::prompts::ANALYST_SYSTEM_PROMPT;
use crate::llm::types::Content;
use crate::metrics::MetricsSet;
use crate::pipeline::InsightProvider;
use crate::schema::StructuredFinancialData;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// What the model is asked to return. The cash-cycle bundle and benchmark
/// block are filled in locally so the report contract stays uniform with the
/// fallback path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct ModelAnalysis {
    #[schemars(description = "Narrative paragraph assessing the financial position")]
    analysis: String,

    #[schemars(description = "Short observations, each tied to a specific input number")]
    key_insights: Vec<String>,

    #[schemars(description = "Concrete risks visible in the figures")]
    risk_factors: Vec<String>,

    #[schemars(description = "Actionable steps ordered by urgency")]
    recommendations: Vec<String>,
}

/// Gemini-backed implementation of [`InsightProvider`].
pub struct GeminiAnalyst {
    client: GeminiClient,
    model: String,
}

impl GeminiAnalyst {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl InsightProvider for GeminiAnalyst {
    async fn generate_analysis(
        &self,
        data: &StructuredFinancialData,
        metrics: &MetricsSet,
        previous_period: Option<&StructuredFinancialData>,
    ) -> Result<InsightReport> {
        let payload = json!({
            "data": data,
            "metrics": metrics,
            "previousPeriod": previous_period,
        });

        let user_message = format!(
            "Assess the company's financial position from this data:\n{}",
            serde_json::to_string_pretty(&payload)?
        );

        let response_schema = serde_json::to_value(schemars::schema_for!(ModelAnalysis))?;

        let raw = self
            .client
            .generate_content(
                &self.model,
                ANALYST_SYSTEM_PROMPT,
                vec![Content::user(user_message)],
                Some(response_schema),
            )
            .await?;

        let parsed: ModelAnalysis = serde_json::from_str(&raw)
            .map_err(|e| AnalysisError::MalformedResponse(format!("analysis decode: {}", e)))?;

        Ok(InsightReport {
            analysis: parsed.analysis,
            key_insights: parsed.key_insights,
            risk_factors: parsed.risk_factors,
            recommendations: parsed.recommendations,
            advanced_metrics: AdvancedMetrics::from_metrics(metrics),
            industry_benchmark: IndustryBenchmark::default(),
        })
    }
}
