use anyhow::{Context, Result};
use balance_sheet_analyzer::llm::{GeminiAnalyst, GeminiClient};
use balance_sheet_analyzer::DocumentPipeline;

const STATEMENT: &str = "\
Harbor Foods Ltd
Balance Sheet FY 2024

Total Assets: $4,800,000
Total Current Assets: $1,900,000
Cash and Cash Equivalents: $450,000
Trade Receivables: $700,000
Inventories: $600,000
Property, Plant and Equipment: $2,500,000

Total Liabilities: $2,900,000
Total Current Liabilities: $1,050,000
Trade Payables: $520,000

Total Equity: $1,900,000
Share Capital: $1,000,000
Retained Earnings: $900,000

Revenue from Operations: $7,200,000
Cost of Goods Sold: $5,000,000
Gross Profit: $2,200,000
Net Profit: $430,000
";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let api_key = std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY is not set")?;

    let client = GeminiClient::new(api_key);
    let pipeline =
        DocumentPipeline::new().with_provider(GeminiAnalyst::new(client, "gemini-2.0-flash"));

    let outcome = pipeline.analyze(STATEMENT, "FY2024").await?;

    println!("analysis source: {:?}", outcome.analysis_source);
    println!("{}", serde_json::to_string_pretty(&outcome.report)?);

    Ok(())
}
