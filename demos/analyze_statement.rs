use anyhow::Result;
use balance_sheet_analyzer::{analyze_statement_text, compute_trends, PeriodRecord};

const FY2022: &str = "\
Seaside Trading Co
Statement of Financial Position for FY 2022

Total Assets: 1,650,000
Total Current Assets: 640,000
Cash and Cash Equivalents: 180,000
Trade Receivables: 230,000
Inventories: 170,000
Property, Plant and Equipment: 830,000

Total Liabilities: 990,000
Total Current Liabilities: 330,000
Trade Payables: 160,000

Total Equity: 660,000
Share Capital: 400,000

Revenue from Operations: 2,450,000
Cost of Goods Sold: 1,710,000
Gross Profit: 740,000
Net Profit: 196,000
";

const FY2023: &str = "\
Seaside Trading Co
Statement of Financial Position for FY 2023

Total Assets: 2,000,000
Total Current Assets: 800,000
Cash and Cash Equivalents: 240,000
Trade Receivables: 280,000
Inventories: 200,000
Property, Plant and Equipment: 1,000,000

Total Liabilities: 1,200,000
Total Current Liabilities: 400,000
Trade Payables: 200,000

Total Equity: 800,000
Share Capital: 480,000

Revenue from Operations: 3,000,000
Cost of Goods Sold: 2,100,000
Gross Profit: 900,000
Net Profit: 240,000
";

fn main() -> Result<()> {
    env_logger::init();

    let prior = analyze_statement_text(FY2022, "FY2022")?;
    let latest = analyze_statement_text(FY2023, "FY2023")?;

    println!("=== {} ===", latest.period_label);
    println!(
        "detected year: {}",
        latest.financial_year.as_deref().unwrap_or("n/a")
    );
    println!(
        "current ratio {:.2} | debt-to-equity {:.2} | net margin {:.1}%",
        latest.metrics.current_ratio,
        latest.metrics.debt_to_equity,
        latest.metrics.net_margin * 100.0
    );
    println!("overall risk: {}", latest.risk.overall_risk);

    for warning in &latest.validation.warnings {
        println!("warning: {}", warning);
    }

    println!("\n{}", latest.report.analysis);
    for insight in &latest.report.key_insights {
        println!("  - {}", insight);
    }

    let periods = vec![
        PeriodRecord::new("FY2022", prior.data),
        PeriodRecord::new("FY2023", latest.data),
    ];
    let trend = compute_trends(&periods)?;

    println!("\n=== Growth FY2022 -> FY2023 ===");
    let pair = &trend.growth["FY2022-FY2023"];
    if let Some(revenue) = pair.revenue {
        println!("revenue: {:+.1}%", revenue);
    }
    if let Some(assets) = pair.total_assets {
        println!("total assets: {:+.1}%", assets);
    }

    Ok(())
}
