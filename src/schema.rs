use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Conceptual grouping of balance-sheet and income-statement line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum FieldGroup {
    Assets,
    Liabilities,
    Equity,
    IncomeStatement,
}

/// The canonical line items the extractor knows how to pull from statement text.
///
/// The `key()` spellings form the stable field-name vocabulary shared between
/// extraction, metrics and any persisted record; renaming one is a breaking
/// change for stored documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinancialField {
    TotalAssets,
    CurrentAssets,
    CashAndEquivalents,
    Receivables,
    Inventory,
    PropertyPlantEquipment,
    Investments,
    OtherAssets,
    TotalLiabilities,
    CurrentLiabilities,
    TradePayables,
    ShortTermBorrowings,
    LongTermDebt,
    OtherLiabilities,
    TotalEquity,
    ShareCapital,
    RetainedEarnings,
    Revenue,
    CostOfGoodsSold,
    GrossProfit,
    OperatingExpenses,
    NetProfit,
}

impl FinancialField {
    pub const ALL: [FinancialField; 22] = [
        FinancialField::TotalAssets,
        FinancialField::CurrentAssets,
        FinancialField::CashAndEquivalents,
        FinancialField::Receivables,
        FinancialField::Inventory,
        FinancialField::PropertyPlantEquipment,
        FinancialField::Investments,
        FinancialField::OtherAssets,
        FinancialField::TotalLiabilities,
        FinancialField::CurrentLiabilities,
        FinancialField::TradePayables,
        FinancialField::ShortTermBorrowings,
        FinancialField::LongTermDebt,
        FinancialField::OtherLiabilities,
        FinancialField::TotalEquity,
        FinancialField::ShareCapital,
        FinancialField::RetainedEarnings,
        FinancialField::Revenue,
        FinancialField::CostOfGoodsSold,
        FinancialField::GrossProfit,
        FinancialField::OperatingExpenses,
        FinancialField::NetProfit,
    ];

    /// The canonical key as it appears in serialized records.
    pub fn key(&self) -> &'static str {
        match self {
            FinancialField::TotalAssets => "totalAssets",
            FinancialField::CurrentAssets => "currentAssets",
            FinancialField::CashAndEquivalents => "cashAndEquivalents",
            FinancialField::Receivables => "receivables",
            FinancialField::Inventory => "inventory",
            FinancialField::PropertyPlantEquipment => "propertyPlantEquipment",
            FinancialField::Investments => "investments",
            FinancialField::OtherAssets => "otherAssets",
            FinancialField::TotalLiabilities => "totalLiabilities",
            FinancialField::CurrentLiabilities => "currentLiabilities",
            FinancialField::TradePayables => "tradePayables",
            FinancialField::ShortTermBorrowings => "shortTermBorrowings",
            FinancialField::LongTermDebt => "longTermDebt",
            FinancialField::OtherLiabilities => "otherLiabilities",
            FinancialField::TotalEquity => "totalEquity",
            FinancialField::ShareCapital => "shareCapital",
            FinancialField::RetainedEarnings => "retainedEarnings",
            FinancialField::Revenue => "revenue",
            FinancialField::CostOfGoodsSold => "costOfGoodsSold",
            FinancialField::GrossProfit => "grossProfit",
            FinancialField::OperatingExpenses => "operatingExpenses",
            FinancialField::NetProfit => "netProfit",
        }
    }

    pub fn group(&self) -> FieldGroup {
        match self {
            FinancialField::TotalAssets
            | FinancialField::CurrentAssets
            | FinancialField::CashAndEquivalents
            | FinancialField::Receivables
            | FinancialField::Inventory
            | FinancialField::PropertyPlantEquipment
            | FinancialField::Investments
            | FinancialField::OtherAssets => FieldGroup::Assets,
            FinancialField::TotalLiabilities
            | FinancialField::CurrentLiabilities
            | FinancialField::TradePayables
            | FinancialField::ShortTermBorrowings
            | FinancialField::LongTermDebt
            | FinancialField::OtherLiabilities => FieldGroup::Liabilities,
            FinancialField::TotalEquity
            | FinancialField::ShareCapital
            | FinancialField::RetainedEarnings => FieldGroup::Equity,
            FinancialField::Revenue
            | FinancialField::CostOfGoodsSold
            | FinancialField::GrossProfit
            | FinancialField::OperatingExpenses
            | FinancialField::NetProfit => FieldGroup::IncomeStatement,
        }
    }
}

/// One period's worth of structured financial figures.
///
/// Every field defaults to 0.0 when the source document does not report it; the
/// record cannot distinguish "reported as zero" from "absent". All values are
/// finite and non-NaN by construction. The trailing derived fields are written
/// by [`crate::metrics::apply_derived_fields`] at save time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredFinancialData {
    #[schemars(description = "Total assets reported on the balance sheet")]
    pub total_assets: f64,

    #[schemars(description = "Total current assets")]
    pub current_assets: f64,

    #[schemars(description = "Cash and cash equivalents, including bank balances")]
    pub cash_and_equivalents: f64,

    #[schemars(description = "Trade receivables / accounts receivable / sundry debtors")]
    pub receivables: f64,

    #[schemars(description = "Inventories / stock in trade")]
    pub inventory: f64,

    #[schemars(description = "Property, plant and equipment (net fixed assets)")]
    pub property_plant_equipment: f64,

    #[schemars(description = "Investments held")]
    pub investments: f64,

    #[schemars(description = "Other assets not classified elsewhere")]
    pub other_assets: f64,

    #[schemars(description = "Total liabilities reported on the balance sheet")]
    pub total_liabilities: f64,

    #[schemars(description = "Total current liabilities")]
    pub current_liabilities: f64,

    #[schemars(description = "Trade payables / accounts payable / sundry creditors")]
    pub trade_payables: f64,

    #[schemars(description = "Short-term borrowings")]
    pub short_term_borrowings: f64,

    #[schemars(description = "Long-term borrowings / term loans")]
    pub long_term_debt: f64,

    #[schemars(description = "Other liabilities not classified elsewhere")]
    pub other_liabilities: f64,

    #[schemars(description = "Total shareholders' equity / net worth")]
    pub total_equity: f64,

    #[schemars(description = "Issued share capital")]
    pub share_capital: f64,

    #[schemars(description = "Retained earnings / reserves and surplus")]
    pub retained_earnings: f64,

    #[schemars(description = "Revenue from operations for the period")]
    pub revenue: f64,

    #[schemars(description = "Cost of goods sold / cost of sales")]
    pub cost_of_goods_sold: f64,

    #[schemars(description = "Gross profit for the period")]
    pub gross_profit: f64,

    #[schemars(description = "Total operating expenses for the period")]
    pub operating_expenses: f64,

    #[schemars(description = "Net profit / profit after tax for the period")]
    pub net_profit: f64,

    #[schemars(description = "Derived: current assets minus current liabilities")]
    pub working_capital: f64,

    #[schemars(description = "Derived: total liabilities over total equity")]
    pub debt_to_equity_ratio: f64,

    #[schemars(description = "Derived: current assets over current liabilities")]
    pub current_ratio: f64,

    #[schemars(description = "Derived: current assets less inventory, over current liabilities")]
    pub quick_ratio: f64,
}

impl StructuredFinancialData {
    pub fn get(&self, field: FinancialField) -> f64 {
        match field {
            FinancialField::TotalAssets => self.total_assets,
            FinancialField::CurrentAssets => self.current_assets,
            FinancialField::CashAndEquivalents => self.cash_and_equivalents,
            FinancialField::Receivables => self.receivables,
            FinancialField::Inventory => self.inventory,
            FinancialField::PropertyPlantEquipment => self.property_plant_equipment,
            FinancialField::Investments => self.investments,
            FinancialField::OtherAssets => self.other_assets,
            FinancialField::TotalLiabilities => self.total_liabilities,
            FinancialField::CurrentLiabilities => self.current_liabilities,
            FinancialField::TradePayables => self.trade_payables,
            FinancialField::ShortTermBorrowings => self.short_term_borrowings,
            FinancialField::LongTermDebt => self.long_term_debt,
            FinancialField::OtherLiabilities => self.other_liabilities,
            FinancialField::TotalEquity => self.total_equity,
            FinancialField::ShareCapital => self.share_capital,
            FinancialField::RetainedEarnings => self.retained_earnings,
            FinancialField::Revenue => self.revenue,
            FinancialField::CostOfGoodsSold => self.cost_of_goods_sold,
            FinancialField::GrossProfit => self.gross_profit,
            FinancialField::OperatingExpenses => self.operating_expenses,
            FinancialField::NetProfit => self.net_profit,
        }
    }

    pub fn set(&mut self, field: FinancialField, value: f64) {
        let slot = match field {
            FinancialField::TotalAssets => &mut self.total_assets,
            FinancialField::CurrentAssets => &mut self.current_assets,
            FinancialField::CashAndEquivalents => &mut self.cash_and_equivalents,
            FinancialField::Receivables => &mut self.receivables,
            FinancialField::Inventory => &mut self.inventory,
            FinancialField::PropertyPlantEquipment => &mut self.property_plant_equipment,
            FinancialField::Investments => &mut self.investments,
            FinancialField::OtherAssets => &mut self.other_assets,
            FinancialField::TotalLiabilities => &mut self.total_liabilities,
            FinancialField::CurrentLiabilities => &mut self.current_liabilities,
            FinancialField::TradePayables => &mut self.trade_payables,
            FinancialField::ShortTermBorrowings => &mut self.short_term_borrowings,
            FinancialField::LongTermDebt => &mut self.long_term_debt,
            FinancialField::OtherLiabilities => &mut self.other_liabilities,
            FinancialField::TotalEquity => &mut self.total_equity,
            FinancialField::ShareCapital => &mut self.share_capital,
            FinancialField::RetainedEarnings => &mut self.retained_earnings,
            FinancialField::Revenue => &mut self.revenue,
            FinancialField::CostOfGoodsSold => &mut self.cost_of_goods_sold,
            FinancialField::GrossProfit => &mut self.gross_profit,
            FinancialField::OperatingExpenses => &mut self.operating_expenses,
            FinancialField::NetProfit => &mut self.net_profit,
        };
        *slot = value;
    }

    /// Number of canonical fields that carry a non-zero value.
    pub fn reported_field_count(&self) -> usize {
        FinancialField::ALL
            .iter()
            .filter(|f| self.get(**f) != 0.0)
            .count()
    }

    /// Canonical fields belonging to one statement subgroup, with their values.
    pub fn group_values(&self, group: FieldGroup) -> Vec<(FinancialField, f64)> {
        FinancialField::ALL
            .iter()
            .filter(|f| f.group() == group)
            .map(|f| (*f, self.get(*f)))
            .collect()
    }
}

/// One financial year/period of a company, as stored by the caller.
/// Sequences handed to the trend engine must be in chronological order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRecord {
    #[schemars(description = "Period label, e.g. \"2023\" or \"FY2023\"")]
    pub period_label: String,

    #[schemars(description = "The structured figures extracted for this period")]
    pub data: StructuredFinancialData,
}

impl PeriodRecord {
    pub fn new(period_label: impl Into<String>, data: StructuredFinancialData) -> Self {
        Self {
            period_label: period_label.into(),
            data,
        }
    }
}
