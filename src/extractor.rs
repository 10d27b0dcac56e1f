use crate::schema::{FinancialField, StructuredFinancialData};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// How a field rule picks among multiple label occurrences in one document.
///
/// `FirstMatch` takes the first occurrence in document order. Documents with
/// repeated labels (multi-year comparative columns, consolidated next to
/// standalone) can under-extract under this policy; a stricter multi-candidate
/// strategy would slot in here without touching call sites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    #[default]
    FirstMatch,
}

struct FieldRule {
    field: FinancialField,
    labels: &'static [&'static str],
}

// Accepted label spellings per line item, in the form they take after
// normalization (ampersands, apostrophes and slashes are already stripped).
// Longer variants come first so alternation prefers them.
const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: FinancialField::TotalAssets,
        labels: &["total assets"],
    },
    FieldRule {
        field: FinancialField::CurrentAssets,
        labels: &["total current assets", "current assets"],
    },
    FieldRule {
        field: FinancialField::CashAndEquivalents,
        labels: &[
            "cash and cash equivalents",
            "cash cash equivalents",
            "cash and bank balances",
            "cash and equivalents",
            "cash at bank",
        ],
    },
    FieldRule {
        field: FinancialField::Receivables,
        labels: &[
            "trade receivables",
            "accounts receivable",
            "sundry debtors",
            "receivables",
            "debtors",
        ],
    },
    FieldRule {
        field: FinancialField::Inventory,
        labels: &["inventories", "inventory", "stock in trade", "closing stock"],
    },
    FieldRule {
        field: FinancialField::PropertyPlantEquipment,
        labels: &[
            "property, plant and equipment",
            "property plant and equipment",
            "fixed assets",
            "net block",
        ],
    },
    FieldRule {
        field: FinancialField::Investments,
        labels: &["non-current investments", "current investments", "investments"],
    },
    FieldRule {
        field: FinancialField::OtherAssets,
        labels: &["other current assets", "other non-current assets", "other assets"],
    },
    FieldRule {
        field: FinancialField::TotalLiabilities,
        labels: &["total liabilities"],
    },
    FieldRule {
        field: FinancialField::CurrentLiabilities,
        labels: &["total current liabilities", "current liabilities"],
    },
    FieldRule {
        field: FinancialField::TradePayables,
        labels: &[
            "trade payables",
            "accounts payable",
            "sundry creditors",
            "creditors",
        ],
    },
    FieldRule {
        field: FinancialField::ShortTermBorrowings,
        labels: &["short-term borrowings", "short term borrowings", "short term debt"],
    },
    FieldRule {
        field: FinancialField::LongTermDebt,
        labels: &[
            "long-term borrowings",
            "long term borrowings",
            "long term debt",
            "term loans",
        ],
    },
    FieldRule {
        field: FinancialField::OtherLiabilities,
        labels: &["other current liabilities", "other liabilities"],
    },
    FieldRule {
        field: FinancialField::TotalEquity,
        labels: &[
            "total shareholders funds",
            "shareholders funds",
            "shareholders equity",
            "total equity",
            "net worth",
        ],
    },
    FieldRule {
        field: FinancialField::ShareCapital,
        labels: &[
            "equity share capital",
            "paid-up capital",
            "paid up capital",
            "share capital",
        ],
    },
    FieldRule {
        field: FinancialField::RetainedEarnings,
        labels: &["reserves and surplus", "reserves surplus", "retained earnings"],
    },
    FieldRule {
        field: FinancialField::Revenue,
        labels: &[
            "revenue from operations",
            "total revenue",
            "net sales",
            "revenue",
            "turnover",
        ],
    },
    FieldRule {
        field: FinancialField::CostOfGoodsSold,
        labels: &[
            "cost of goods sold",
            "cost of materials consumed",
            "cost of sales",
            "cogs",
        ],
    },
    FieldRule {
        field: FinancialField::GrossProfit,
        labels: &["gross profit"],
    },
    FieldRule {
        field: FinancialField::OperatingExpenses,
        labels: &["total operating expenses", "operating expenses", "total expenses"],
    },
    FieldRule {
        field: FinancialField::NetProfit,
        labels: &[
            "profit after tax",
            "profit for the year",
            "net profit",
            "net income",
        ],
    },
];

// Label, optional separator, optional currency symbol, then a numeric literal
// with thousands separators and an optional decimal part.
static COMPILED_RULES: Lazy<Vec<(FinancialField, Regex)>> = Lazy::new(|| {
    FIELD_RULES
        .iter()
        .map(|rule| {
            let alternation = rule
                .labels
                .iter()
                .map(|label| regex::escape(label))
                .collect::<Vec<_>>()
                .join("|");
            // A dash only acts as a label separator when trailed by whitespace,
            // so "-5,000" still parses as a negative amount.
            let pattern = format!(
                r"(?i)\b(?:{alternation})\s*(?::|-\s)?\s*[₹$]?\s*(-?\d[\d,]*(?:\.\d+)?)"
            );
            (rule.field, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Pull the canonical line items out of normalized statement text using the
/// default first-match policy.
///
/// Deterministic and total: fields whose label never matches stay at 0.0,
/// which is indistinguishable from a reported zero.
pub fn extract_fields(text: &str) -> StructuredFinancialData {
    extract_fields_with_policy(text, MatchPolicy::default())
}

pub fn extract_fields_with_policy(text: &str, policy: MatchPolicy) -> StructuredFinancialData {
    let mut data = StructuredFinancialData::default();

    for (field, regex) in COMPILED_RULES.iter() {
        let matched = match policy {
            MatchPolicy::FirstMatch => regex.captures(text),
        };

        if let Some(cap) = matched {
            if let Some(value) = parse_amount(&cap[1]) {
                data.set(*field, value);
            }
        }
    }

    debug!(
        "extracted {} of {} fields from {} chars of text",
        data.reported_field_count(),
        FinancialField::ALL.len(),
        text.len()
    );

    data
}

fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated_amount() {
        let data = extract_fields("Total Assets: ₹1,234,500");
        assert_eq!(data.total_assets, 1_234_500.0);
    }

    #[test]
    fn test_dollar_and_decimal() {
        let data = extract_fields("Net Profit $12,345.67");
        assert_eq!(data.net_profit, 12_345.67);
    }

    #[test]
    fn test_first_match_wins() {
        let data = extract_fields("Total Assets 1,000\nTotal Assets 2,000");
        assert_eq!(data.total_assets, 1_000.0);
    }

    #[test]
    fn test_unmatched_fields_default_to_zero() {
        let data = extract_fields("Total Assets 1,000");
        assert_eq!(data.total_assets, 1_000.0);
        assert_eq!(data.revenue, 0.0);
        assert_eq!(data.inventory, 0.0);
    }

    #[test]
    fn test_alternative_labels() {
        let data = extract_fields(
            "Sundry Debtors 400\nReserves and Surplus 900\nProfit After Tax 150",
        );
        assert_eq!(data.receivables, 400.0);
        assert_eq!(data.retained_earnings, 900.0);
        assert_eq!(data.net_profit, 150.0);
    }

    #[test]
    fn test_negative_amount() {
        let data = extract_fields("Retained Earnings -5,000");
        assert_eq!(data.retained_earnings, -5_000.0);
    }

    #[test]
    fn test_longer_label_preferred() {
        let data = extract_fields("Total Current Assets 800\nTotal Assets 2,000");
        assert_eq!(data.current_assets, 800.0);
        assert_eq!(data.total_assets, 2_000.0);
    }

    #[test]
    fn test_label_without_number_does_not_match() {
        let data = extract_fields("Total Assets\nsee note 4");
        // "see note 4" is not adjacent to the label once the line break and
        // words intervene, so nothing is extracted.
        assert_eq!(data.total_assets, 0.0);
    }

    #[test]
    fn test_empty_text() {
        let data = extract_fields("");
        assert_eq!(data, StructuredFinancialData::default());
    }
}
