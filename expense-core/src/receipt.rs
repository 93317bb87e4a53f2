//! Receipt record types produced by the simulated extraction

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line on a receipt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    /// Kept exactly as printed on the receipt
    pub price: String,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }
}

/// Fields "extracted" from a receipt image
///
/// Every field is stored verbatim. Amounts are minor-unit strings ("1547"),
/// except where a catalog entry spells them otherwise ("0.00").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedReceipt {
    pub vendor: String,
    pub amount: String,
    /// ISO-8601 date (YYYY-MM-DD)
    pub date: String,
    pub category: String,
    pub payment_method: String,
    pub items: Vec<LineItem>,
}

impl ExtractedReceipt {
    pub fn new(
        vendor: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
        payment_method: impl Into<String>,
        items: Vec<LineItem>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            amount: amount.into(),
            date: date.into(),
            category: category.into(),
            payment_method: payment_method.into(),
            items,
        }
    }

    /// Parse `date` as a calendar date
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .with_context(|| format!("invalid receipt date: {:?}", self.date))
    }
}
