use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One region's sales together with its computed share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionShare {
    pub region: String,
    pub sales: Decimal,
    /// Share of the regional total, in percent with one decimal place.
    /// `None` when the total is zero.
    pub share_pct: Option<Decimal>,
    /// Series color inherited from the input data.
    pub color: String,
}

/// One product line's sales together with its computed share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductShare {
    pub product: String,
    pub sales: Decimal,
    pub share_pct: Option<Decimal>,
}

/// The figures behind the dashboard's metric cards.
///
/// This struct is the output of `SalesAnalytics::summarize` and serves as
/// the data transfer object for the metric cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_sales: Decimal,
    pub by_region: Vec<RegionShare>,
    pub by_product: Vec<ProductShare>,
}

impl SalesSummary {
    /// Creates a new, zeroed-out summary.
    /// This is useful as a default or starting point before calculations.
    pub fn new() -> Self {
        Self {
            total_sales: Decimal::ZERO,
            by_region: Vec::new(),
            by_product: Vec::new(),
        }
    }
}

impl Default for SalesSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Actual vs target for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthAttainment {
    pub month: String,
    pub sales: Decimal,
    pub target: Decimal,
    /// Sales as a percentage of target, one decimal place. `None` when the
    /// target is zero.
    pub attainment_pct: Option<Decimal>,
}

/// Target attainment across a monthly series, with per-month rows and the
/// series totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttainmentReport {
    pub months: Vec<MonthAttainment>,
    pub total_sales: Decimal,
    pub total_target: Decimal,
    pub overall_pct: Option<Decimal>,
}
