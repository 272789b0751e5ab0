use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range selected through the dashboard filter.
///
/// Both bounds absent means "no filter applied". When both bounds are
/// present the range is ordered (`from <= to`); the quick-filter resolver
/// always produces ordered pairs, and callers building custom ranges must
/// not violate the ordering. A `DateRange` is a value: to change the
/// selection, produce a new one rather than mutating in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range with both bounds set.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        debug_assert!(from <= to, "date range bounds out of order");
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Creates a range covering exactly one day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    /// Creates the unbounded range, meaning "no filter applied".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true when neither bound is set.
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Returns true if the given day falls within the range. Missing bounds
    /// are treated as open ends.
    pub fn contains(&self, day: NaiveDate) -> bool {
        let after_start = self.from.is_none_or(|from| day >= from);
        let before_end = self.to.is_none_or(|to| day <= to);
        after_start && before_end
    }
}

/// Sales attributed to one geographic region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSales {
    pub region: String,
    pub sales: Decimal,
    /// Hex color used when the region is drawn as a chart series.
    pub color: String,
}

/// Sales attributed to one product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product: String,
    pub sales: Decimal,
}

/// Actual and target sales figures for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    /// Short month label, e.g. "Jan".
    pub month: String,
    pub sales: Decimal,
    pub target: Decimal,
}

/// Per-product sales figures for one calendar month, used by trend charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTrendPoint {
    pub month: String,
    pub by_product: Vec<ProductSales>,
}
