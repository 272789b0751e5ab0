use crate::error::ChartError;
use core_types::{MonthlySales, ProductTrendPoint, RegionSales};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One bar series of a grouped bar chart: a name plus one value per
/// category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<(String, Decimal)>,
}

/// One slice of a distribution (pie) chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: Decimal,
    /// Share of the series total, in percent with one decimal place.
    pub share_pct: Option<Decimal>,
    pub color: String,
}

/// One line of a trend chart: a name plus one point per category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<(String, Decimal)>,
}

/// Assembles the "Monthly Sales vs Target" grouped bar chart: one series
/// for actual sales and one for targets, keyed by month.
pub fn monthly_sales_chart(monthly: &[MonthlySales]) -> Result<Vec<BarSeries>, ChartError> {
    if monthly.is_empty() {
        return Err(ChartError::EmptySeries("Monthly Sales vs Target".to_string()));
    }

    let actual = BarSeries {
        name: "Actual Sales".to_string(),
        values: monthly.iter().map(|m| (m.month.clone(), m.sales)).collect(),
    };
    let target = BarSeries {
        name: "Target".to_string(),
        values: monthly.iter().map(|m| (m.month.clone(), m.target)).collect(),
    };

    Ok(vec![actual, target])
}

/// Assembles the "Sales by Region" pie chart: one slice per region with its
/// share of the series total, as shown in the slice tooltip.
pub fn region_distribution(regions: &[RegionSales]) -> Result<Vec<PieSlice>, ChartError> {
    if regions.is_empty() {
        return Err(ChartError::EmptySeries("Sales by Region".to_string()));
    }

    let total: Decimal = regions.iter().map(|r| r.sales).sum();

    Ok(regions
        .iter()
        .map(|r| PieSlice {
            label: r.region.clone(),
            value: r.sales,
            share_pct: if total.is_zero() {
                None
            } else {
                Some(((r.sales / total) * dec!(100)).round_dp(1))
            },
            color: r.color.clone(),
        })
        .collect())
}

/// Assembles the "Product Sales Trends" line chart: one line per product
/// across the months. Product order follows the first point in the series.
pub fn product_trend_lines(trends: &[ProductTrendPoint]) -> Result<Vec<LineSeries>, ChartError> {
    let Some(first) = trends.first() else {
        return Err(ChartError::EmptySeries("Product Sales Trends".to_string()));
    };

    let mut lines: Vec<LineSeries> = first
        .by_product
        .iter()
        .map(|p| LineSeries {
            name: p.product.clone(),
            points: Vec::with_capacity(trends.len()),
        })
        .collect();

    for point in trends {
        for line in &mut lines {
            // Months missing a product simply skip that point.
            if let Some(sales) = point
                .by_product
                .iter()
                .find(|p| p.product == line.name)
                .map(|p| p.sales)
            {
                line.points.push((point.month.clone(), sales));
            }
        }
    }

    Ok(lines)
}
