//! # Vantage Sample Dataset
//!
//! The static sales figures rendered by the dashboard. The dashboard ships
//! with this fixed dataset so it can be run and demoed with zero setup;
//! every constructor returns freshly owned values.

use core_types::{MonthlySales, ProductSales, ProductTrendPoint, RegionSales};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Total sales across all regions and products.
pub fn total_sales() -> Decimal {
    dec!(1_250_000)
}

/// Sales per region, with the fixed series color each region is drawn in.
pub fn region_sales() -> Vec<RegionSales> {
    let rows: [(&str, Decimal, &str); 5] = [
        ("North America", dec!(450_000), "#3b82f6"),
        ("Europe", dec!(380_000), "#10b981"),
        ("Asia Pacific", dec!(280_000), "#f59e0b"),
        ("Latin America", dec!(90_000), "#ef4444"),
        ("Middle East & Africa", dec!(50_000), "#8b5cf6"),
    ];
    rows.into_iter()
        .map(|(region, sales, color)| RegionSales {
            region: region.to_string(),
            sales,
            color: color.to_string(),
        })
        .collect()
}

/// Sales per product line.
pub fn product_sales() -> Vec<ProductSales> {
    let rows: [(&str, Decimal); 4] = [
        ("Product A", dec!(420_000)),
        ("Product B", dec!(350_000)),
        ("Product C", dec!(280_000)),
        ("Product D", dec!(200_000)),
    ];
    rows.into_iter()
        .map(|(product, sales)| ProductSales {
            product: product.to_string(),
            sales,
        })
        .collect()
}

/// Actual vs target sales for each month of the year.
pub fn monthly_sales() -> Vec<MonthlySales> {
    let figures: [(Decimal, Decimal); 12] = [
        (dec!(95_000), dec!(100_000)),
        (dec!(108_000), dec!(105_000)),
        (dec!(125_000), dec!(110_000)),
        (dec!(118_000), dec!(115_000)),
        (dec!(135_000), dec!(120_000)),
        (dec!(142_000), dec!(125_000)),
        (dec!(138_000), dec!(130_000)),
        (dec!(155_000), dec!(135_000)),
        (dec!(148_000), dec!(140_000)),
        (dec!(162_000), dec!(145_000)),
        (dec!(158_000), dec!(150_000)),
        (dec!(175_000), dec!(155_000)),
    ];
    MONTHS
        .iter()
        .zip(figures)
        .map(|(month, (sales, target))| MonthlySales {
            month: month.to_string(),
            sales,
            target,
        })
        .collect()
}

/// Monthly per-product sales, one point per month for the trend chart.
pub fn product_trends() -> Vec<ProductTrendPoint> {
    let figures: [[Decimal; 4]; 12] = [
        [dec!(35_000), dec!(28_000), dec!(22_000), dec!(15_000)],
        [dec!(38_000), dec!(30_000), dec!(24_000), dec!(16_000)],
        [dec!(42_000), dec!(35_000), dec!(28_000), dec!(20_000)],
        [dec!(40_000), dec!(32_000), dec!(26_000), dec!(18_000)],
        [dec!(45_000), dec!(38_000), dec!(30_000), dec!(22_000)],
        [dec!(48_000), dec!(40_000), dec!(32_000), dec!(22_000)],
        [dec!(46_000), dec!(39_000), dec!(31_000), dec!(22_000)],
        [dec!(52_000), dec!(43_000), dec!(34_000), dec!(26_000)],
        [dec!(50_000), dec!(41_000), dec!(33_000), dec!(24_000)],
        [dec!(55_000), dec!(45_000), dec!(36_000), dec!(26_000)],
        [dec!(53_000), dec!(44_000), dec!(35_000), dec!(26_000)],
        [dec!(58_000), dec!(48_000), dec!(38_000), dec!(31_000)],
    ];
    let products = ["Product A", "Product B", "Product C", "Product D"];
    MONTHS
        .iter()
        .zip(figures)
        .map(|(month, row)| ProductTrendPoint {
            month: month.to_string(),
            by_product: products
                .iter()
                .zip(row)
                .map(|(product, sales)| ProductSales {
                    product: product.to_string(),
                    sales,
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_figures_add_up_to_the_total() {
        let sum: Decimal = region_sales().iter().map(|r| r.sales).sum();
        assert_eq!(sum, total_sales());
    }

    #[test]
    fn product_figures_add_up_to_the_total() {
        let sum: Decimal = product_sales().iter().map(|p| p.sales).sum();
        assert_eq!(sum, total_sales());
    }

    #[test]
    fn every_month_is_present_once() {
        let monthly = monthly_sales();
        assert_eq!(monthly.len(), 12);
        assert_eq!(monthly[0].month, "Jan");
        assert_eq!(monthly[11].month, "Dec");

        let trends = product_trends();
        assert_eq!(trends.len(), 12);
        assert!(trends.iter().all(|p| p.by_product.len() == 4));
    }
}
