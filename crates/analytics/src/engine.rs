use crate::error::AnalyticsError;
use crate::report::{AttainmentReport, MonthAttainment, ProductShare, RegionShare, SalesSummary};
use core_types::{MonthlySales, ProductSales, RegionSales};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const HUNDRED: Decimal = dec!(100);

/// A stateless calculator for deriving display metrics from sales figures.
#[derive(Debug, Default)]
pub struct SalesAnalytics {}

impl SalesAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the metric-card summary: the sales total plus per-region and
    /// per-product breakdowns, each carrying its percentage share of its
    /// own series total.
    ///
    /// With no input at all the summary is zeroed out rather than an error,
    /// matching a dashboard that simply renders empty cards.
    pub fn summarize(
        &self,
        regions: &[RegionSales],
        products: &[ProductSales],
    ) -> Result<SalesSummary, AnalyticsError> {
        let mut summary = SalesSummary::new();

        if regions.is_empty() && products.is_empty() {
            return Ok(summary);
        }

        let region_total: Decimal = regions.iter().map(|r| r.sales).sum();
        let product_total: Decimal = products.iter().map(|p| p.sales).sum();

        // The headline figure. Regions are the authoritative breakdown;
        // products only stand in when no regional data exists.
        summary.total_sales = if regions.is_empty() {
            product_total
        } else {
            region_total
        };

        summary.by_region = regions
            .iter()
            .map(|r| RegionShare {
                region: r.region.clone(),
                sales: r.sales,
                share_pct: share_of(r.sales, region_total),
                color: r.color.clone(),
            })
            .collect();

        summary.by_product = products
            .iter()
            .map(|p| ProductShare {
                product: p.product.clone(),
                sales: p.sales,
                share_pct: share_of(p.sales, product_total),
            })
            .collect();

        Ok(summary)
    }

    /// Computes actual-vs-target attainment for a monthly series.
    pub fn target_attainment(
        &self,
        monthly: &[MonthlySales],
    ) -> Result<AttainmentReport, AnalyticsError> {
        if monthly.is_empty() {
            return Err(AnalyticsError::NotEnoughData(
                "target attainment requires at least one month".to_string(),
            ));
        }

        let months = monthly
            .iter()
            .map(|m| MonthAttainment {
                month: m.month.clone(),
                sales: m.sales,
                target: m.target,
                attainment_pct: share_of(m.sales, m.target),
            })
            .collect();

        let total_sales: Decimal = monthly.iter().map(|m| m.sales).sum();
        let total_target: Decimal = monthly.iter().map(|m| m.target).sum();

        Ok(AttainmentReport {
            months,
            total_sales,
            total_target,
            overall_pct: share_of(total_sales, total_target),
        })
    }

    /// Growth of the most recent month against the one before it, in
    /// percent with one decimal place (the "+12.5% from last month"
    /// figure). `None` with fewer than two months or a zero base month.
    pub fn month_over_month_growth(&self, monthly: &[MonthlySales]) -> Option<Decimal> {
        let [.., previous, latest] = monthly else {
            return None;
        };
        if previous.sales.is_zero() {
            return None;
        }
        Some((((latest.sales - previous.sales) / previous.sales) * HUNDRED).round_dp(1))
    }
}

/// `part` as a percentage of `whole`, one decimal place. `None` when the
/// whole is zero.
fn share_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        None
    } else {
        Some(((part / whole) * HUNDRED).round_dp(1))
    }
}
