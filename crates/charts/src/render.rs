//! Terminal rendering of the dashboard cards with `comfy-table`.

use crate::series::{LineSeries, PieSlice};
use analytics::format::{format_currency_compact_with, format_currency_with, format_growth, format_percentage};
use analytics::report::{AttainmentReport, SalesSummary};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use rust_decimal::Decimal;

/// Draws the dashboard cards as tables, honoring the configured currency
/// symbol. Stateless apart from that display setting.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    currency_symbol: String,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new("$")
    }
}

impl CardRenderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// The "Total Sales" / "Sales by Region" / "Sales by Product" metric
    /// cards as a single table. `growth` is the month-over-month headline
    /// figure.
    pub fn metrics_table(&self, summary: &SalesSummary, growth: Option<Decimal>) -> Table {
        let mut table = card_table();
        table.set_header(vec!["Segment", "Sales", "Share"]);

        let growth_text = growth.map_or_else(String::new, |g| {
            format!("{} from last month", format_growth(g))
        });
        table.add_row(vec![
            Cell::new("Total Sales"),
            self.money_cell(summary.total_sales),
            Cell::new(growth_text),
        ]);

        for region in &summary.by_region {
            table.add_row(vec![
                Cell::new(&region.region),
                self.money_cell(region.sales),
                share_cell(region.share_pct),
            ]);
        }
        for product in &summary.by_product {
            table.add_row(vec![
                Cell::new(&product.product),
                self.money_cell(product.sales),
                share_cell(product.share_pct),
            ]);
        }

        table
    }

    /// The "Monthly Sales vs Target" card. Values use the chart axis style
    /// (compact thousands, `$95k`); attainment is sales over target.
    pub fn monthly_table(&self, report: &AttainmentReport) -> Table {
        let mut table = card_table();
        table.set_header(vec!["Month", "Actual Sales", "Target", "Attainment"]);

        for month in &report.months {
            table.add_row(vec![
                Cell::new(&month.month),
                self.compact_money_cell(month.sales),
                self.compact_money_cell(month.target),
                share_cell(month.attainment_pct),
            ]);
        }
        table.add_row(vec![
            Cell::new("Total"),
            self.money_cell(report.total_sales),
            self.money_cell(report.total_target),
            share_cell(report.overall_pct),
        ]);

        table
    }

    /// The "Sales by Region" distribution card, one row per pie slice.
    pub fn region_table(&self, slices: &[PieSlice]) -> Table {
        let mut table = card_table();
        table.set_header(vec!["Region", "Sales", "Share", "Color"]);

        for slice in slices {
            table.add_row(vec![
                Cell::new(&slice.label),
                self.money_cell(slice.value),
                share_cell(slice.share_pct),
                Cell::new(&slice.color),
            ]);
        }

        table
    }

    /// The "Product Sales Trends" card: one column per product line, one
    /// row per month.
    pub fn trend_table(&self, lines: &[LineSeries]) -> Table {
        let mut table = card_table();

        let mut header = vec!["Month".to_string()];
        header.extend(lines.iter().map(|l| l.name.clone()));
        table.set_header(header);

        let month_count = lines.iter().map(|l| l.points.len()).max().unwrap_or(0);
        for i in 0..month_count {
            let Some(month) = lines.iter().find_map(|l| l.points.get(i)).map(|(m, _)| m) else {
                continue;
            };
            let mut row = vec![Cell::new(month)];
            for line in lines {
                let text = line.points.get(i).map_or_else(String::new, |(_, sales)| {
                    format_currency_compact_with(*sales, &self.currency_symbol)
                });
                row.push(Cell::new(text).set_alignment(CellAlignment::Right));
            }
            table.add_row(row);
        }

        table
    }

    fn money_cell(&self, amount: Decimal) -> Cell {
        Cell::new(format_currency_with(amount, &self.currency_symbol))
            .set_alignment(CellAlignment::Right)
    }

    fn compact_money_cell(&self, amount: Decimal) -> Cell {
        Cell::new(format_currency_compact_with(amount, &self.currency_symbol))
            .set_alignment(CellAlignment::Right)
    }
}

fn card_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn share_cell(share: Option<Decimal>) -> Cell {
    let text = share.map_or_else(|| "-".to_string(), format_percentage);
    Cell::new(text).set_alignment(CellAlignment::Right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{monthly_sales_chart, product_trend_lines};
    use analytics::SalesAnalytics;
    use core_types::{MonthlySales, ProductSales, ProductTrendPoint, RegionSales};
    use rust_decimal_macros::dec;

    fn sample_summary() -> SalesSummary {
        let regions = vec![RegionSales {
            region: "Europe".to_string(),
            sales: dec!(380_000),
            color: "#10b981".to_string(),
        }];
        let products = vec![ProductSales {
            product: "Product A".to_string(),
            sales: dec!(420_000),
        }];
        SalesAnalytics::new().summarize(&regions, &products).unwrap()
    }

    #[test]
    fn metrics_table_shows_total_and_growth() {
        let table = CardRenderer::default().metrics_table(&sample_summary(), Some(dec!(12.5)));
        let rendered = table.to_string();
        assert!(rendered.contains("Total Sales"));
        assert!(rendered.contains("$380,000"));
        assert!(rendered.contains("+12.5% from last month"));
    }

    #[test]
    fn metrics_table_without_growth_leaves_the_cell_blank() {
        let table = CardRenderer::default().metrics_table(&sample_summary(), None);
        assert!(!table.to_string().contains("from last month"));
    }

    #[test]
    fn configured_currency_symbol_reaches_every_card() {
        let renderer = CardRenderer::new("€");
        let rendered = renderer.metrics_table(&sample_summary(), None).to_string();
        assert!(rendered.contains("€380,000"));
        assert!(!rendered.contains('$'));
    }

    #[test]
    fn monthly_table_uses_compact_currency_and_totals() {
        let monthly = vec![
            MonthlySales {
                month: "Jan".to_string(),
                sales: dec!(95_000),
                target: dec!(100_000),
            },
            MonthlySales {
                month: "Feb".to_string(),
                sales: dec!(108_000),
                target: dec!(105_000),
            },
        ];
        let report = SalesAnalytics::new().target_attainment(&monthly).unwrap();
        let rendered = CardRenderer::default().monthly_table(&report).to_string();

        assert!(rendered.contains("$95k"));
        assert!(rendered.contains("$108k"));
        assert!(rendered.contains("$203,000"));
    }

    #[test]
    fn trend_table_has_one_column_per_product() {
        let trends = vec![ProductTrendPoint {
            month: "Jan".to_string(),
            by_product: vec![
                ProductSales {
                    product: "Product A".to_string(),
                    sales: dec!(35_000),
                },
                ProductSales {
                    product: "Product B".to_string(),
                    sales: dec!(28_000),
                },
            ],
        }];
        let lines = product_trend_lines(&trends).unwrap();
        let rendered = CardRenderer::default().trend_table(&lines).to_string();

        assert!(rendered.contains("Product A"));
        assert!(rendered.contains("Product B"));
        assert!(rendered.contains("$35k"));
    }

    #[test]
    fn monthly_chart_series_feed_the_table_consistently() {
        let monthly = vec![MonthlySales {
            month: "Jan".to_string(),
            sales: dec!(95_000),
            target: dec!(100_000),
        }];
        let series = monthly_sales_chart(&monthly).unwrap();
        assert_eq!(series[0].values.len(), series[1].values.len());
    }
}
