//! # Vantage Chart Assembly
//!
//! This crate turns raw sales data into renderable chart series and draws
//! the dashboard's cards as terminal tables.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Composition:** Series assembly consumes `core-types` values
//!   and the `analytics` calculators; it owns no business arithmetic beyond
//!   the share percentages a chart tooltip would display.
//! - **Series, Not Pixels:** The output of the assembly functions is plain
//!   data (labels, values, color hints). Rendering is confined to the
//!   `render` module so other front ends can consume the same series.
//!
//! ## Public API
//!
//! - `monthly_sales_chart`, `region_distribution`, `product_trend_lines`:
//!   series assembly for the three charts.
//! - `render`: `comfy-table` rendering of the dashboard cards.
//! - `ChartError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod render;
pub mod series;

// Re-export the key components to create a clean, public-facing API.
pub use error::ChartError;
pub use render::CardRenderer;
pub use series::{
    BarSeries, LineSeries, PieSlice, monthly_sales_chart, product_trend_lines,
    region_distribution,
};
