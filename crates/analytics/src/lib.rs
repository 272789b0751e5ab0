//! # Vantage Sales Analytics
//!
//! This crate derives the figures displayed on the dashboard's metric cards
//! from raw sales data.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   data sources or rendering. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `SalesAnalytics` engine is a stateless
//!   calculator. It takes raw sales figures as input and produces a
//!   `SalesSummary` or `AttainmentReport` as output, which makes it highly
//!   reliable and easy to test.
//!
//! ## Public API
//!
//! - `SalesAnalytics`: The main struct that contains the calculation logic.
//! - `SalesSummary` / `AttainmentReport`: the standardized output structs.
//! - `format`: currency and percentage display formatting.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod format;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::SalesAnalytics;
pub use error::AnalyticsError;
pub use report::{AttainmentReport, MonthAttainment, ProductShare, RegionShare, SalesSummary};
