//! # Vantage Date-Range Filters
//!
//! This crate provides the quick-filter date-range resolver and the filter
//! state controller used by the dashboard.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   rendering or data sources. It depends only on `core-types` (Layer 0).
//! - **Deterministic Resolution:** The resolver takes the reference "today"
//!   date as an argument instead of reading a clock, so every resolution is
//!   reproducible and directly testable.
//! - **Total Over Its Inputs:** The resolver never fails. Unrecognized
//!   filter keys degrade to a single-day range covering `today`.
//!
//! ## Public API
//!
//! - `resolve` / `resolve_key`: quick-filter key to concrete date range.
//! - `range_label`: human-readable label for a `DateRange`.
//! - `FilterState`: the selection state of the filter control, with change
//!   notifications for the embedding UI.

// Declare the modules that constitute this crate.
pub mod resolver;
pub mod state;

// Re-export the key components to create a clean, public-facing API.
pub use resolver::{DEFAULT_LABEL_FORMAT, range_label, range_label_with, resolve, resolve_key};
pub use state::FilterState;
