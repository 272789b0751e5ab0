use core_types::QuickFilter;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dashboard: Dashboard,
    pub display: Display,
    pub cards: Cards,
}

/// Top-level dashboard settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    /// Heading printed above the cards.
    pub title: String,
    /// The quick filter applied when none is given on the command line.
    pub default_filter: QuickFilter,
}

/// Presentation settings for formatted values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Symbol prefixed to monetary amounts.
    pub currency_symbol: String,
    /// chrono format pattern for range labels, e.g. "%b %d, %Y".
    pub date_format: String,
}

/// Which dashboard cards are rendered.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Cards {
    pub metrics: bool,
    pub monthly: bool,
    pub regions: bool,
    pub trends: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard: Dashboard::default(),
            display: Display::default(),
            cards: Cards::default(),
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            date_format: "%b %d, %Y".to_string(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            title: "Sales Analytics Dashboard".to_string(),
            default_filter: QuickFilter::ThisMonth,
        }
    }
}

impl Default for Cards {
    fn default() -> Self {
        Self {
            metrics: true,
            monthly: true,
            regions: true,
            trends: true,
        }
    }
}
