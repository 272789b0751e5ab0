use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named, predefined date-range shortcut offered by the filter dropdown.
///
/// The set is closed: every variant maps to one entry in the dropdown and
/// the resolver handles all of them. Serialized form uses the camelCase
/// wire keys (`today`, `thisWeek`, `lastQuarter`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuickFilter {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisQuarter,
    LastQuarter,
    ThisYear,
    LastYear,
}

impl QuickFilter {
    /// All quick filters, in dropdown order.
    pub const ALL: [QuickFilter; 10] = [
        QuickFilter::Today,
        QuickFilter::Yesterday,
        QuickFilter::ThisWeek,
        QuickFilter::LastWeek,
        QuickFilter::ThisMonth,
        QuickFilter::LastMonth,
        QuickFilter::ThisQuarter,
        QuickFilter::LastQuarter,
        QuickFilter::ThisYear,
        QuickFilter::LastYear,
    ];

    /// Returns the wire key for this filter (e.g. "thisQuarter").
    pub fn key(&self) -> &'static str {
        match self {
            QuickFilter::Today => "today",
            QuickFilter::Yesterday => "yesterday",
            QuickFilter::ThisWeek => "thisWeek",
            QuickFilter::LastWeek => "lastWeek",
            QuickFilter::ThisMonth => "thisMonth",
            QuickFilter::LastMonth => "lastMonth",
            QuickFilter::ThisQuarter => "thisQuarter",
            QuickFilter::LastQuarter => "lastQuarter",
            QuickFilter::ThisYear => "thisYear",
            QuickFilter::LastYear => "lastYear",
        }
    }

    /// Returns the human-readable dropdown label (e.g. "This Quarter").
    pub fn label(&self) -> &'static str {
        match self {
            QuickFilter::Today => "Today",
            QuickFilter::Yesterday => "Yesterday",
            QuickFilter::ThisWeek => "This Week",
            QuickFilter::LastWeek => "Last Week",
            QuickFilter::ThisMonth => "This Month",
            QuickFilter::LastMonth => "Last Month",
            QuickFilter::ThisQuarter => "This Quarter",
            QuickFilter::LastQuarter => "Last Quarter",
            QuickFilter::ThisYear => "This Year",
            QuickFilter::LastYear => "Last Year",
        }
    }
}

impl fmt::Display for QuickFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuickFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.key() == s)
            .ok_or_else(|| CoreError::InvalidInput("quick filter".to_string(), s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for filter in QuickFilter::ALL {
            assert_eq!(filter.key().parse::<QuickFilter>().unwrap(), filter);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!("bogusKey".parse::<QuickFilter>().is_err());
        assert!("THISWEEK".parse::<QuickFilter>().is_err());
    }

    #[test]
    fn serde_uses_wire_keys() {
        let json = serde_json::to_string(&QuickFilter::LastQuarter).unwrap();
        assert_eq!(json, "\"lastQuarter\"");
    }
}
