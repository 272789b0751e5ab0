use chrono::{Datelike, Duration, NaiveDate};
use core_types::{DateRange, QuickFilter};

/// Default display pattern for range labels, e.g. "Mar 15, 2024".
pub const DEFAULT_LABEL_FORMAT: &str = "%b %d, %Y";

/// Resolves a quick filter against a reference date into a concrete range.
///
/// Weeks start on Sunday. The period ends are deliberately asymmetric:
/// "this X" ranges end at `today` because they represent the part of the
/// period elapsed so far, while "last X" ranges end at the close of their
/// period because that period is fully over. Callers must not "fix" this
/// to a uniform rule; it is the contract of the filter dropdown.
pub fn resolve(filter: QuickFilter, today: NaiveDate) -> DateRange {
    match filter {
        QuickFilter::Today => DateRange::single_day(today),
        QuickFilter::Yesterday => DateRange::single_day(today - Duration::days(1)),
        QuickFilter::ThisWeek => DateRange::new(start_of_week(today), today),
        QuickFilter::LastWeek => {
            let from = start_of_week(today) - Duration::days(7);
            DateRange::new(from, from + Duration::days(6))
        }
        QuickFilter::ThisMonth => DateRange::new(first_of_month(today.year(), today.month()), today),
        QuickFilter::LastMonth => {
            let this_month = first_of_month(today.year(), today.month());
            let to = this_month.pred_opt().unwrap();
            DateRange::new(first_of_month(to.year(), to.month()), to)
        }
        QuickFilter::ThisQuarter => DateRange::new(start_of_quarter(today), today),
        QuickFilter::LastQuarter => {
            let to = start_of_quarter(today).pred_opt().unwrap();
            DateRange::new(start_of_quarter(to), to)
        }
        QuickFilter::ThisYear => DateRange::new(first_of_month(today.year(), 1), today),
        QuickFilter::LastYear => DateRange::new(
            first_of_month(today.year() - 1, 1),
            NaiveDate::from_ymd_opt(today.year() - 1, 12, 31).unwrap(),
        ),
    }
}

/// Resolves a raw filter key string, falling back to a single-day range
/// covering `today` when the key is not one of the known quick filters.
/// This is the string-level boundary of the resolver: it never fails.
pub fn resolve_key(key: &str, today: NaiveDate) -> DateRange {
    match key.parse::<QuickFilter>() {
        Ok(filter) => resolve(filter, today),
        Err(_) => {
            tracing::debug!(key, "unknown quick filter key, defaulting to today");
            DateRange::single_day(today)
        }
    }
}

/// Formats a range for display in the filter control, using the default
/// date pattern.
///
/// Four cases: no bounds -> the placeholder text; only a start -> that date;
/// equal bounds -> the single date; distinct bounds -> "A - B".
pub fn range_label(range: &DateRange) -> String {
    range_label_with(range, DEFAULT_LABEL_FORMAT)
}

/// `range_label` with a caller-supplied chrono date pattern, for deployments
/// that configure a different display format. The branching rules are the
/// contract; the glyphs are not.
pub fn range_label_with(range: &DateRange, pattern: &str) -> String {
    match (range.from, range.to) {
        (Some(from), Some(to)) if from == to => from.format(pattern).to_string(),
        (Some(from), Some(to)) => {
            format!("{} - {}", from.format(pattern), to.format(pattern))
        }
        (Some(from), None) => from.format(pattern).to_string(),
        _ => "Select date range".to_string(),
    }
}

/// The most recent Sunday on or before the given date.
fn start_of_week(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_sunday()))
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Infallible for month values coming from chrono itself.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// First day of the calendar quarter (Jan/Apr/Jul/Oct) containing the date.
fn start_of_quarter(day: NaiveDate) -> NaiveDate {
    let quarter_start_month = (day.month0() / 3) * 3 + 1;
    first_of_month(day.year(), quarter_start_month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn every_filter_produces_an_ordered_range() {
        // Sample days across weekday positions, month lengths, and year edges.
        let days = [
            d(2024, 3, 15),
            d(2024, 1, 1),
            d(2024, 12, 31),
            d(2023, 2, 28),
            d(2024, 2, 29),
            d(2025, 7, 6),
        ];
        for today in days {
            for filter in QuickFilter::ALL {
                let range = resolve(filter, today);
                let (from, to) = (range.from.unwrap(), range.to.unwrap());
                assert!(from <= to, "{filter:?} on {today} gave {from} > {to}");
            }
        }
    }

    #[test]
    fn today_and_yesterday_are_single_days() {
        let today = d(2024, 3, 15);
        assert_eq!(
            resolve(QuickFilter::Today, today),
            DateRange::new(today, today)
        );
        assert_eq!(
            resolve(QuickFilter::Yesterday, today),
            DateRange::new(d(2024, 3, 14), d(2024, 3, 14))
        );
    }

    #[test]
    fn this_week_runs_from_sunday_through_today() {
        // 2024-03-15 is a Friday (day-of-week index 5, Sunday start).
        let range = resolve(QuickFilter::ThisWeek, d(2024, 3, 15));
        assert_eq!(range, DateRange::new(d(2024, 3, 10), d(2024, 3, 15)));
    }

    #[test]
    fn this_week_on_a_sunday_starts_today() {
        let sunday = d(2024, 3, 10);
        assert_eq!(
            resolve(QuickFilter::ThisWeek, sunday),
            DateRange::new(sunday, sunday)
        );
    }

    #[test]
    fn last_week_is_the_full_prior_sunday_to_saturday_week() {
        let range = resolve(QuickFilter::LastWeek, d(2024, 3, 15));
        assert_eq!(range, DateRange::new(d(2024, 3, 3), d(2024, 3, 9)));
    }

    #[test]
    fn this_month_ends_at_today_not_month_end() {
        let range = resolve(QuickFilter::ThisMonth, d(2024, 3, 15));
        assert_eq!(range, DateRange::new(d(2024, 3, 1), d(2024, 3, 15)));
    }

    #[test]
    fn last_month_covers_leap_february() {
        let range = resolve(QuickFilter::LastMonth, d(2024, 3, 15));
        assert_eq!(range, DateRange::new(d(2024, 2, 1), d(2024, 2, 29)));
    }

    #[test]
    fn last_month_crosses_the_year_boundary() {
        let range = resolve(QuickFilter::LastMonth, d(2024, 1, 20));
        assert_eq!(range, DateRange::new(d(2023, 12, 1), d(2023, 12, 31)));
    }

    #[test]
    fn quarters_are_calendar_aligned() {
        // 2024-05-10 sits in Q2 (Apr-Jun).
        let today = d(2024, 5, 10);
        assert_eq!(
            resolve(QuickFilter::ThisQuarter, today),
            DateRange::new(d(2024, 4, 1), today)
        );
        assert_eq!(
            resolve(QuickFilter::LastQuarter, today),
            DateRange::new(d(2024, 1, 1), d(2024, 3, 31))
        );
    }

    #[test]
    fn last_quarter_from_q1_is_prior_year_q4() {
        let range = resolve(QuickFilter::LastQuarter, d(2024, 2, 14));
        assert_eq!(range, DateRange::new(d(2023, 10, 1), d(2023, 12, 31)));
    }

    #[test]
    fn year_ranges() {
        let today = d(2024, 3, 15);
        assert_eq!(
            resolve(QuickFilter::ThisYear, today),
            DateRange::new(d(2024, 1, 1), today)
        );
        assert_eq!(
            resolve(QuickFilter::LastYear, today),
            DateRange::new(d(2023, 1, 1), d(2023, 12, 31))
        );
    }

    #[test]
    fn unknown_key_falls_back_to_today() {
        let today = d(2024, 3, 15);
        assert_eq!(resolve_key("bogusKey", today), DateRange::new(today, today));
        assert_eq!(resolve_key("", today), DateRange::new(today, today));
    }

    #[test]
    fn known_keys_resolve_like_the_typed_filter() {
        let today = d(2024, 3, 15);
        assert_eq!(
            resolve_key("lastQuarter", today),
            resolve(QuickFilter::LastQuarter, today)
        );
    }

    #[test]
    fn label_of_an_empty_range_is_the_placeholder() {
        assert_eq!(range_label(&DateRange::empty()), "Select date range");
    }

    #[test]
    fn label_of_a_single_day_collapses_to_one_date() {
        let range = resolve(QuickFilter::Today, d(2024, 3, 15));
        assert_eq!(range_label(&range), "Mar 15, 2024");
    }

    #[test]
    fn label_of_a_start_only_range_is_the_start_date() {
        let range = DateRange {
            from: Some(d(2024, 3, 1)),
            to: None,
        };
        assert_eq!(range_label(&range), "Mar 01, 2024");
    }

    #[test]
    fn label_of_a_distinct_range_joins_both_dates() {
        let range = DateRange::new(d(2024, 3, 1), d(2024, 3, 15));
        assert_eq!(range_label(&range), "Mar 01, 2024 - Mar 15, 2024");
    }

    #[test]
    fn label_honors_a_configured_date_pattern() {
        let range = DateRange::new(d(2024, 3, 1), d(2024, 3, 15));
        assert_eq!(
            range_label_with(&range, "%Y-%m-%d"),
            "2024-03-01 - 2024-03-15"
        );
        assert_eq!(
            range_label_with(&DateRange::single_day(d(2024, 3, 15)), "%d/%m/%Y"),
            "15/03/2024"
        );
    }
}
