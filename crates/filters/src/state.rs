use crate::resolver::{range_label, resolve};
use chrono::NaiveDate;
use core_types::{DateRange, QuickFilter};

type RangeObserver = Box<dyn FnMut(Option<NaiveDate>, Option<NaiveDate>)>;
type FilterObserver = Box<dyn FnMut(QuickFilter)>;

/// The selection state of the date-range filter control.
///
/// Mirrors the filter widget's behavior: applying a quick filter resolves
/// and stores a fresh range, custom selections overwrite the stored range,
/// and `reset` clears everything. Consumers that need to react to changes
/// register observers; both are optional. The state is single-threaded and
/// each change notification is independent, so when changes arrive in a
/// burst only the most recent one is meaningful.
#[derive(Default)]
pub struct FilterState {
    range: DateRange,
    selected: Option<QuickFilter>,
    on_range_change: Option<RangeObserver>,
    on_quick_filter: Option<FilterObserver>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the observer notified with `(from, to)` on every change.
    pub fn set_range_observer(
        &mut self,
        observer: impl FnMut(Option<NaiveDate>, Option<NaiveDate>) + 'static,
    ) {
        self.on_range_change = Some(Box::new(observer));
    }

    /// Registers the observer notified with the key of each applied quick
    /// filter, for downstream bookkeeping.
    pub fn set_filter_observer(&mut self, observer: impl FnMut(QuickFilter) + 'static) {
        self.on_quick_filter = Some(Box::new(observer));
    }

    /// Applies a quick filter: resolves it against `today`, stores the
    /// result, and notifies both observers.
    pub fn apply_quick_filter(&mut self, filter: QuickFilter, today: NaiveDate) -> DateRange {
        let range = resolve(filter, today);
        self.range = range;
        self.selected = Some(filter);
        self.notify_range();
        if let Some(observer) = &mut self.on_quick_filter {
            observer(filter);
        }
        range
    }

    /// Stores a custom range picked outside the quick-filter dropdown and
    /// notifies the range observer. The selected quick filter is left as
    /// is; only `reset` clears it.
    pub fn select_range(&mut self, range: DateRange) {
        self.range = range;
        self.notify_range();
    }

    /// Clears both bounds and the selected quick filter, notifying the
    /// range observer with `(None, None)`.
    pub fn reset(&mut self) {
        self.range = DateRange::empty();
        self.selected = None;
        self.notify_range();
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn selected(&self) -> Option<QuickFilter> {
        self.selected
    }

    /// The display label for the current selection.
    pub fn label(&self) -> String {
        range_label(&self.range)
    }

    fn notify_range(&mut self) {
        if let Some(observer) = &mut self.on_range_change {
            observer(self.range.from, self.range.to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn applying_a_quick_filter_notifies_both_observers() {
        let ranges = Rc::new(RefCell::new(Vec::new()));
        let filters = Rc::new(RefCell::new(Vec::new()));

        let mut state = FilterState::new();
        let ranges_sink = Rc::clone(&ranges);
        state.set_range_observer(move |from, to| ranges_sink.borrow_mut().push((from, to)));
        let filters_sink = Rc::clone(&filters);
        state.set_filter_observer(move |filter| filters_sink.borrow_mut().push(filter));

        state.apply_quick_filter(QuickFilter::Yesterday, d(2024, 3, 15));

        assert_eq!(
            ranges.borrow().as_slice(),
            &[(Some(d(2024, 3, 14)), Some(d(2024, 3, 14)))]
        );
        assert_eq!(filters.borrow().as_slice(), &[QuickFilter::Yesterday]);
        assert_eq!(state.selected(), Some(QuickFilter::Yesterday));
    }

    #[test]
    fn reset_clears_bounds_and_selection() {
        let ranges = Rc::new(RefCell::new(Vec::new()));

        let mut state = FilterState::new();
        state.apply_quick_filter(QuickFilter::ThisMonth, d(2024, 3, 15));
        let ranges_sink = Rc::clone(&ranges);
        state.set_range_observer(move |from, to| ranges_sink.borrow_mut().push((from, to)));

        state.reset();

        assert!(state.range().is_empty());
        assert_eq!(state.selected(), None);
        assert_eq!(ranges.borrow().as_slice(), &[(None, None)]);
        assert_eq!(state.label(), "Select date range");
    }

    #[test]
    fn reset_is_unconditional() {
        let mut state = FilterState::new();
        state.reset();
        assert!(state.range().is_empty());

        state.apply_quick_filter(QuickFilter::LastYear, d(2024, 3, 15));
        state.reset();
        assert!(state.range().is_empty());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn repeated_applications_keep_only_the_latest_range() {
        let mut state = FilterState::new();
        state.apply_quick_filter(QuickFilter::LastWeek, d(2024, 3, 15));
        state.apply_quick_filter(QuickFilter::Today, d(2024, 3, 15));

        assert_eq!(state.range(), DateRange::single_day(d(2024, 3, 15)));
        assert_eq!(state.label(), "Mar 15, 2024");
    }

    #[test]
    fn custom_selection_overwrites_the_stored_range() {
        let mut state = FilterState::new();
        state.apply_quick_filter(QuickFilter::ThisYear, d(2024, 3, 15));
        state.select_range(DateRange::new(d(2024, 1, 10), d(2024, 2, 20)));

        assert_eq!(
            state.range(),
            DateRange::new(d(2024, 1, 10), d(2024, 2, 20))
        );
    }
}
