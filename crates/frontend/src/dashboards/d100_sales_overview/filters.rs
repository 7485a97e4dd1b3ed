//! Filter state for the sales overview.
//!
//! `FilterState` is an immutable snapshot: every change produces a new value.
//! `FilterStore` owns the current snapshot in a reactive signal, so every
//! subscriber (the overview fetch effect, the filter panel) is notified
//! synchronously after each mutation.

use super::presets::{Clock, DatePreset, SystemClock};
use chrono::NaiveDate;
use contracts::dashboards::d100_sales_overview::OverviewQuery;
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    /// Unique names in insertion order; empty means "all products"
    selected_products: Vec<String>,
    search_term: String,
}

/// A single mutation of the filter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    DateRange(Option<NaiveDate>, Option<NaiveDate>),
    Products(Vec<String>),
    ToggleProduct(String),
    Search(String),
    Preset(DatePreset),
    ClearAll,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn selected_products(&self) -> &[String] {
        &self.selected_products
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_selected(&self, product: &str) -> bool {
        self.selected_products.iter().any(|p| p == product)
    }

    /// Apply one change. `today` resolves relative presets.
    pub fn apply(self, change: FilterChange, today: NaiveDate) -> Self {
        match change {
            FilterChange::DateRange(start, end) => self.with_date_range(start, end),
            FilterChange::Products(list) => self.with_selected_products(list),
            FilterChange::ToggleProduct(product) => self.with_product_toggled(&product),
            FilterChange::Search(text) => self.with_search_term(text),
            FilterChange::Preset(preset) => self.with_preset(preset, today),
            FilterChange::ClearAll => Self::default(),
        }
    }

    /// Store new bounds. A reversed range is swapped rather than sent as-is.
    pub fn with_date_range(self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let (start_date, end_date) = match (start, end) {
            (Some(s), Some(e)) if s > e => (Some(e), Some(s)),
            other => other,
        };
        Self {
            start_date,
            end_date,
            ..self
        }
    }

    /// Replace the product set, keeping the first occurrence of duplicates
    pub fn with_selected_products<I, S>(self, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selected_products: Vec<String> = Vec::new();
        for product in products {
            let product = product.into();
            if !selected_products.contains(&product) {
                selected_products.push(product);
            }
        }
        Self {
            selected_products,
            ..self
        }
    }

    /// Append the product if absent, remove it otherwise
    pub fn with_product_toggled(mut self, product: &str) -> Self {
        if self.is_selected(product) {
            self.selected_products.retain(|p| p != product);
        } else {
            self.selected_products.push(product.to_string());
        }
        self
    }

    pub fn with_search_term(self, search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..self
        }
    }

    pub fn with_preset(self, preset: DatePreset, today: NaiveDate) -> Self {
        let (start, end) = preset.resolve(today);
        self.with_date_range(Some(start), Some(end))
    }

    /// Number of filter dimensions currently narrowing the result
    pub fn active_filter_count(&self) -> usize {
        let has_dates = self.start_date.is_some() || self.end_date.is_some();
        let has_products = !self.selected_products.is_empty();
        let has_search = !self.search_term.trim().is_empty();
        [has_dates, has_products, has_search]
            .into_iter()
            .filter(|active| *active)
            .count()
    }

    /// Query parameters for the overview endpoint
    pub fn to_query(&self) -> OverviewQuery {
        let products = if self.selected_products.is_empty() {
            None
        } else {
            Some(self.selected_products.join(","))
        };
        OverviewQuery {
            start_date: self.start_date,
            end_date: self.end_date,
            products,
            search: self.search_term.clone(),
        }
    }
}

/// Bookkeeping for the debounced search box.
///
/// Every keystroke schedules a commit; only the most recently scheduled one
/// may reach the store. `committed` is the term the box last pushed or
/// adopted, so changes made elsewhere can be told apart from our own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDebounce {
    seq: u64,
    committed: String,
}

impl SearchDebounce {
    pub fn new(committed: impl Into<String>) -> Self {
        Self {
            seq: 0,
            committed: committed.into(),
        }
    }

    /// Start a new wait, superseding any pending one
    pub fn schedule(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Claim the commit for `seq`; false if superseded or cancelled
    pub fn commit(&mut self, seq: u64, text: &str) -> bool {
        if seq != self.seq {
            return false;
        }
        self.committed = text.to_string();
        true
    }

    /// Drop any pending commit and forget the typed text
    pub fn reset(&mut self) {
        self.seq += 1;
        self.committed.clear();
    }

    /// The store's term changed; returns the text the box should show when
    /// the change did not come from the box itself
    pub fn adopt(&mut self, term: &str) -> Option<String> {
        if term == self.committed {
            return None;
        }
        self.seq += 1;
        self.committed = term.to_string();
        Some(term.to_string())
    }
}

/// Reactive owner of the current `FilterState`.
///
/// Provided once via context by the dashboard page; children read the
/// snapshot or call the mutation methods.
#[derive(Clone, Copy)]
pub struct FilterStore {
    state: RwSignal<FilterState>,
    clock: StoredValue<Arc<dyn Clock + Send + Sync>>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + Send + Sync + 'static) -> Self {
        let clock: Arc<dyn Clock + Send + Sync> = Arc::new(clock);
        Self {
            state: RwSignal::new(FilterState::default()),
            clock: StoredValue::new(clock),
        }
    }

    /// Current snapshot, tracked by the surrounding reactive scope
    pub fn snapshot(&self) -> FilterState {
        self.state.get()
    }

    pub fn snapshot_untracked(&self) -> FilterState {
        self.state.get_untracked()
    }

    /// Apply a change and notify subscribers if the snapshot actually changed
    pub fn dispatch(&self, change: FilterChange) {
        let today = self.clock.with_value(|clock| clock.today());
        self.state.maybe_update(|state| {
            let next = state.clone().apply(change, today);
            if next == *state {
                false
            } else {
                *state = next;
                true
            }
        });
    }

    pub fn set_date_range(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.dispatch(FilterChange::DateRange(start, end));
    }

    pub fn set_selected_products(&self, products: Vec<String>) {
        self.dispatch(FilterChange::Products(products));
    }

    pub fn toggle_product(&self, product: impl Into<String>) {
        self.dispatch(FilterChange::ToggleProduct(product.into()));
    }

    pub fn set_search_term(&self, text: impl Into<String>) {
        self.dispatch(FilterChange::Search(text.into()));
    }

    pub fn apply_preset(&self, preset: DatePreset) {
        self.dispatch(FilterChange::Preset(preset));
    }

    pub fn clear_all(&self) {
        self.dispatch(FilterChange::ClearAll);
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::presets::FixedClock;
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn busy_state() -> FilterState {
        FilterState::new()
            .with_date_range(Some(d(2024, 1, 1)), Some(d(2024, 1, 31)))
            .with_selected_products(["Aspirin", "Ibuprofen"])
            .with_search_term("acme")
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let today = d(2024, 3, 15);
        let cleared = busy_state().apply(FilterChange::ClearAll, today);
        assert_eq!(cleared, FilterState::new());
        assert_eq!(cleared.start_date(), None);
        assert_eq!(cleared.end_date(), None);
        assert!(cleared.selected_products().is_empty());
        assert_eq!(cleared.search_term(), "");
    }

    #[test]
    fn test_sequential_changes_fold_over_initial_state() {
        let today = d(2024, 3, 15);
        let changes = vec![
            FilterChange::Search("cold".to_string()),
            FilterChange::Preset(DatePreset::ThisMonth),
            FilterChange::Products(vec!["Aspirin".to_string()]),
            FilterChange::ToggleProduct("Ibuprofen".to_string()),
            FilterChange::ToggleProduct("Aspirin".to_string()),
            FilterChange::DateRange(Some(d(2024, 2, 1)), None),
        ];

        let folded = changes
            .iter()
            .cloned()
            .fold(FilterState::new(), |state, change| state.apply(change, today));

        assert_eq!(folded.search_term(), "cold");
        assert_eq!(folded.selected_products(), ["Ibuprofen".to_string()]);
        assert_eq!(folded.start_date(), Some(d(2024, 2, 1)));
        assert_eq!(folded.end_date(), None);

        let owner = Owner::new();
        owner.set();
        let store = FilterStore::with_clock(FixedClock(today));
        for change in changes {
            store.dispatch(change);
        }
        assert_eq!(store.snapshot_untracked(), folded);
    }

    #[test]
    fn test_reversed_range_is_swapped() {
        let state = FilterState::new().with_date_range(Some(d(2024, 5, 1)), Some(d(2024, 4, 1)));
        assert_eq!(state.start_date(), Some(d(2024, 4, 1)));
        assert_eq!(state.end_date(), Some(d(2024, 5, 1)));
    }

    #[test]
    fn test_open_ended_range() {
        let state = busy_state().with_date_range(None, Some(d(2024, 4, 1)));
        assert_eq!(state.start_date(), None);
        assert_eq!(state.end_date(), Some(d(2024, 4, 1)));
    }

    #[test]
    fn test_products_keep_insertion_order_without_duplicates() {
        let state = FilterState::new().with_selected_products(["B", "A", "B", "C"]);
        assert_eq!(state.selected_products(), ["B", "A", "C"]);

        let state = state.with_product_toggled("A").with_product_toggled("D");
        assert_eq!(state.selected_products(), ["B", "C", "D"]);
        assert!(state.is_selected("D"));
        assert!(!state.is_selected("A"));
    }

    #[test]
    fn test_preset_applies_date_range() {
        let state = busy_state().with_preset(DatePreset::FullYear, d(2024, 3, 15));
        assert_eq!(state.start_date(), Some(d(2024, 1, 1)));
        assert_eq!(state.end_date(), Some(d(2024, 12, 31)));
        assert_eq!(state.search_term(), "acme");
    }

    #[test]
    fn test_active_filter_count() {
        assert_eq!(FilterState::new().active_filter_count(), 0);
        assert_eq!(busy_state().active_filter_count(), 3);
        assert_eq!(
            FilterState::new().with_search_term("   ").active_filter_count(),
            0
        );
    }

    #[test]
    fn test_to_query() {
        let query = busy_state().to_query();
        assert_eq!(query.start_date, Some(d(2024, 1, 1)));
        assert_eq!(query.end_date, Some(d(2024, 1, 31)));
        assert_eq!(query.products.as_deref(), Some("Aspirin,Ibuprofen"));
        assert_eq!(query.search, "acme");

        let query = FilterState::new().to_query();
        assert_eq!(query.products, None);
        assert_eq!(query.search, "");
    }

    #[test]
    fn test_store_apply_preset_uses_injected_clock() {
        let owner = Owner::new();
        owner.set();
        let store = FilterStore::with_clock(FixedClock(d(2024, 3, 15)));

        store.apply_preset(DatePreset::LastMonth);
        let snapshot = store.snapshot_untracked();
        assert_eq!(snapshot.start_date(), Some(d(2024, 2, 1)));
        assert_eq!(snapshot.end_date(), Some(d(2024, 2, 29)));

        store.toggle_product("Aspirin");
        store.set_search_term("acme");
        store.clear_all();
        assert_eq!(store.snapshot_untracked(), FilterState::new());
    }

    #[test]
    fn test_search_debounce_commits_latest_only() {
        let mut debounce = SearchDebounce::new("");
        let first = debounce.schedule();
        let second = debounce.schedule();
        assert!(!debounce.commit(first, "ab"));
        assert!(debounce.commit(second, "abc"));
        // own commit echoed back by the store
        assert_eq!(debounce.adopt("abc"), None);
    }

    #[test]
    fn test_search_debounce_reset_cancels_pending_text() {
        let mut debounce = SearchDebounce::new("");
        let pending = debounce.schedule();
        debounce.reset();
        assert!(!debounce.commit(pending, "typed"));
        assert_eq!(debounce.adopt(""), None);
    }

    #[test]
    fn test_search_debounce_adopts_external_change() {
        let mut debounce = SearchDebounce::new("");
        let seq = debounce.schedule();
        assert!(debounce.commit(seq, "cold"));

        let pending = debounce.schedule();
        assert_eq!(debounce.adopt(""), Some(String::new()));
        assert!(!debounce.commit(pending, "cold+"));
    }
}
