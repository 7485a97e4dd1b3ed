//! Request lifecycle of the overview view.
//!
//! Every filter change starts a new request with a fresh ticket. A response
//! is applied only if its ticket is still the latest one issued, so a slow
//! response for superseded filters can never overwrite newer data.

use super::api::FetchError;
use super::filters::FilterState;
use contracts::dashboards::d100_sales_overview::{DateBounds, OverviewResponse};
use std::sync::Arc;

/// Monotonically increasing request sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// A response together with the filters it was requested for
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedOverview {
    pub response: OverviewResponse,
    pub filters: FilterState,
}

/// What the view is showing; exactly one at a time
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPhase {
    Idle,
    Loading,
    Ready(Arc<LoadedOverview>),
    NoData,
    Error(String),
}

/// Outcome of resolving a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

/// Product catalog and date bounds from the latest applied response.
/// Kept across loading and error phases so the filter panel stays usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub products: Vec<String>,
    pub date_bounds: Option<DateBounds>,
}

#[derive(Debug, Clone)]
pub struct OverviewState {
    phase: ViewPhase,
    latest: u64,
    pending: Option<FilterState>,
    catalog: Catalog,
}

impl Default for OverviewState {
    fn default() -> Self {
        Self {
            phase: ViewPhase::Idle,
            latest: 0,
            pending: None,
            catalog: Catalog::default(),
        }
    }
}

impl OverviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Start a request for `filters`, superseding any request in flight
    pub fn begin_request(&mut self, filters: FilterState) -> RequestTicket {
        self.latest += 1;
        self.pending = Some(filters);
        self.phase = ViewPhase::Loading;
        RequestTicket(self.latest)
    }

    /// Apply a finished request unless a newer one has been issued since.
    /// A ticket settles once; resolving it again is stale.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<OverviewResponse, FetchError>,
    ) -> Resolution {
        if ticket.0 != self.latest {
            return Resolution::Stale;
        }
        let Some(filters) = self.pending.take() else {
            return Resolution::Stale;
        };

        self.phase = match result {
            Ok(response) => {
                self.catalog = Catalog {
                    products: response.products.clone(),
                    date_bounds: Some(response.date_range),
                };
                if response.has_usable_series() {
                    ViewPhase::Ready(Arc::new(LoadedOverview { response, filters }))
                } else {
                    ViewPhase::NoData
                }
            }
            Err(err) => ViewPhase::Error(err.user_message()),
        };
        Resolution::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::GENERIC_FETCH_ERROR;
    use chrono::NaiveDate;
    use contracts::dashboards::d100_sales_overview::ProductSummaryRow;

    fn response(total_sales: f64, product: &str) -> OverviewResponse {
        OverviewResponse {
            total_sales,
            previous_total_sales: 0.0,
            total_units: 1.0,
            previous_total_units: 0.0,
            avg_order_value: 0.0,
            previous_avg_order_value: 0.0,
            total_orders: 1,
            monthly_trend: vec![],
            product_summary: vec![ProductSummaryRow {
                product: product.to_string(),
                total: total_sales,
            }],
            date_range: DateBounds {
                min: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                max: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            },
            products: vec![product.to_string()],
        }
    }

    fn ready(state: &OverviewState) -> Arc<LoadedOverview> {
        match state.phase() {
            ViewPhase::Ready(loaded) => loaded.clone(),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_starts_idle() {
        let state = OverviewState::new();
        assert_eq!(state.phase(), &ViewPhase::Idle);
        assert_eq!(state.catalog(), &Catalog::default());
    }

    #[test]
    fn test_late_response_for_superseded_request_is_discarded() {
        let mut state = OverviewState::new();
        let filters_a = FilterState::new().with_search_term("a");
        let filters_b = FilterState::new().with_search_term("b");

        let ticket_a = state.begin_request(filters_a);
        let ticket_b = state.begin_request(filters_b.clone());
        assert!(ticket_b > ticket_a);

        assert_eq!(
            state.resolve(ticket_b, Ok(response(200.0, "B"))),
            Resolution::Applied
        );
        assert_eq!(
            state.resolve(ticket_a, Ok(response(100.0, "A"))),
            Resolution::Stale
        );

        let loaded = ready(&state);
        assert_eq!(loaded.response.total_sales, 200.0);
        assert_eq!(loaded.filters, filters_b);
        assert_eq!(state.catalog().products, vec!["B".to_string()]);
    }

    #[test]
    fn test_stale_response_does_not_end_loading() {
        let mut state = OverviewState::new();
        let ticket_a = state.begin_request(FilterState::new());
        let _ticket_b = state.begin_request(FilterState::new().with_search_term("b"));

        assert_eq!(
            state.resolve(ticket_a, Err(FetchError::Transport("timeout".into()))),
            Resolution::Stale
        );
        assert_eq!(state.phase(), &ViewPhase::Loading);
    }

    #[test]
    fn test_new_request_replaces_shown_data_with_loading() {
        let mut state = OverviewState::new();
        let ticket = state.begin_request(FilterState::new());
        state.resolve(ticket, Ok(response(100.0, "A")));
        assert!(matches!(state.phase(), ViewPhase::Ready(_)));

        state.begin_request(FilterState::new().with_search_term("x"));
        assert_eq!(state.phase(), &ViewPhase::Loading);
        // picker constraints survive while loading
        assert_eq!(state.catalog().products, vec!["A".to_string()]);
    }

    #[test]
    fn test_error_phase_carries_user_message() {
        let mut state = OverviewState::new();
        let ticket = state.begin_request(FilterState::new());
        state.resolve(
            ticket,
            Err(FetchError::Server {
                status: 400,
                message: Some("bad range".into()),
            }),
        );
        assert_eq!(state.phase(), &ViewPhase::Error("bad range".to_string()));

        let ticket = state.begin_request(FilterState::new());
        state.resolve(ticket, Err(FetchError::Transport("offline".into())));
        assert_eq!(
            state.phase(),
            &ViewPhase::Error(GENERIC_FETCH_ERROR.to_string())
        );
    }

    #[test]
    fn test_empty_response_is_no_data_not_error() {
        let mut state = OverviewState::new();
        let ticket = state.begin_request(FilterState::new());
        let mut empty = response(0.0, "A");
        empty.product_summary.clear();

        assert_eq!(state.resolve(ticket, Ok(empty)), Resolution::Applied);
        assert_eq!(state.phase(), &ViewPhase::NoData);
        assert!(state.catalog().date_bounds.is_some());
    }

    #[test]
    fn test_ticket_settles_once() {
        let mut state = OverviewState::new();
        let filters = FilterState::new().with_selected_products(["Aspirin"]);
        let ticket = state.begin_request(filters.clone());

        assert_eq!(
            state.resolve(ticket, Ok(response(1.0, "Aspirin"))),
            Resolution::Applied
        );
        assert_eq!(
            state.resolve(ticket, Ok(response(2.0, "Other"))),
            Resolution::Stale
        );

        let loaded = ready(&state);
        assert_eq!(loaded.response.total_sales, 1.0);
        assert_eq!(loaded.filters, filters);
        assert_eq!(state.catalog().products, vec!["Aspirin".to_string()]);
    }
}
