use super::results::OverviewResults;
use super::sidebar::SalesFilters;
use crate::dashboards::d100_sales_overview::api::{fetch_overview, FetchError};
use crate::dashboards::d100_sales_overview::filters::FilterStore;
use crate::dashboards::d100_sales_overview::state::{OverviewState, Resolution, ViewPhase};
use crate::shared::config::NO_DATA_MESSAGE;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Sales overview dashboard: filter sidebar plus KPI cards and charts.
///
/// Every filter change issues a new request; only the latest one may
/// update the view.
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let store = FilterStore::new();
    provide_context(store);

    let overview = RwSignal::new(OverviewState::new());

    Effect::new(move |_| {
        let filters = store.snapshot();
        let query = filters.to_query();
        let Some(ticket) = overview.try_update(|s| s.begin_request(filters)) else {
            return;
        };

        spawn_local(async move {
            let result = fetch_overview(&query).await;
            match &result {
                // already reported with the server message
                Ok(_) | Err(FetchError::Server { .. }) => {}
                Err(err) => log::error!("Failed to load sales overview: {}", err),
            }
            if let Some(Resolution::Stale) = overview.try_update(|s| s.resolve(ticket, result)) {
                log::debug!("discarded stale overview response {:?}", ticket);
            }
        });
    });

    let catalog = Signal::derive(move || overview.with(|s| s.catalog().clone()));
    let phase = Memo::new(move |_| overview.with(|s| s.phase().clone()));

    view! {
        <PageFrame page_id="d100_sales_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2 class="page__title">"Pharmaceutical Sales Dashboard"</h2>
            </div>

            <div class="page__content sales-overview">
                <aside class="sales-overview__sidebar">
                    <SalesFilters catalog=catalog />
                </aside>

                <main class="sales-overview__main">
                    {move || match phase.get() {
                        ViewPhase::Idle | ViewPhase::Loading => view! {
                            <div class="sales-overview__loading">
                                <Spinner />
                                <span>"Loading..."</span>
                            </div>
                        }
                        .into_any(),
                        ViewPhase::Error(message) => view! {
                            <div class="alert alert--error">{message}</div>
                        }
                        .into_any(),
                        ViewPhase::NoData => view! {
                            <div class="sales-overview__empty">{NO_DATA_MESSAGE}</div>
                        }
                        .into_any(),
                        ViewPhase::Ready(loaded) => view! {
                            <OverviewResults loaded=loaded />
                        }
                        .into_any(),
                    }}
                </main>
            </div>
        </PageFrame>
    }
}
