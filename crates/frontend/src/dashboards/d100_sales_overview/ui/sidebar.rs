use crate::dashboards::d100_sales_overview::filters::{FilterStore, SearchDebounce};
use crate::dashboards::d100_sales_overview::presets::DatePreset;
use crate::dashboards::d100_sales_overview::state::Catalog;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::ui::Checkbox;
use crate::shared::config::SEARCH_DEBOUNCE;
use crate::shared::date_utils::format_date;
use chrono::NaiveDate;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::{Input, Label};

/// Filter sidebar: date range with presets, product multi-select and a
/// debounced free-text search.
#[component]
pub fn SalesFilters(
    /// Products and date bounds of the latest applied response
    #[prop(into)]
    catalog: Signal<Catalog>,
) -> impl IntoView {
    let store = expect_context::<FilterStore>();
    let is_expanded = RwSignal::new(true);

    let active_count = Signal::derive(move || store.snapshot().active_filter_count());
    let date_from = Signal::derive(move || store.snapshot().start_date());
    let date_to = Signal::derive(move || store.snapshot().end_date());
    let bounds = Signal::derive(move || {
        catalog.with(|c| c.date_bounds.map(|b| (b.min, b.max)))
    });

    let on_date_change = Callback::new(move |(from, to): (Option<NaiveDate>, Option<NaiveDate>)| {
        store.set_date_range(from, to);
    });

    let on_preset = Callback::new(move |label: &'static str| match DatePreset::from_label(label) {
        Some(preset) => store.apply_preset(preset),
        None => log::warn!("unknown date preset: {}", label),
    });

    let quick_ranges: Vec<&'static str> = DatePreset::ALL.iter().map(|p| p.label()).collect();

    // Search box text; pushed into the store once typing pauses
    let search_text = RwSignal::new(store.snapshot_untracked().search_term().to_string());
    let debounce = StoredValue::new(SearchDebounce::new(search_text.get_untracked()));

    Effect::new(move |_| {
        let text = search_text.get();
        let Some(seq) = debounce.try_update_value(|d| d.schedule()) else {
            return;
        };

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE.as_millis() as u32).await;
            if debounce.try_update_value(|d| d.commit(seq, &text)) == Some(true) {
                store.set_search_term(text);
            }
        });
    });

    // Search term cleared or replaced from outside the box
    Effect::new(move |_| {
        let term = store.snapshot().search_term().to_string();
        if let Some(Some(text)) = debounce.try_update_value(|d| d.adopt(&term)) {
            search_text.set(text);
        }
    });

    let clear_search = Callback::new(move |_: ()| {
        debounce.update_value(|d| d.reset());
        search_text.set(String::new());
        store.set_search_term("");
    });

    let on_clear = Callback::new(move |_: ()| {
        clear_search.run(());
        store.clear_all();
    });

    let filter_content: ChildrenFn = Arc::new(move || {
        view! {
            <div class="sales-filters">
                <DateRangePicker
                    date_from=date_from
                    date_to=date_to
                    bounds=bounds
                    on_change=on_date_change
                    quick_ranges=quick_ranges.clone()
                    on_quick_range=on_preset
                    label="Date Range".to_string()
                />

                <div class="sales-filters__section">
                    <Label>"Products"</Label>
                    <div class="sales-filters__products">
                        {move || {
                            catalog
                                .get()
                                .products
                                .into_iter()
                                .map(|product| {
                                    let checked = {
                                        let product = product.clone();
                                        Signal::derive(move || store.snapshot().is_selected(&product))
                                    };
                                    let on_toggle = {
                                        let product = product.clone();
                                        Callback::new(move |_: bool| store.toggle_product(product.clone()))
                                    };
                                    view! {
                                        <Checkbox label=product checked=checked on_change=on_toggle />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="sales-filters__section">
                    <Label>"Search"</Label>
                    <Input value=search_text placeholder="Search products..." />
                </div>
            </div>
        }
        .into_any()
    });

    let filter_tags: ChildrenFn =
        Arc::new(move || view! { {move || active_filter_tags(store, clear_search)} }.into_any());

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=active_count
            on_clear=on_clear
            filter_content=filter_content
            filter_tags=filter_tags
        />
    }
}

/// One removable tag per active filter
fn active_filter_tags(store: FilterStore, clear_search: Callback<()>) -> AnyView {
    let filters = store.snapshot();

    let date_tag = match (filters.start_date(), filters.end_date()) {
        (None, None) => None,
        (from, to) => {
            let label = format!(
                "{} - {}",
                from.map(format_date).unwrap_or_else(|| "...".to_string()),
                to.map(format_date).unwrap_or_else(|| "...".to_string()),
            );
            Some(view! {
                <FilterTag
                    label=label
                    on_remove=Callback::new(move |_: ()| store.set_date_range(None, None))
                />
            })
        }
    };

    let product_tags = filters
        .selected_products()
        .iter()
        .cloned()
        .map(|product| {
            let removed = product.clone();
            view! {
                <FilterTag
                    label=product
                    on_remove=Callback::new(move |_: ()| store.toggle_product(removed.clone()))
                />
            }
        })
        .collect_view();

    let search_tag = (!filters.search_term().is_empty()).then(|| {
        view! {
            <FilterTag
                label={format!("\"{}\"", filters.search_term())}
                on_remove=clear_search
            />
        }
    });

    view! { {date_tag} {product_tags} {search_tag} }.into_any()
}
