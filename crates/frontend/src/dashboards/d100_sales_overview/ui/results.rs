use crate::dashboards::d100_sales_overview::projection::{
    kpi_summaries, pie_slices, product_bars, trend_chart,
};
use crate::dashboards::d100_sales_overview::state::LoadedOverview;
use crate::shared::components::charts::{AreaChart, HorizontalBarChart, PieChart};
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::UNITS_SERIES_COLOR;
use crate::shared::number_format::{format_int, format_usd};
use leptos::prelude::*;
use std::sync::Arc;

/// KPI cards and charts for one applied response
#[component]
pub fn OverviewResults(loaded: Arc<LoadedOverview>) -> impl IntoView {
    let response = &loaded.response;

    let cards = kpi_summaries(response)
        .into_iter()
        .map(|kpi| {
            view! {
                <StatCard
                    label=kpi.kind.title()
                    icon_name=kpi.kind.icon()
                    value=kpi.formatted_value()
                    change_text=kpi.change.label()
                    trend=kpi.change.trend
                    info=kpi.kind.info()
                />
            }
        })
        .collect_view();

    let trend = trend_chart(response, loaded.filters.selected_products());
    let bars = product_bars(response);
    let slices = pie_slices(response);

    view! {
        <div class="sales-overview__kpis">
            {cards}
        </div>

        <div class="sales-overview__panel">
            <h3 class="sales-overview__panel-title">"Sales Trend"</h3>
            <AreaChart
                categories=trend.months
                primary=trend.revenue
                secondary=vec![trend.units]
                format_primary=format_usd
                format_secondary=format_int
            />
        </div>

        <div class="sales-overview__row">
            <div class="sales-overview__panel">
                <h3 class="sales-overview__panel-title">"Sales by Product"</h3>
                <HorizontalBarChart data=bars color=UNITS_SERIES_COLOR format_value=format_usd />
            </div>
            <div class="sales-overview__panel">
                <h3 class="sales-overview__panel-title">"Product Distribution"</h3>
                <PieChart slices=slices format_value=format_usd />
            </div>
        </div>
    }
}
