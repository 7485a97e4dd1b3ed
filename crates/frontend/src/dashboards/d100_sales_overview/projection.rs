//! Projection of an `OverviewResponse` onto KPI cards and chart series.

use crate::shared::components::charts::{ChartSeries, PieSlice};
pub use crate::shared::components::stat_card::Trend;
use crate::shared::config::{palette_color, TOTAL_SERIES_COLOR, UNITS_SERIES_COLOR};
use crate::shared::number_format::{format_int, format_percent, format_usd};
use contracts::dashboards::d100_sales_overview::{OverviewResponse, TOTAL_KEY};

pub const UNITS_SERIES: &str = "Units";

/// Period-over-period change of a KPI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentChange {
    pub trend: Trend,
    /// `abs` of the change in percent, `None` when not computable
    pub magnitude: Option<f64>,
}

impl PercentChange {
    /// `(current - previous) / previous * 100`, never NaN or infinite.
    ///
    /// A zero previous value has no ratio: the change is `Unknown` unless the
    /// current value is zero as well, which is a flat 0%.
    pub fn between(current: f64, previous: f64) -> Self {
        if !current.is_finite() || !previous.is_finite() {
            return Self::unknown();
        }
        if previous == 0.0 {
            return if current == 0.0 {
                Self::flat()
            } else {
                Self::unknown()
            };
        }

        let change = (current - previous) / previous * 100.0;
        if !change.is_finite() {
            return Self::unknown();
        }
        let trend = if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        };
        Self {
            trend,
            magnitude: Some(change.abs()),
        }
    }

    fn flat() -> Self {
        Self {
            trend: Trend::Flat,
            magnitude: Some(0.0),
        }
    }

    fn unknown() -> Self {
        Self {
            trend: Trend::Unknown,
            magnitude: None,
        }
    }

    /// "10.0%" or "n/a"
    pub fn label(&self) -> String {
        match self.magnitude {
            Some(m) => format_percent(m),
            None => "n/a".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiKind {
    TotalSales,
    TotalUnits,
    AvgOrderValue,
}

impl KpiKind {
    pub fn title(self) -> &'static str {
        match self {
            KpiKind::TotalSales => "Total Sales",
            KpiKind::TotalUnits => "Total Units",
            KpiKind::AvgOrderValue => "Average Order Value",
        }
    }

    pub fn info(self) -> &'static str {
        match self {
            KpiKind::TotalSales => "Total revenue from all sales in the selected period",
            KpiKind::TotalUnits => "Total number of units sold in the selected period",
            KpiKind::AvgOrderValue => "Average value per order in the selected period",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            KpiKind::TotalSales => "sales",
            KpiKind::TotalUnits => "products",
            KpiKind::AvgOrderValue => "orders",
        }
    }

    pub fn format_value(self, value: f64) -> String {
        match self {
            KpiKind::TotalUnits => format_int(value),
            KpiKind::TotalSales | KpiKind::AvgOrderValue => format_usd(value),
        }
    }
}

/// One KPI card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiSummary {
    pub kind: KpiKind,
    pub value: f64,
    pub change: PercentChange,
}

impl KpiSummary {
    pub fn new(kind: KpiKind, value: f64, previous: f64) -> Self {
        Self {
            kind,
            value,
            change: PercentChange::between(value, previous),
        }
    }

    pub fn formatted_value(&self) -> String {
        self.kind.format_value(self.value)
    }
}

/// Total sales, total units and average order value, in display order
pub fn kpi_summaries(response: &OverviewResponse) -> [KpiSummary; 3] {
    [
        KpiSummary::new(
            KpiKind::TotalSales,
            response.total_sales,
            response.previous_total_sales,
        ),
        KpiSummary::new(
            KpiKind::TotalUnits,
            response.total_units,
            response.previous_total_units,
        ),
        KpiSummary::new(
            KpiKind::AvgOrderValue,
            response.avg_order_value,
            response.previous_avg_order_value,
        ),
    ]
}

/// Series for the dual-axis trend chart
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub months: Vec<String>,
    /// Revenue series on the primary axis
    pub revenue: Vec<ChartSeries>,
    /// Units on the secondary axis, always present
    pub units: ChartSeries,
}

/// One revenue series per selected product (palette colour by position), or
/// a single aggregate "Total" series when nothing is selected.
pub fn trend_chart(response: &OverviewResponse, selected_products: &[String]) -> TrendChart {
    let months = response
        .monthly_trend
        .iter()
        .map(|p| p.month.clone())
        .collect();

    let series_for = |key: &str, color: &str| ChartSeries {
        name: key.to_string(),
        color: color.to_string(),
        values: response.monthly_trend.iter().map(|p| p.value(key)).collect(),
    };

    let revenue = if selected_products.is_empty() {
        vec![series_for(TOTAL_KEY, TOTAL_SERIES_COLOR)]
    } else {
        selected_products
            .iter()
            .enumerate()
            .map(|(i, product)| series_for(product, palette_color(i)))
            .collect()
    };

    let units = ChartSeries {
        name: UNITS_SERIES.to_string(),
        color: UNITS_SERIES_COLOR.to_string(),
        values: response.monthly_trend.iter().map(|p| p.units).collect(),
    };

    TrendChart {
        months,
        revenue,
        units,
    }
}

/// Product revenue in server order
pub fn product_bars(response: &OverviewResponse) -> Vec<(String, f64)> {
    response
        .product_summary
        .iter()
        .map(|row| (row.product.clone(), row.total))
        .collect()
}

/// Share of `whole` as a one-decimal percentage; a zero or invalid whole is "0.0%"
pub fn share_label(part: f64, whole: f64) -> String {
    let share = part / whole * 100.0;
    if whole == 0.0 || !share.is_finite() {
        return format_percent(0.0);
    }
    format_percent(share)
}

/// Pie slices in server order, labelled with their share of total sales
pub fn pie_slices(response: &OverviewResponse) -> Vec<PieSlice> {
    response
        .product_summary
        .iter()
        .enumerate()
        .map(|(i, row)| PieSlice {
            name: row.product.clone(),
            value: row.total,
            color: palette_color(i).to_string(),
            label: format!(
                "{} ({})",
                row.product,
                share_label(row.total, response.total_sales)
            ),
        })
        .collect()
}
