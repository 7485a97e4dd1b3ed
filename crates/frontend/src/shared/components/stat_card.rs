use crate::shared::icons::icon;
use leptos::prelude::*;

/// Direction of a value relative to the previous period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
    /// No meaningful comparison is possible
    Unknown,
}

impl Trend {
    fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "\u{2191}",
            Trend::Down => "\u{2193}",
            Trend::Flat => "\u{2192}",
            Trend::Unknown => "",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Trend::Up => "stat-card__change stat-card__change--up",
            Trend::Down => "stat-card__change stat-card__change--down",
            Trend::Flat | Trend::Unknown => "stat-card__change stat-card__change--flat",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted primary value
    #[prop(into)]
    value: String,
    /// Change vs previous period, e.g. "10.0%" or "n/a"
    #[prop(into)]
    change_text: String,
    trend: Trend,
    /// Tooltip explaining the metric
    #[prop(into, optional)]
    info: Option<String>,
) -> impl IntoView {
    let change = format!("{}{} vs previous period", trend.arrow(), change_text);

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">
                    {label}
                    {info.map(|text| view! {
                        <span class="stat-card__info" title=text>{icon("info")}</span>
                    })}
                </div>
                <div class="stat-card__value">{value}</div>
                <span class=trend.class()>{change}</span>
            </div>
        </div>
    }
}
