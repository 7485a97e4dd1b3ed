use crate::shared::date_utils::{parse_iso, to_iso};
use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

/// DateRangePicker component - two native date inputs plus a row of quick-select
/// buttons.
///
/// The picker only reports what the user picked; normalization (swapping a
/// reversed range) is up to the owner of the filter state. An emptied input
/// reports `None` for that bound.
#[component]
pub fn DateRangePicker(
    /// Lower bound, `None` for an open range
    #[prop(into)]
    date_from: Signal<Option<NaiveDate>>,

    /// Upper bound, `None` for an open range
    #[prop(into)]
    date_to: Signal<Option<NaiveDate>>,

    /// Earliest and latest selectable dates, if known
    #[prop(into)]
    bounds: Signal<Option<(NaiveDate, NaiveDate)>>,

    /// Callback when either input changes (from, to)
    on_change: Callback<(Option<NaiveDate>, Option<NaiveDate>)>,

    /// Labels of the quick-select buttons
    #[prop(optional)]
    quick_ranges: Vec<&'static str>,

    /// Callback with the label of the pressed quick-select button
    #[prop(optional)]
    on_quick_range: Option<Callback<&'static str>>,

    /// Optional label for the component
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let iso_value = |date: Option<NaiveDate>| date.map(to_iso).unwrap_or_default();
    let min_attr = move || bounds.get().map(|(min, _)| to_iso(min)).unwrap_or_default();
    let max_attr = move || bounds.get().map(|(_, max)| to_iso(max)).unwrap_or_default();

    let on_from_input = move |ev: leptos::ev::Event| {
        let new_from = parse_iso(&event_target_value(&ev));
        on_change.run((new_from, date_to.get_untracked()));
    };

    let on_to_input = move |ev: leptos::ev::Event| {
        let new_to = parse_iso(&event_target_value(&ev));
        on_change.run((date_from.get_untracked(), new_to));
    };

    let quick_buttons = on_quick_range.map(|on_quick_range| {
        quick_ranges
            .into_iter()
            .map(|range_label| {
                view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_quick_range.run(range_label)
                    >
                        {range_label}
                    </Button>
                }
            })
            .collect_view()
    });

    view! {
        <Flex vertical=true gap=FlexGap::Small class="date-range-picker">
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            {quick_buttons.map(|buttons| view! {
                <div class="date-range-picker__quick">
                    <div class="date-range-picker__caption">"Quick Select"</div>
                    <div class="date-range-picker__quick-buttons">
                        {buttons}
                    </div>
                </div>
            })}

            <Flex class="date-range-picker__inputs" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=move || iso_value(date_from.get())
                    min=min_attr
                    max=max_attr
                    on:input=on_from_input
                />

                <div>"—"</div>

                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=move || iso_value(date_to.get())
                    min=min_attr
                    max=max_attr
                    on:input=on_to_input
                />
            </Flex>
            <div class="date-range-picker__hint">"Select date range"</div>
        </Flex>
    }
}
