//! Sidebar filter panel and the chips listing active filters.

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

fn panel_class(expanded: bool) -> &'static str {
    if expanded {
        "filter-panel filter-panel--expanded"
    } else {
        "filter-panel filter-panel--collapsed"
    }
}

/// Badge text for the header, hidden when nothing narrows the result
fn count_badge(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

/// Collapsible panel. The header toggles the body and carries the active
/// filter count plus a "Clear All" action; chips render under the fields.
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,
    #[prop(into)]
    active_filters_count: Signal<usize>,
    on_clear: Callback<()>,
    /// Form fields
    #[prop(into)]
    filter_content: ChildrenFn,
    /// Active filter chips
    #[prop(optional, into)]
    filter_tags: Option<ChildrenFn>,
) -> impl IntoView {
    view! {
        <section class=move || panel_class(is_expanded.get())>
            <header class="filter-panel__header">
                <button
                    type="button"
                    class="filter-panel__toggle"
                    aria-expanded=move || is_expanded.get().to_string()
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class="filter-panel__chevron">{icon("chevron")}</span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || count_badge(active_filters_count.get()).map(|text| view! {
                        <span class="badge badge--primary">{text}</span>
                    })}
                </button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || active_filters_count.get() == 0)
                    on_click=move |_| on_clear.run(())
                >
                    "Clear All"
                </Button>
            </header>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel__body">
                    {filter_content()}
                    {filter_tags.clone().map(|tags| view! {
                        <div class="filter-panel__tags">{tags()}</div>
                    })}
                </div>
            </Show>
        </section>
    }
}

/// Removable chip for one active filter
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <span class="filter-tag">
            {label}
            <button
                type="button"
                class="filter-tag__remove"
                aria-label="Remove filter"
                on:click=move |_| on_remove.run(())
            >
                {icon("close")}
            </button>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_badge_hidden_without_filters() {
        assert_eq!(count_badge(0), None);
        assert_eq!(count_badge(3), Some("3".to_string()));
    }

    #[test]
    fn test_panel_class() {
        assert_eq!(panel_class(true), "filter-panel filter-panel--expanded");
        assert_eq!(panel_class(false), "filter-panel filter-panel--collapsed");
    }
}
